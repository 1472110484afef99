//! Configuration display command

use colored::Colorize;
use font_core::Config;

use crate::error::Result;

const REDACTED: &str = "********";

/// Display the resolved configuration. The API key is never printed.
pub fn run_config_show(config: &Config, json: bool) -> Result<()> {
    let api_key = config.api_key.as_ref().map(|_| REDACTED);

    if json {
        let output = serde_json::json!({
            "install_path": config.install_path.as_str(),
            "port": config.port,
            "api_key": api_key,
            "stylesheet": config.stylesheet_path().as_str(),
            "font_dir": config.font_dir().as_str(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "Font Manager Configuration".bold());
    println!();
    println!("  {:<14} {}", "Install path:".dimmed(), config.install_path);
    println!("  {:<14} {}", "Port:".dimmed(), config.port);
    match api_key {
        Some(redacted) => println!("  {:<14} {}", "API key:".dimmed(), redacted),
        None => println!("  {:<14} {}", "API key:".dimmed(), "(none)".dimmed()),
    }
    println!();
    println!("  {:<14} {}", "Stylesheet:".dimmed(), config.stylesheet_path());
    println!("  {:<14} {}", "Font dir:".dimmed(), config.font_dir());

    Ok(())
}
