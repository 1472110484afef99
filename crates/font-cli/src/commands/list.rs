//! List command implementation

use colored::Colorize;
use font_core::{FontManager, FontRule};

use crate::error::Result;

/// Print every registered font rule.
pub fn run_list(manager: &FontManager, json: bool) -> Result<()> {
    let rules = manager.list()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rules)?);
        return Ok(());
    }

    if rules.is_empty() {
        println!("{} No font rules in {}", "=>".blue().bold(), manager.config().stylesheet_path());
        return Ok(());
    }

    println!("{}", "Font Rules".bold());
    println!();
    for rule in &rules {
        println!("  {}", format_rule(rule));
    }
    println!();
    println!("{} {} rule(s)", "Total:".dimmed(), rules.len());
    Ok(())
}

fn format_rule(rule: &FontRule) -> String {
    let mut line = format!("{:<24} {}", rule.family.cyan(), rule.file_name);
    let details: Vec<&str> = [rule.weight.as_deref(), rule.style.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !details.is_empty() {
        line.push_str(&format!(" {}", format!("({})", details.join(", ")).dimmed()));
    }
    line
}
