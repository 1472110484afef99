//! Font Manager CLI
//!
//! The command-line interface for managing the `@font-face` rules and font
//! files of a web app install.

mod cli;
mod commands;
mod context;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use error::Result;
use font_core::FontManager;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir()?;
    let config = context::resolve_config(&cli, &cwd)?;

    execute_command(cli.command, &FontManager::new(config))
}

/// Logs go to stderr so `--json` output stays parseable.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init();
    if installed.is_ok() {
        tracing::debug!("Verbose mode enabled");
    }
}

fn execute_command(cmd: Commands, manager: &FontManager) -> Result<()> {
    match cmd {
        Commands::List { json } => commands::run_list(manager, json),
        Commands::Add {
            font_file,
            family,
            weight,
            style,
            name,
        } => commands::run_add(
            manager,
            &font_file,
            &commands::AddOptions {
                family: &family,
                weight: &weight,
                style: &style,
                name: name.as_deref(),
            },
        ),
        Commands::Delete {
            family,
            file_name,
            dry_run,
        } => commands::run_delete(manager, &family, &file_name, dry_run),
        Commands::Edit {
            from,
            to,
            file_name,
            dry_run,
        } => commands::run_edit(manager, &from, &to, &file_name, dry_run),
        Commands::Config { json } => commands::run_config_show(manager.config(), json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use font_core::Config;
    use font_test_utils::TestInstall;

    fn manager(install: &TestInstall) -> FontManager {
        FontManager::new(Config::new(install.root()))
    }

    #[test]
    fn test_execute_list_on_empty_install() {
        let install = TestInstall::new();
        let result = execute_command(Commands::List { json: false }, &manager(&install));
        assert!(result.is_ok());
    }

    #[test]
    fn test_execute_edit_missing_rule_fails() {
        let install = TestInstall::new().with_stylesheet("body {}\n");
        let result = execute_command(
            Commands::Edit {
                from: "A".to_string(),
                to: "B".to_string(),
                file_name: "a.woff2".to_string(),
                dry_run: false,
            },
            &manager(&install),
        );
        assert!(matches!(
            result,
            Err(error::CliError::Core(font_core::Error::RuleNotFound { .. }))
        ));
    }

    #[test]
    fn test_execute_config_reads_manager_config() {
        let install = TestInstall::new();
        let result = execute_command(Commands::Config { json: true }, &manager(&install));
        assert!(result.is_ok());
    }

    #[test]
    fn test_cli_error_user() {
        let error = error::CliError::user("test error");
        assert_eq!(format!("{}", error), "test error");
    }
}
