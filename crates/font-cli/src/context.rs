//! Startup context: configuration resolved from the global flags

use std::path::Path;

use font_core::{Config, ConfigResolver};

use crate::cli::Cli;
use crate::error::Result;

/// Resolve the configuration for this invocation.
///
/// The working directory is searched for a local config file unless
/// `--config` names one. `--install-path` overrides every other source.
pub fn resolve_config(cli: &Cli, cwd: &Path) -> Result<Config> {
    let mut resolver = ConfigResolver::new(cwd);
    if let Some(ref path) = cli.config {
        resolver = resolver.with_config_file(path);
    }
    if let Some(ref install_path) = cli.install_path {
        resolver = resolver.with_install_path(install_path);
    }
    Ok(resolver.resolve()?)
}
