//! Layered configuration resolution
//!
//! The `ConfigResolver` loads configuration from files and the environment,
//! with later sources overriding earlier ones, and validates the result.

use std::collections::HashMap;
use std::path::PathBuf;

use font_fs::{ConfigStore, NormalizedPath};
use serde::Deserialize;

use super::{Config, DEFAULT_PORT};
use crate::{Error, Result};

/// File names probed in the working directory, in priority order.
const LOCAL_CONFIG_NAMES: &[&str] = &["config.toml", "config.jsonc", "config.json", "config.yaml"];

pub const ENV_INSTALL_PATH: &str = "FONT_MANAGER_INSTALL_PATH";
pub const ENV_PORT: &str = "FONT_MANAGER_PORT";
pub const ENV_API_KEY: &str = "FONT_MANAGER_API_KEY";

/// One configuration source. Every field is optional so layers can be
/// merged before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigLayer {
    #[serde(default)]
    pub install_path: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub api_key: Option<String>,
}

impl ConfigLayer {
    /// Overlay `other` on top of `self`; set fields in `other` win.
    pub fn merge(&mut self, other: ConfigLayer) {
        if other.install_path.is_some() {
            self.install_path = other.install_path;
        }
        if other.port.is_some() {
            self.port = other.port;
        }
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
    }

    /// Validate the merged layers into a [`Config`].
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` when no install path was set.
    pub fn into_config(self) -> Result<Config> {
        let install_path = self
            .install_path
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| Error::Configuration {
                message: format!(
                    "install_path must be set in a config file or via {}",
                    ENV_INSTALL_PATH
                ),
            })?;

        Ok(Config {
            install_path: NormalizedPath::new(install_path),
            port: self.port.unwrap_or(DEFAULT_PORT),
            api_key: self.api_key.filter(|k| !k.is_empty()),
        })
    }
}

/// Resolves configuration by merging multiple sources
pub struct ConfigResolver {
    /// Directory probed for a local config file
    search_dir: PathBuf,

    /// Local config file named by the caller; must exist when set
    config_file: Option<PathBuf>,

    /// Install path from the caller, overriding every other source
    install_path: Option<String>,

    /// Override for the global config directory (used for testing).
    global_config_dir_override: Option<PathBuf>,

    /// Replacement for the process environment (used for testing).
    env_override: Option<HashMap<String, String>>,
}

impl ConfigResolver {
    /// Create a resolver that looks for a local config file in `search_dir`.
    pub fn new(search_dir: impl Into<PathBuf>) -> Self {
        Self {
            search_dir: search_dir.into(),
            config_file: None,
            install_path: None,
            global_config_dir_override: None,
            env_override: None,
        }
    }

    /// Use `path` as the local config file instead of probing.
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Set an install path that overrides every other source.
    pub fn with_install_path(mut self, path: impl Into<String>) -> Self {
        self.install_path = Some(path.into());
        self
    }

    /// Use a custom global config directory.
    pub fn with_global_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.global_config_dir_override = Some(dir.into());
        self
    }

    /// Read environment values from `vars` instead of the process.
    pub fn with_env(mut self, vars: HashMap<String, String>) -> Self {
        self.env_override = Some(vars);
        self
    }

    fn global_config_dir(&self) -> Option<PathBuf> {
        if let Some(ref override_dir) = self.global_config_dir_override {
            return Some(override_dir.clone());
        }
        dirs::config_dir().map(|d| d.join("font-manager"))
    }

    fn env_var(&self, key: &str) -> Option<String> {
        let value = match &self.env_override {
            Some(vars) => vars.get(key).cloned(),
            None => std::env::var(key).ok(),
        };
        value.filter(|v| !v.is_empty())
    }

    /// The local config file that will be read, if any.
    pub fn local_config_path(&self) -> Option<PathBuf> {
        if let Some(ref explicit) = self.config_file {
            return Some(explicit.clone());
        }
        LOCAL_CONFIG_NAMES
            .iter()
            .map(|name| self.search_dir.join(name))
            .find(|path| path.is_file())
    }

    /// Resolve the configuration by merging all sources
    ///
    /// # Errors
    ///
    /// - `Error::ConfigNotFound` if an explicit config file is missing
    /// - `Error::Fs` if a config file cannot be parsed
    /// - `Error::Configuration` if the merged result lacks an install path
    ///   or the port variable is not a number
    pub fn resolve(&self) -> Result<Config> {
        let store = ConfigStore::new();
        let mut merged = ConfigLayer::default();

        // Layer 1 - Global defaults
        if let Some(global_dir) = self.global_config_dir() {
            let global_config_path = global_dir.join("config.toml");
            if global_config_path.is_file() {
                tracing::debug!(?global_config_path, "Loading global config (layer 1)");
                merged.merge(store.load(&NormalizedPath::new(&global_config_path))?);
            }
        }

        // Layer 2 - Local config file
        if let Some(local_path) = self.local_config_path() {
            if !local_path.is_file() {
                return Err(Error::ConfigNotFound { path: local_path });
            }
            tracing::debug!(?local_path, "Loading local config (layer 2)");
            merged.merge(store.load(&NormalizedPath::new(&local_path))?);
        }

        // Layer 3 - Environment
        merged.merge(self.env_layer()?);

        // Layer 4 - Explicit install path
        if let Some(ref install_path) = self.install_path {
            merged.install_path = Some(install_path.clone());
        }

        let config = merged.into_config()?;
        tracing::debug!(install_path = %config.install_path, port = config.port, "Resolved config");
        Ok(config)
    }

    fn env_layer(&self) -> Result<ConfigLayer> {
        let port = match self.env_var(ENV_PORT) {
            Some(raw) => Some(raw.trim().parse::<u16>().map_err(|_| Error::Configuration {
                message: format!("{} must be a port number, got '{}'", ENV_PORT, raw),
            })?),
            None => None,
        };

        Ok(ConfigLayer {
            install_path: self.env_var(ENV_INSTALL_PATH),
            port,
            api_key: self.env_var(ENV_API_KEY),
        })
    }
}
