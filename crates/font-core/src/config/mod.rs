//! Configuration for a Font Manager install
//!
//! A [`Config`] is resolved once at startup by [`ConfigResolver`] and then
//! handed to the engine by value; nothing reads configuration from global
//! state afterwards.
//!
//! # Sources
//!
//! Later sources override earlier ones:
//!
//! 1. **Global defaults** - `<config_dir>/font-manager/config.toml`
//! 2. **Local config** - an explicit file, or the first of `config.toml`,
//!    `config.jsonc`, `config.json`, `config.yaml` in the working directory
//! 3. **Environment** - `FONT_MANAGER_INSTALL_PATH`, `FONT_MANAGER_PORT`,
//!    `FONT_MANAGER_API_KEY`
//! 4. **Explicit install path** - e.g. a command-line flag

mod resolver;

pub use resolver::{ConfigLayer, ConfigResolver, ENV_API_KEY, ENV_INSTALL_PATH, ENV_PORT};

use font_fs::{FONT_URL_BASE, InstallPath, NormalizedPath};

/// Port used when no source sets one.
pub const DEFAULT_PORT: u16 = 8001;

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root of the web application install.
    pub install_path: NormalizedPath,
    /// Port the transport layer listens on.
    pub port: u16,
    /// Shared secret for the transport layer. `None` disables the check.
    pub api_key: Option<String>,
}

impl Config {
    /// Config for `install_path` with default port and no API key.
    pub fn new(install_path: impl Into<NormalizedPath>) -> Self {
        Self {
            install_path: install_path.into(),
            port: DEFAULT_PORT,
            api_key: None,
        }
    }

    /// `<install>/public/css/user.css`
    pub fn stylesheet_path(&self) -> NormalizedPath {
        self.install_path.join(InstallPath::Stylesheet.as_str())
    }

    /// `<install>/public/webfonts/myfonts`
    pub fn font_dir(&self) -> NormalizedPath {
        self.install_path.join(InstallPath::FontDir.as_str())
    }

    /// URL the stylesheet uses to reference an uploaded asset.
    pub fn font_url(&self, file_name: &str) -> String {
        format!("{}/{}", FONT_URL_BASE, file_name)
    }
}
