//! Core engine for Font Manager
//!
//! This crate ties the text-level rule handling of `font-blocks` to the
//! filesystem primitives of `font-fs`:
//!
//! - **Configuration resolution**: layered global, local and environment
//!   sources merged into one [`Config`]
//! - **FontManager**: list, add, delete and edit `@font-face` rules together
//!   with the font files they reference
//!
//! # Architecture
//!
//! ```text
//!              CLI / transport
//!                     |
//!                 font-core
//!                     |
//!            +--------+--------+
//!            |                 |
//!         font-fs         font-blocks
//! ```
//!
//! # Example
//!
//! ```no_run
//! use font_core::{Config, FontManager, FontUpload};
//!
//! fn example() -> font_core::Result<()> {
//!     let manager = FontManager::new(Config::new("/srv/app"));
//!     manager.add(&FontUpload {
//!         bytes: b"...",
//!         file_name: "brand.woff2",
//!         family: "Brand Sans",
//!         weight: "400",
//!         style: "normal",
//!     })?;
//!     for rule in manager.list()? {
//!         println!("{} -> {}", rule.family, rule.file_name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod engine;
pub mod error;

pub use config::{Config, ConfigLayer, ConfigResolver, DEFAULT_PORT};
pub use engine::{DeleteReport, FontManager, FontUpload, Preview};
pub use error::{Error, Result};
pub use font_blocks::FontRule;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn error_config_not_found_displays_path() {
        let path = PathBuf::from("/path/to/config.toml");
        let error = Error::ConfigNotFound { path };

        let display = format!("{}", error);
        assert!(
            display.contains("/path/to/config.toml"),
            "Error display should contain the path, got: {}",
            display
        );
    }
}
