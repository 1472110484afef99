//! Filesystem layer for Font Manager
//!
//! Provides path handling, the install-tree layout, config file loading and
//! safe I/O operations (atomic replace, create-new writes, advisory locks).

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use constants::{FONT_URL_BASE, InstallPath};
pub use error::{Error, Result};
pub use io::{FileLock, RobustnessConfig};
pub use path::{NormalizedPath, validate_file_name};
