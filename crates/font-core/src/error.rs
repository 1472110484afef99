//! Error types for font-core

use std::path::PathBuf;

/// Result type for font-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in font-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An asset with this file name is already installed
    #[error("File '{file_name}' already exists")]
    Conflict { file_name: String },

    /// No rule matches the requested family and file
    #[error("No @font-face rule for '{family}' / {file_name}")]
    RuleNotFound { family: String, file_name: String },

    /// The stylesheet does not exist
    #[error("Stylesheet not found at {path}")]
    StylesheetNotFound { path: PathBuf },

    /// Caller-supplied value rejected before touching disk
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Configuration could not be resolved (fatal at startup)
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Explicitly requested configuration file does not exist
    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Filesystem error from font-fs
    #[error(transparent)]
    Fs(#[from] font_fs::Error),
}

impl Error {
    /// HTTP status a transport layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Conflict { .. } => 409,
            Self::RuleNotFound { .. } | Self::StylesheetNotFound { .. } => 404,
            Self::InvalidInput { .. } => 400,
            Self::Fs(font_fs::Error::InvalidFileName { .. }) => 400,
            _ => 500,
        }
    }
}

impl From<font_blocks::Error> for Error {
    fn from(err: font_blocks::Error) -> Self {
        match err {
            font_blocks::Error::RuleNotFound { family, file_name } => {
                Self::RuleNotFound { family, file_name }
            }
            font_blocks::Error::InvalidFamily { family, reason } => Self::InvalidInput {
                message: format!("font family '{}': {}", family, reason),
            },
        }
    }
}
