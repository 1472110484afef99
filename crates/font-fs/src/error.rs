//! Error types for font-fs

use std::path::PathBuf;

/// Result type for font-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in font-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File already exists: {path}")]
    AlreadyExists { path: PathBuf },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Invalid file name '{name}': {reason}")]
    InvalidFileName { name: String, reason: String },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_name(name: &str, reason: &str) -> Self {
        Self::InvalidFileName {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}
