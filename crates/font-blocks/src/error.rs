//! Error types for font-blocks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No @font-face rule for '{family}' / {file_name}")]
    RuleNotFound { family: String, file_name: String },

    #[error("Invalid font family '{family}': {reason}")]
    InvalidFamily { family: String, reason: String },
}
