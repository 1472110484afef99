//! Format-agnostic configuration loading

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::de::DeserializeOwned;

use crate::{Error, NormalizedPath, Result, io};

/// String literals are matched first so `//` inside a URL survives.
static JSONC_COMMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"("(?:\\.|[^"\\])*")|//[^\n]*|/\*[\s\S]*?\*/"#)
        .expect("Invalid JSONC comment regex")
});

/// Format-agnostic configuration store.
///
/// Detects format from the file extension and handles deserialization
/// transparently.
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.jsonc` -> JSON with `//` and `/* */` comments
    /// - `.yaml`, `.yml` -> YAML
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let content = io::read_text(path)?;
        let extension = path.extension().unwrap_or("");

        match extension.to_lowercase().as_str() {
            "toml" => toml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_native(),
                format: "TOML".into(),
                message: e.to_string(),
            }),
            "json" => serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_native(),
                format: "JSON".into(),
                message: e.to_string(),
            }),
            "jsonc" => serde_json::from_str(&strip_jsonc_comments(&content)).map_err(|e| {
                Error::ConfigParse {
                    path: path.to_native(),
                    format: "JSONC".into(),
                    message: e.to_string(),
                }
            }),
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_native(),
                format: "YAML".into(),
                message: e.to_string(),
            }),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }
}

/// Remove `//` line comments and `/* */` block comments outside strings.
pub fn strip_jsonc_comments(content: &str) -> String {
    JSONC_COMMENT_REGEX
        .replace_all(content, |caps: &Captures| {
            caps.get(1)
                .map(|s| s.as_str().to_string())
                .unwrap_or_default()
        })
        .into_owned()
}
