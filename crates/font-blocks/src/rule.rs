//! Font rules as read from `@font-face` block text.

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::error::{Error, Result};

static FAMILY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)font-family\s*:\s*['"]([^'"]+)['"]"#).expect("Invalid font-family regex")
});

static FAMILY_REPLACE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(font-family\s*:\s*)(['"])[^'"]+(['"])"#)
        .expect("Invalid font-family replace regex")
});

static SRC_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)src\s*:\s*url\(\s*['"]([^'"]+)['"]\s*\)"#).expect("Invalid src regex")
});

static WEIGHT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)font-weight\s*:\s*([^;}]+)").expect("Invalid font-weight regex")
});

static STYLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)font-style\s*:\s*([^;}]+)").expect("Invalid font-style regex")
});

/// A font registration reconstructed from one `@font-face` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontRule {
    /// The quoted `font-family` value, without quotes.
    #[serde(rename = "fontFamily")]
    pub family: String,
    /// Last path segment of the `src: url(...)` value.
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub style: Option<String>,
}

impl FontRule {
    /// Reads a rule from block text.
    ///
    /// Returns `None` unless the block has both a quoted `font-family` and a
    /// quoted `src: url(...)`.
    pub fn parse(block: &str) -> Option<Self> {
        let family = family_of(block)?;
        let url = src_url_of(block)?;
        Some(Self {
            family: family.to_string(),
            file_name: url_basename(url).to_string(),
            weight: token_of(&WEIGHT_REGEX, block),
            style: token_of(&STYLE_REGEX, block),
        })
    }
}

/// The compound identity of a rule: family plus asset file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleKey<'a> {
    pub family: &'a str,
    pub file_name: &'a str,
}

impl<'a> RuleKey<'a> {
    pub fn new(family: &'a str, file_name: &'a str) -> Self {
        Self { family, file_name }
    }

    /// Whether `block` is the rule this key names.
    ///
    /// The family must equal the block's quoted `font-family` value (either
    /// quote style) and the block's `src` URL must end in `/<file_name>`.
    pub fn matches(&self, block: &str) -> bool {
        let Some(family) = family_of(block) else {
            return false;
        };
        let Some(url) = src_url_of(block) else {
            return false;
        };
        family == self.family && url_basename(url) == self.file_name
    }
}

/// Replaces the first `font-family` value in `block`, keeping its quotes.
pub fn rename_family(block: &str, new_family: &str) -> String {
    FAMILY_REPLACE_REGEX
        .replacen(block, 1, |caps: &Captures| {
            format!("{}{}{}{}", &caps[1], &caps[2], new_family, &caps[3])
        })
        .into_owned()
}

/// Checks that `family` can sit inside a quoted CSS string.
pub fn validate_family(family: &str) -> Result<()> {
    let reason = if family.trim().is_empty() {
        Some("family cannot be empty")
    } else if family.contains(['\'', '"']) {
        Some("family cannot contain quotes")
    } else if family.contains(['{', '}', ';']) {
        Some("family cannot contain braces or ';'")
    } else if family.chars().any(char::is_control) {
        Some("family cannot contain control characters")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(Error::InvalidFamily {
            family: family.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

fn family_of(block: &str) -> Option<&str> {
    FAMILY_REGEX
        .captures(block)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn src_url_of(block: &str) -> Option<&str> {
    SRC_REGEX
        .captures(block)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn token_of(regex: &Regex, block: &str) -> Option<String> {
    regex
        .captures(block)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|token| !token.is_empty())
}

fn url_basename(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
