//! Stylesheet rewriting for `@font-face` rules.
//!
//! Removal and renaming rebuild the whole stylesheet: every recognized block
//! (with its attached marker comment) and every stray marker comment is cut
//! out of the text, the remainder is kept verbatim, and the surviving blocks
//! are appended after it separated by blank lines. The result is trimmed and
//! ends with exactly one newline.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::parser::{FontFaceBlock, PANEL_MARKER, parse_blocks};
use crate::rule::{RuleKey, rename_family};

static STRAY_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{}[ \t]*\r?\n?", regex::escape(PANEL_MARKER)))
        .expect("Invalid marker regex")
});

/// Values for a new `@font-face` rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewRule<'a> {
    pub family: &'a str,
    pub src_url: &'a str,
    /// Emitted verbatim as a CSS token.
    pub weight: &'a str,
    /// Emitted verbatim as a CSS token.
    pub style: &'a str,
}

/// Outcome of a removal pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    /// The rewritten stylesheet. Equal to the input when nothing matched.
    pub content: String,
    /// Number of blocks removed.
    pub removed: usize,
}

/// Renders a marked `@font-face` rule, without a trailing newline.
///
/// # Example
/// ```
/// use font_blocks::writer::{NewRule, render_rule};
///
/// let rule = render_rule(&NewRule {
///     family: "Foo",
///     src_url: "/webfonts/myfonts/a.woff2",
///     weight: "400",
///     style: "normal",
/// });
/// assert!(rule.contains("font-family: 'Foo';"));
/// ```
pub fn render_rule(rule: &NewRule<'_>) -> String {
    format!(
        "{marker}\n@font-face {{\n  font-family: '{family}';\n  src: url('{src}');\n  font-weight: {weight};\n  font-style: {style};\n}}",
        marker = PANEL_MARKER,
        family = rule.family,
        src = rule.src_url,
        weight = rule.weight,
        style = rule.style,
    )
}

/// Appends a new rule to the end of the stylesheet.
///
/// Existing text is kept as is; one blank line separates it from the new
/// rule, and the result ends with a newline.
pub fn append_rule(content: &str, rule: &NewRule<'_>) -> String {
    let rendered = render_rule(rule);

    if content.trim().is_empty() {
        return format!("{}\n", rendered);
    }

    let mut result = String::with_capacity(content.len() + rendered.len() + 3);
    result.push_str(content);
    if !content.ends_with('\n') {
        result.push('\n');
    }
    result.push('\n');
    result.push_str(&rendered);
    result.push('\n');
    result
}

/// Removes every block matching `key`.
///
/// Not finding a match is not an error: the content comes back unchanged
/// with `removed == 0`.
pub fn remove_rules(content: &str, key: &RuleKey<'_>) -> Removal {
    let blocks = parse_blocks(content);
    let (removed, kept): (Vec<_>, Vec<_>) = blocks.iter().partition(|b| key.matches(&b.text));

    if removed.is_empty() {
        return Removal {
            content: content.to_string(),
            removed: 0,
        };
    }

    let kept_texts: Vec<String> = kept.into_iter().map(block_with_marker).collect();
    Removal {
        content: rebuild(content, &blocks, &kept_texts),
        removed: removed.len(),
    }
}

/// Renames the family of every block matching `key` to `new_family`.
///
/// Returns the rewritten stylesheet and the number of renamed blocks.
///
/// # Errors
/// Returns `Error::RuleNotFound` if no block matches.
pub fn rename_rules(content: &str, key: &RuleKey<'_>, new_family: &str) -> Result<(String, usize)> {
    let blocks = parse_blocks(content);
    let mut renamed = 0;

    let texts: Vec<String> = blocks
        .iter()
        .map(|block| {
            if key.matches(&block.text) {
                renamed += 1;
                let text = rename_family(&block.text, new_family);
                with_marker(block.has_marker(), &text)
            } else {
                block_with_marker(block)
            }
        })
        .collect();

    if renamed == 0 {
        return Err(Error::RuleNotFound {
            family: key.family.to_string(),
            file_name: key.file_name.to_string(),
        });
    }

    Ok((rebuild(content, &blocks, &texts), renamed))
}

fn block_with_marker(block: &FontFaceBlock) -> String {
    with_marker(block.has_marker(), &block.text)
}

fn with_marker(has_marker: bool, text: &str) -> String {
    if has_marker {
        format!("{}\n{}", PANEL_MARKER, text)
    } else {
        text.to_string()
    }
}

/// Everything outside the recognized blocks, stray markers dropped.
fn remainder(content: &str, blocks: &[FontFaceBlock]) -> String {
    let mut rest = String::with_capacity(content.len());
    let mut cursor = 0;

    for block in blocks {
        let span = block.full_span();
        rest.push_str(&content[cursor..span.start]);
        cursor = skip_trailing_blank(content, span.end);
    }
    rest.push_str(&content[cursor..]);

    STRAY_MARKER_REGEX.replace_all(&rest, "").into_owned()
}

/// Advances past the whitespace after a removed block up to the start of
/// the next line holding text, so the following rule keeps its indentation.
fn skip_trailing_blank(content: &str, from: usize) -> usize {
    let tail = &content[from..];
    let run = tail.len() - tail.trim_start().len();
    match tail[..run].rfind('\n') {
        Some(newline) => from + newline + 1,
        None => from + run,
    }
}

fn rebuild(content: &str, blocks: &[FontFaceBlock], texts: &[String]) -> String {
    let rest = remainder(content, blocks);
    let rest = rest.trim();
    let joined = texts.join("\n\n");

    let body = match (rest.is_empty(), joined.is_empty()) {
        (true, _) => joined,
        (false, true) => rest.to_string(),
        (false, false) => format!("{}\n\n{}", rest, joined),
    };

    tracing::debug!(blocks = texts.len(), "Rebuilt stylesheet");
    format!("{}\n", body.trim())
}
