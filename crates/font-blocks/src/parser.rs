//! `@font-face` block scanning.
//!
//! This is a bounded lexical scan, not a CSS parser. A block is the keyword
//! `@font-face` (any case), optional whitespace, and a brace-delimited body
//! that ends at the FIRST closing brace:
//!
//! ```text
//! @font-face {
//!   font-family: 'My Font';
//!   src: url('/webfonts/myfonts/my.woff2');
//! }
//! ```
//!
//! Nested braces are not supported. A `{` inside the body does not open a
//! new level, so a body such as `@font-face { a { b } c }` is cut short at
//! the first `}`. Everything outside recognized blocks is opaque text.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Comment written above every rule this tool appends.
///
/// Purely cosmetic provenance; never part of a rule's identity.
pub const PANEL_MARKER: &str = "/* --- Added by Font Manager Panel --- */";

static FONT_FACE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)@font-face\s*\{[^}]*\}").expect("Invalid font-face regex")
});

/// A recognized `@font-face` block and where it sits in the stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFaceBlock {
    /// The block text, from `@font-face` through the closing brace.
    pub text: String,
    /// Byte range of `text` within the stylesheet.
    pub span: Range<usize>,
    /// Byte offset of the panel marker comment directly above the block,
    /// if one is present with only whitespace in between.
    pub marker_start: Option<usize>,
    /// The 1-based line number where the block starts.
    pub start_line: usize,
}

impl FontFaceBlock {
    /// Byte range covering the attached marker (if any) and the block.
    pub fn full_span(&self) -> Range<usize> {
        self.marker_start.unwrap_or(self.span.start)..self.span.end
    }

    pub fn has_marker(&self) -> bool {
        self.marker_start.is_some()
    }
}

/// Parses all `@font-face` blocks from the given content, in file order.
///
/// # Example
/// ```
/// use font_blocks::parser::parse_blocks;
///
/// let css = "body { margin: 0; }\n@font-face { font-family: 'A'; }\n";
/// let blocks = parse_blocks(css);
/// assert_eq!(blocks.len(), 1);
/// assert_eq!(blocks[0].start_line, 2);
/// ```
pub fn parse_blocks(content: &str) -> Vec<FontFaceBlock> {
    let mut line = 1;
    let mut cursor = 0;

    FONT_FACE_REGEX
        .find_iter(content)
        .map(|m| {
            // Count only the text since the previous block
            line += content[cursor..m.start()].matches('\n').count();
            cursor = m.start();
            FontFaceBlock {
                text: m.as_str().to_string(),
                span: m.range(),
                marker_start: attached_marker(content, m.start()),
                start_line: line,
            }
        })
        .collect()
}

/// Returns the text of every `@font-face` block, in file order.
///
/// # Example
/// ```
/// use font_blocks::parser::extract_blocks;
///
/// let css = "@FONT-FACE{font-family:'A'}\n.x { color: red; }\n@font-face {\n}";
/// assert_eq!(extract_blocks(css), vec!["@FONT-FACE{font-family:'A'}", "@font-face {\n}"]);
/// assert!(extract_blocks("").is_empty());
/// ```
pub fn extract_blocks(content: &str) -> Vec<&str> {
    FONT_FACE_REGEX
        .find_iter(content)
        .map(|m| m.as_str())
        .collect()
}

fn attached_marker(content: &str, block_start: usize) -> Option<usize> {
    let before = content[..block_start].trim_end();
    before
        .ends_with(PANEL_MARKER)
        .then(|| before.len() - PANEL_MARKER.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blocks_empty() {
        assert!(parse_blocks("").is_empty());
        assert!(parse_blocks("body { color: red; }").is_empty());
    }

    #[test]
    fn test_parse_single_block() {
        let content = "@font-face {\n  font-family: 'A';\n}";
        let blocks = parse_blocks(content);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text, content);
        assert_eq!(blocks[0].span, 0..content.len());
        assert_eq!(blocks[0].marker_start, None);
    }

    #[test]
    fn test_keyword_is_case_insensitive() {
        assert_eq!(extract_blocks("@Font-Face { }").len(), 1);
    }

    #[test]
    fn test_nested_brace_truncates_block() {
        let content = "@font-face { a { b } c }";
        assert_eq!(extract_blocks(content), vec!["@font-face { a { b }"]);
    }

    #[test]
    fn test_marker_attached_across_whitespace() {
        let content = format!("body {{}}\n{}\n\n@font-face {{ }}", PANEL_MARKER);
        let blocks = parse_blocks(&content);
        assert_eq!(blocks[0].marker_start, Some(content.find(PANEL_MARKER).unwrap()));
        assert_eq!(&content[blocks[0].full_span()], format!("{}\n\n@font-face {{ }}", PANEL_MARKER));
    }

    #[test]
    fn test_marker_separated_by_rule_is_not_attached() {
        let content = format!("{}\nbody {{}}\n@font-face {{ }}", PANEL_MARKER);
        let blocks = parse_blocks(&content);
        assert!(!blocks[0].has_marker());
    }
}
