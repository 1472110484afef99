//! `@font-face` block scanning and rewriting for Font Manager.
//!
//! The crate works purely on stylesheet text; it never touches the
//! filesystem.
//!
//! - [`parser`] finds `@font-face { ... }` blocks with a bounded scan
//!   (no nested braces) and notes the panel marker comment attached to each.
//! - [`rule`] reads a block into a [`FontRule`] and decides identity via the
//!   compound [`RuleKey`] (family + asset file name).
//! - [`writer`] appends, removes and renames rules while keeping every other
//!   part of the stylesheet verbatim.
//!
//! ```
//! use font_blocks::{NewRule, RuleKey, append_rule, parse_rules, remove_rules};
//!
//! let css = append_rule("body { color: red; }\n", &NewRule {
//!     family: "Foo",
//!     src_url: "/webfonts/myfonts/a.woff2",
//!     weight: "400",
//!     style: "normal",
//! });
//! assert_eq!(parse_rules(&css)[0].family, "Foo");
//!
//! let removal = remove_rules(&css, &RuleKey::new("Foo", "a.woff2"));
//! assert_eq!(removal.content, "body { color: red; }\n");
//! ```

pub mod error;
pub mod parser;
pub mod rule;
pub mod writer;

pub use error::{Error, Result};
pub use parser::{FontFaceBlock, PANEL_MARKER, extract_blocks, parse_blocks};
pub use rule::{FontRule, RuleKey, rename_family, validate_family};
pub use writer::{NewRule, Removal, append_rule, remove_rules, rename_rules, render_rule};

/// Reads every well-formed rule from a stylesheet, in source order.
///
/// Blocks without a quoted `font-family` or a quoted `src: url(...)` are
/// skipped.
pub fn parse_rules(content: &str) -> Vec<FontRule> {
    extract_blocks(content)
        .into_iter()
        .filter_map(|block| {
            let rule = FontRule::parse(block);
            if rule.is_none() {
                tracing::debug!(block, "Skipping @font-face block without family or src");
            }
            rule
        })
        .collect()
}
