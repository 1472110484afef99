//! Unified diff rendering for dry runs

use colored::Colorize;
use font_core::Preview;
use similar::TextDiff;

/// Render a unified diff of the stylesheet change.
pub fn unified_diff(preview: &Preview, name: &str) -> String {
    TextDiff::from_lines(&preview.before, &preview.after)
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{}", name), &format!("b/{}", name))
        .to_string()
}

/// Print the diff with added and removed lines colored.
pub fn print_preview(preview: &Preview, name: &str) {
    if preview.is_unchanged() {
        println!("{} Stylesheet would not change.", "=>".blue().bold());
        return;
    }

    for line in unified_diff(preview, name).lines() {
        if line.starts_with("+++") || line.starts_with("---") {
            println!("{}", line.bold());
        } else if line.starts_with('+') {
            println!("{}", line.green());
        } else if line.starts_with('-') {
            println!("{}", line.red());
        } else if line.starts_with("@@") {
            println!("{}", line.cyan());
        } else {
            println!("{}", line);
        }
    }
}
