//! Edit command implementation

use colored::Colorize;
use font_core::FontManager;

use crate::commands::preview::print_preview;
use crate::error::Result;

/// Rename the family of the rule for `(from, file_name)` to `to`.
pub fn run_edit(manager: &FontManager, from: &str, to: &str, file_name: &str, dry_run: bool) -> Result<()> {
    if dry_run {
        println!("{} Dry run: no changes will be written", "=>".blue().bold());
        let preview = manager.preview_edit(from, to, file_name)?;
        print_preview(&preview, "user.css");
        return Ok(());
    }

    println!("{} Renaming font: {} -> {}", "=>".blue().bold(), from.cyan(), to.cyan());
    let renamed = manager.edit(from, to, file_name)?;
    println!("{} Updated {} rule(s).", "OK".green().bold(), renamed);
    Ok(())
}
