//! Delete command implementation

use colored::Colorize;
use font_core::FontManager;

use crate::commands::preview::print_preview;
use crate::error::Result;

/// Remove the rule for `(family, file_name)` and its font file.
pub fn run_delete(manager: &FontManager, family: &str, file_name: &str, dry_run: bool) -> Result<()> {
    if dry_run {
        println!("{} Dry run: no changes will be written", "=>".blue().bold());
        let preview = manager.preview_delete(family, file_name)?;
        print_preview(&preview, "user.css");

        let asset = manager.config().font_dir().join(file_name);
        if asset.exists() {
            println!("{} Would delete {}", "=>".blue().bold(), asset);
        }
        return Ok(());
    }

    println!("{} Deleting font: {} ({})", "=>".blue().bold(), family.cyan(), file_name);
    let report = manager.delete(family, file_name)?;

    if report.rules_removed == 0 {
        println!("{} No rule for '{}' / {} in stylesheet.", "WARN".yellow().bold(), family, file_name);
    } else {
        println!("{} Removed {} rule(s).", "OK".green().bold(), report.rules_removed);
    }
    if report.asset_removed {
        println!("{} Deleted font file {}.", "OK".green().bold(), file_name);
    } else {
        println!("{} Font file {} not found.", "WARN".yellow().bold(), file_name);
    }
    Ok(())
}
