//! Add command implementation

use std::fs;
use std::path::Path;

use colored::Colorize;
use font_core::{FontManager, FontUpload};

use crate::error::{CliError, Result};

/// Rule values for `fontctl add`.
#[derive(Debug, Clone, Copy)]
pub struct AddOptions<'a> {
    pub family: &'a str,
    pub weight: &'a str,
    pub style: &'a str,
    /// Stored file name; defaults to the name of the uploaded file.
    pub name: Option<&'a str>,
}

/// Upload `font_file` into the install and register its rule.
pub fn run_add(manager: &FontManager, font_file: &Path, options: &AddOptions<'_>) -> Result<()> {
    let file_name = match options.name {
        Some(name) => name,
        None => font_file
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                CliError::user(format!(
                    "Cannot derive a file name from '{}'. Use --name.",
                    font_file.display()
                ))
            })?,
    };

    let bytes = fs::read(font_file).map_err(|e| {
        CliError::user(format!("Cannot read font file '{}': {}", font_file.display(), e))
    })?;

    println!("{} Adding font: {}", "=>".blue().bold(), options.family.cyan());

    let rule = manager.add(&FontUpload {
        bytes: &bytes,
        file_name,
        family: options.family,
        weight: options.weight,
        style: options.style,
    })?;

    println!(
        "{} Font '{}' added as {}.",
        "OK".green().bold(),
        rule.family,
        manager.config().font_url(&rule.file_name)
    );
    Ok(())
}
