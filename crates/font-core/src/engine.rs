//! The font rule engine
//!
//! `FontManager` exposes the four operations on an install: list, add,
//! delete and edit. The stylesheet is the only source of truth; every
//! operation reads it fresh, derives the new full content and replaces the
//! file atomically.
//!
//! Mutating operations are serialized twice: an in-process mutex orders
//! callers sharing one `FontManager`, and an advisory lock on
//! `user.css.lock` orders separate processes.

use std::sync::{Mutex, MutexGuard, PoisonError};

use font_blocks::{FontRule, NewRule, RuleKey};
use font_fs::{FileLock, NormalizedPath, RobustnessConfig, io, validate_file_name};

use crate::config::Config;
use crate::{Error, Result};

/// A font file to install together with its rule values.
#[derive(Debug, Clone, Copy)]
pub struct FontUpload<'a> {
    /// Raw font file contents.
    pub bytes: &'a [u8],
    /// Name of the asset inside the font directory.
    pub file_name: &'a str,
    pub family: &'a str,
    /// Emitted verbatim, e.g. `400`.
    pub weight: &'a str,
    /// Emitted verbatim, e.g. `normal`.
    pub style: &'a str,
}

/// What a delete actually removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteReport {
    /// Number of `@font-face` blocks removed from the stylesheet.
    pub rules_removed: usize,
    /// Whether the asset file existed and was removed.
    pub asset_removed: bool,
}

/// Stylesheet content before and after a change that was not written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub before: String,
    pub after: String,
}

impl Preview {
    pub fn is_unchanged(&self) -> bool {
        self.before == self.after
    }
}

/// Manages the `@font-face` rules and font assets of one install.
#[derive(Debug)]
pub struct FontManager {
    config: Config,
    robustness: RobustnessConfig,
    serial: Mutex<()>,
}

impl FontManager {
    pub fn new(config: Config) -> Self {
        Self::with_robustness(config, RobustnessConfig::default())
    }

    /// Create a manager with custom lock timeout and fsync behaviour.
    pub fn with_robustness(config: Config, robustness: RobustnessConfig) -> Self {
        Self {
            config,
            robustness,
            serial: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// List every well-formed rule in the stylesheet, in source order.
    ///
    /// A missing stylesheet yields an empty list. Blocks lacking a quoted
    /// family or `src` URL are skipped.
    pub fn list(&self) -> Result<Vec<FontRule>> {
        let stylesheet = self.config.stylesheet_path();
        let Some(content) = io::read_text_optional(&stylesheet)? else {
            tracing::debug!(%stylesheet, "Stylesheet missing, no rules");
            return Ok(Vec::new());
        };
        Ok(font_blocks::parse_rules(&content))
    }

    /// Install a font file and append its `@font-face` rule.
    ///
    /// The stylesheet is created if it does not exist yet.
    ///
    /// # Errors
    ///
    /// - `Error::Conflict` if the asset file name is taken; nothing is written
    /// - `Error::InvalidInput` / `Error::Fs` for a bad family or file name
    /// - `Error::Fs` on I/O failure; a written asset is removed again if the
    ///   stylesheet update fails
    pub fn add(&self, upload: &FontUpload<'_>) -> Result<FontRule> {
        validate_file_name(upload.file_name)?;
        font_blocks::validate_family(upload.family)?;

        let _serial = self.serialize();
        let stylesheet = self.config.stylesheet_path();
        let _lock = FileLock::acquire(&stylesheet, self.robustness)?;

        let asset = self.asset_path(upload.file_name);
        io::write_new(&asset, upload.bytes).map_err(|e| match e {
            font_fs::Error::AlreadyExists { .. } => Error::Conflict {
                file_name: upload.file_name.to_string(),
            },
            other => Error::Fs(other),
        })?;
        tracing::info!(file = %asset, bytes = upload.bytes.len(), "Saved font file");

        let src_url = self.config.font_url(upload.file_name);
        let rule = NewRule {
            family: upload.family,
            src_url: &src_url,
            weight: upload.weight,
            style: upload.style,
        };

        if let Err(e) = self.append_to_stylesheet(&stylesheet, &rule) {
            tracing::error!(error = %e, "Failed to update stylesheet, removing font file");
            if let Err(cleanup) = io::remove_if_exists(&asset) {
                tracing::warn!(file = %asset, error = %cleanup, "Could not remove font file");
            }
            return Err(e);
        }

        tracing::info!(family = upload.family, file = upload.file_name, "Added font rule");
        Ok(FontRule {
            family: upload.family.to_string(),
            file_name: upload.file_name.to_string(),
            weight: Some(upload.weight.to_string()),
            style: Some(upload.style.to_string()),
        })
    }

    /// Remove every rule for `(family, file_name)` and the asset file.
    ///
    /// Either half finding nothing is a logged no-op, so repeating a delete
    /// succeeds. The stylesheet is rewritten before the asset is removed; if
    /// the removal fails the stylesheet change stays in place. Without a
    /// stylesheet no lock file or directory is created.
    pub fn delete(&self, family: &str, file_name: &str) -> Result<DeleteReport> {
        validate_file_name(file_name)?;

        let _serial = self.serialize();
        let stylesheet = self.config.stylesheet_path();
        let mut report = DeleteReport::default();

        let lock = self.lock_existing(&stylesheet)?;
        let content = if lock.is_some() {
            io::read_text_optional(&stylesheet)?
        } else {
            None
        };
        match content {
            Some(content) => {
                let removal = font_blocks::remove_rules(&content, &RuleKey::new(family, file_name));
                if removal.removed > 0 {
                    io::replace_file(&stylesheet, removal.content.as_bytes(), self.robustness)?;
                    tracing::info!(family, file = file_name, rules = removal.removed, "Removed font rules");
                } else {
                    tracing::warn!(family, file = file_name, "No matching font rule in stylesheet");
                }
                report.rules_removed = removal.removed;
            }
            None => tracing::warn!(%stylesheet, "Stylesheet missing, no rules to remove"),
        }

        let asset = self.asset_path(file_name);
        report.asset_removed = io::remove_if_exists(&asset)?;
        if report.asset_removed {
            tracing::info!(file = %asset, "Deleted font file");
        } else {
            tracing::warn!(file = %asset, "Font file to delete not found");
        }

        drop(lock);
        Ok(report)
    }

    /// Rename the family of every rule for `(old_family, file_name)`.
    ///
    /// Returns the number of renamed rules. The asset file is untouched.
    ///
    /// # Errors
    ///
    /// - `Error::StylesheetNotFound` if there is no stylesheet
    /// - `Error::RuleNotFound` if no rule matches; nothing is written
    pub fn edit(&self, old_family: &str, new_family: &str, file_name: &str) -> Result<usize> {
        font_blocks::validate_family(new_family)?;

        let _serial = self.serialize();
        let stylesheet = self.config.stylesheet_path();
        let Some(_lock) = self.lock_existing(&stylesheet)? else {
            return Err(Error::StylesheetNotFound {
                path: stylesheet.to_native(),
            });
        };

        let content = self.read_stylesheet(&stylesheet)?;
        let (updated, renamed) = font_blocks::rename_rules(
            &content,
            &RuleKey::new(old_family, file_name),
            new_family,
        )?;

        io::replace_file(&stylesheet, updated.as_bytes(), self.robustness)?;
        tracing::info!(old_family, new_family, file = file_name, rules = renamed, "Renamed font family");
        Ok(renamed)
    }

    /// The stylesheet a delete would produce, without writing anything.
    pub fn preview_delete(&self, family: &str, file_name: &str) -> Result<Preview> {
        validate_file_name(file_name)?;
        let stylesheet = self.config.stylesheet_path();
        let before = io::read_text_optional(&stylesheet)?.unwrap_or_default();
        let after = font_blocks::remove_rules(&before, &RuleKey::new(family, file_name)).content;
        Ok(Preview { before, after })
    }

    /// The stylesheet an edit would produce, without writing anything.
    ///
    /// Fails the same way [`FontManager::edit`] would.
    pub fn preview_edit(&self, old_family: &str, new_family: &str, file_name: &str) -> Result<Preview> {
        font_blocks::validate_family(new_family)?;
        let before = self.read_stylesheet(&self.config.stylesheet_path())?;
        let (after, _) = font_blocks::rename_rules(
            &before,
            &RuleKey::new(old_family, file_name),
            new_family,
        )?;
        Ok(Preview { before, after })
    }

    fn serialize(&self) -> MutexGuard<'_, ()> {
        // The guarded value is (), so a poisoned lock carries no bad state
        self.serial.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Lock the stylesheet only if it exists, so a read-only miss leaves
    /// the install tree untouched.
    fn lock_existing(&self, stylesheet: &NormalizedPath) -> Result<Option<FileLock>> {
        if !stylesheet.is_file() {
            return Ok(None);
        }
        Ok(Some(FileLock::acquire(stylesheet, self.robustness)?))
    }

    fn asset_path(&self, file_name: &str) -> NormalizedPath {
        self.config.font_dir().join(file_name)
    }

    fn read_stylesheet(&self, stylesheet: &NormalizedPath) -> Result<String> {
        io::read_text_optional(stylesheet)?.ok_or_else(|| Error::StylesheetNotFound {
            path: stylesheet.to_native(),
        })
    }

    fn append_to_stylesheet(&self, stylesheet: &NormalizedPath, rule: &NewRule<'_>) -> Result<()> {
        let content = io::read_text_optional(stylesheet)?.unwrap_or_default();
        let updated = font_blocks::append_rule(&content, rule);
        io::replace_file(stylesheet, updated.as_bytes(), self.robustness)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manager(dir: &TempDir) -> FontManager {
        FontManager::new(Config::new(dir.path()))
    }

    fn upload<'a>(file_name: &'a str, family: &'a str) -> FontUpload<'a> {
        FontUpload {
            bytes: b"font-bytes",
            file_name,
            family,
            weight: "400",
            style: "normal",
        }
    }

    #[test]
    fn list_without_stylesheet_is_empty() {
        let temp = TempDir::new().unwrap();
        assert!(manager(&temp).list().unwrap().is_empty());
    }

    #[test]
    fn add_creates_missing_stylesheet() {
        let temp = TempDir::new().unwrap();
        let fm = manager(&temp);

        fm.add(&upload("a.woff2", "Foo")).unwrap();

        assert!(fm.config().stylesheet_path().is_file());
        assert!(fm.config().font_dir().join("a.woff2").is_file());
    }

    #[test]
    fn add_rejects_traversal_file_name() {
        let temp = TempDir::new().unwrap();
        let err = manager(&temp).add(&upload("../a.woff2", "Foo")).unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn add_rejects_quoted_family() {
        let temp = TempDir::new().unwrap();
        let err = manager(&temp).add(&upload("a.woff2", "Fo'o")).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
        assert!(!temp.path().join("public").exists());
    }

    #[test]
    fn edit_without_stylesheet_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = manager(&temp).edit("A", "B", "a.woff2").unwrap_err();
        assert!(matches!(err, Error::StylesheetNotFound { .. }));
        assert_eq!(err.status_code(), 404);
        assert!(!temp.path().join("public").exists());
    }

    #[test]
    fn preview_delete_does_not_write() {
        let temp = TempDir::new().unwrap();
        let fm = manager(&temp);
        fm.add(&upload("a.woff2", "Foo")).unwrap();

        let preview = fm.preview_delete("Foo", "a.woff2").unwrap();

        assert!(!preview.is_unchanged());
        assert_eq!(fm.list().unwrap().len(), 1);
        assert!(fm.config().font_dir().join("a.woff2").is_file());
    }
}
