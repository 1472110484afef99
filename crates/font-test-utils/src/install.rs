//! [`TestInstall`] builder for Font Manager test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use font_fs::InstallPath;

/// Stylesheet location relative to the install root.
pub const STYLESHEET: &str = InstallPath::Stylesheet.as_str();

/// Font asset directory relative to the install root.
pub const FONT_DIR: &str = InstallPath::FontDir.as_str();

/// A temporary web app install with helpers for test setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use font_test_utils::TestInstall;
///
/// let install = TestInstall::new()
///     .with_stylesheet("body { margin: 0; }\n")
///     .with_font("a.woff2", b"font");
/// install.assert_font_exists("a.woff2");
/// ```
pub struct TestInstall {
    temp_dir: TempDir,
}

impl Default for TestInstall {
    fn default() -> Self {
        Self::new()
    }
}

impl TestInstall {
    /// Create an empty install directory with no `public/` tree.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the install root.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of the stylesheet.
    pub fn stylesheet_path(&self) -> PathBuf {
        self.root().join(STYLESHEET)
    }

    /// Absolute path of an asset in the font directory.
    pub fn font_path(&self, file_name: &str) -> PathBuf {
        self.root().join(FONT_DIR).join(file_name)
    }

    /// Write the stylesheet, creating `public/css` as needed.
    pub fn with_stylesheet(self, content: &str) -> Self {
        self.write_stylesheet(content);
        self
    }

    /// Place an asset file in the font directory.
    pub fn with_font(self, file_name: &str, bytes: &[u8]) -> Self {
        let path = self.font_path(file_name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, bytes).unwrap();
        self
    }

    /// Overwrite the stylesheet in place.
    pub fn write_stylesheet(&self, content: &str) {
        let path = self.stylesheet_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// Current stylesheet content.
    ///
    /// # Panics
    /// Panics if the stylesheet does not exist.
    pub fn stylesheet(&self) -> String {
        let path = self.stylesheet_path();
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read stylesheet: {}", path.display()))
    }

    /// Assert that the asset `file_name` exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if it does not.
    pub fn assert_font_exists(&self, file_name: &str) {
        let path = self.font_path(file_name);
        assert!(path.is_file(), "Expected font file to exist: {}", path.display());
    }

    /// Assert that the asset `file_name` does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if it exists.
    pub fn assert_font_not_exists(&self, file_name: &str) {
        let path = self.font_path(file_name);
        assert!(!path.exists(), "Expected font file NOT to exist: {}", path.display());
    }

    /// Assert that the stylesheet contains `needle`.
    ///
    /// # Panics
    /// Panics if the stylesheet cannot be read or lacks `needle`.
    pub fn assert_stylesheet_contains(&self, needle: &str) {
        let content = self.stylesheet();
        assert!(
            content.contains(needle),
            "Stylesheet does not contain expected content.\nExpected: {}\nActual: {}",
            needle,
            content
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_matches_install_paths() {
        let install = TestInstall::new();
        assert!(install.stylesheet_path().ends_with("public/css/user.css"));
        assert!(install.font_path("a.woff2").ends_with("public/webfonts/myfonts/a.woff2"));
    }
}
