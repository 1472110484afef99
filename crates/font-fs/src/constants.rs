//! Layout of the managed install tree.

/// URL prefix under which the web application serves uploaded fonts.
pub const FONT_URL_BASE: &str = "/webfonts/myfonts";

/// Well-known locations relative to the configured install path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallPath {
    /// The user stylesheet holding the `@font-face` rules
    Stylesheet,
    /// The directory holding uploaded font assets
    FontDir,
}

impl InstallPath {
    /// Get the string representation of the path.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stylesheet => "public/css/user.css",
            Self::FontDir => "public/webfonts/myfonts",
        }
    }
}
