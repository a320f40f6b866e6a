//! plist::format
//!
//! Serialization format selection.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// On-disk representation of a parameter list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// `<ParameterList>` XML (default).
    #[default]
    Xml,
    /// TOML document.
    Toml,
}

impl Format {
    /// Valid format names, as accepted by [`Format::from_str`].
    pub const NAMES: &'static [&'static str] = &["xml", "toml"];

    /// Pick a format from a file extension.
    ///
    /// `.toml` selects TOML; everything else, including no extension, is XML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Format::Toml,
            _ => Format::Xml,
        }
    }

    /// The lowercase name of the format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Xml => "xml",
            Format::Toml => "toml",
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xml" => Ok(Format::Xml),
            "toml" => Ok(Format::Toml),
            other => Err(format!(
                "unknown format '{}', must be one of: {}",
                other,
                Self::NAMES.join(", ")
            )),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
