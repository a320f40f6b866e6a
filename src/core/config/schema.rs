//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Location
//!
//! Searched in order:
//! 1. `$REGIONS_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/regions/config.toml`
//! 3. `~/.regions/config.toml` (canonical)
//!
//! # Validation
//!
//! Values are validated after parsing (e.g., `default_format` must name a
//! known serialization format).

use serde::Deserialize;

use super::ConfigError;
use crate::plist::Format;

/// User settings.
///
/// # Example
///
/// ```toml
/// default_format = "xml"
/// strict_bounds = false
/// indent = 2
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Format used when printing a catalog ("xml" or "toml")
    pub default_format: Option<String>,

    /// Reject mismatched or inverted bounds when adding regions
    pub strict_bounds: Option<bool>,

    /// Spaces per nesting level in XML output
    pub indent: Option<usize>,
}

impl Settings {
    /// Largest accepted indent width.
    pub const MAX_INDENT: usize = 8;

    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(format) = &self.default_format {
            format.parse::<Format>().map_err(ConfigError::InvalidValue)?;
        }

        if let Some(indent) = self.indent {
            if indent > Self::MAX_INDENT {
                return Err(ConfigError::InvalidValue(format!(
                    "indent {} is too large, must be at most {}",
                    indent,
                    Self::MAX_INDENT
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn parse_full() {
        let settings: Settings = toml::from_str(
            r#"
            default_format = "toml"
            strict_bounds = true
            indent = 4
            "#,
        )
        .unwrap();

        assert_eq!(settings.default_format.as_deref(), Some("toml"));
        assert_eq!(settings.strict_bounds, Some(true));
        assert_eq!(settings.indent, Some(4));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn unknown_format_rejected() {
        let settings = Settings {
            default_format: Some("yaml".to_string()),
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn oversized_indent_rejected() {
        let settings = Settings {
            indent: Some(12),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn unknown_fields_rejected() {
        let result: Result<Settings, _> = toml::from_str("colour = \"blue\"");
        assert!(result.is_err());
    }
}
