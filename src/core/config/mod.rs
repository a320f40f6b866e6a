//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! The `regions` CLI reads a single user-level settings file. A missing file
//! is not an error; defaults apply. CLI flags override file values (not
//! handled here).
//!
//! # Locations
//!
//! Searched in order:
//! 1. `$REGIONS_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/regions/config.toml`
//! 3. `~/.regions/config.toml` (canonical location)
//!
//! # Example
//!
//! ```no_run
//! use regionlist::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("Format: {}", config.default_format());
//! println!("Strict bounds: {}", config.strict_bounds());
//! ```

pub mod schema;

pub use schema::Settings;

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::plist::{self, Format};

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Effective configuration.
///
/// Accessors apply defaults for unset values.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Settings as read from file
    pub settings: Settings,
    /// Path the settings were loaded from (if any)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed,
    /// or validated.
    pub fn load() -> Result<Config, ConfigError> {
        match Self::locate() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let settings = Self::read_settings(path)?;
        settings.validate()?;

        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(Config {
            settings,
            path: Some(path.to_path_buf()),
        })
    }

    /// Find the first existing config file.
    fn locate() -> Option<PathBuf> {
        // 1. $REGIONS_CONFIG
        if let Ok(path) = std::env::var("REGIONS_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. $XDG_CONFIG_HOME/regions/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("regions/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. ~/.regions/config.toml
        let path = dirs::home_dir()?.join(".regions/config.toml");
        path.exists().then_some(path)
    }

    fn read_settings(path: &Path) -> Result<Settings, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the canonical config path, `~/.regions/config.toml`.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".regions/config.toml"))
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Output format for printed catalogs.
    ///
    /// Defaults to XML.
    pub fn default_format(&self) -> Format {
        self.settings
            .default_format
            .as_deref()
            .and_then(|f| f.parse().ok())
            .unwrap_or_default()
    }

    /// Whether bounds are checked strictly.
    ///
    /// Defaults to `false`.
    pub fn strict_bounds(&self) -> bool {
        self.settings.strict_bounds.unwrap_or(false)
    }

    /// XML indent width.
    ///
    /// Defaults to 2.
    pub fn indent(&self) -> usize {
        self.settings.indent.unwrap_or(plist::xml::DEFAULT_INDENT)
    }

    /// Get the path the configuration was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
