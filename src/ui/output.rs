//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag.
//! When `--json` is enabled, output is machine-readable JSON.
//! Diagnostic logging goes through `tracing`, not through this module.

use std::fmt::Display;

use crate::core::region::Region;
use crate::plist::Value;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Format a coordinate list the way parameter arrays are written.
pub fn format_coords(coords: Option<&[f64]>) -> String {
    match coords {
        Some(c) => Value::from(c).to_string(),
        None => "(not set)".to_string(),
    }
}

/// Format a region as a single line: `label  lo={..}  hi={..}`.
pub fn format_region(region: &Region) -> String {
    format!(
        "{}  lo={}  hi={}",
        region.label(),
        format_coords(region.bounds().lo()),
        format_coords(region.bounds().hi())
    )
}
