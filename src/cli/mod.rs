//! cli
//!
//! Command-line interface layer.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load user configuration
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! handlers that call into [`crate::core`]. Validation of region arguments
//! lives in the catalog, not here.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use anyhow::{Context as _, Result};

use crate::core::config::Config;
use crate::ui::output::Verbosity;

/// Per-invocation state shared by command handlers.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output verbosity derived from `--quiet` / `--debug`
    pub verbosity: Verbosity,
    /// Effective user configuration
    pub config: Config,
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    if cli.debug {
        init_tracing();
    }

    let config = Config::load().context("Failed to load configuration")?;
    let ctx = Context {
        verbosity: Verbosity::from_flags(cli.quiet, cli.debug),
        config,
    };

    commands::dispatch(cli.command, &ctx)
}

/// Install a stderr subscriber at DEBUG level.
fn init_tracing() {
    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
