//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Loads the catalog or configuration it needs
//! 2. Calls into [`crate::core`] to do the work
//! 3. Formats and displays output
//!
//! Catalog validation errors are returned unchanged so the user sees the
//! same message the library reports.

mod add;
mod completion;
mod config_cmd;
mod demo;
mod export;
mod inside;
mod list;

// Re-export command functions for testing and direct invocation
pub use add::add;
pub use completion::completion;
pub use config_cmd::show as config_show;
pub use demo::{demo, deep_vadose_catalog};
pub use export::export;
pub use inside::inside;
pub use list::list;

use anyhow::{Context as _, Result};
use std::path::Path;

use super::args::Command;
use super::Context;
use crate::core::catalog::RegionCatalog;
use crate::plist::{self, Format};

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Add {
            file,
            label,
            lo,
            hi,
            strict,
        } => add::add(ctx, &file, label.as_deref(), &lo, &hi, strict),
        Command::List { file, json } => list::list(ctx, &file, json),
        Command::Export {
            file,
            format,
            output,
        } => export::export(ctx, &file, format.map(Format::from), output.as_deref()),
        Command::Inside { file, point } => inside::inside(ctx, &file, &point),
        Command::Demo { format } => demo::demo(ctx, format.map(Format::from)),
        Command::Config => config_cmd::show(ctx),
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Load an existing catalog file.
fn load_catalog(file: &Path) -> Result<RegionCatalog> {
    RegionCatalog::new(Some(file))
        .with_context(|| format!("Failed to load catalog '{}'", file.display()))
}

/// Write a catalog atomically in the format its extension names, honoring
/// the configured XML indent.
fn save_catalog(ctx: &Context, catalog: &RegionCatalog, file: &Path) -> Result<()> {
    let text = render(ctx, catalog, Format::from_path(file))?;
    plist::write_atomic(file, &text)
        .with_context(|| format!("Failed to write catalog '{}'", file.display()))
}

/// Serialize a catalog, honoring the configured XML indent.
fn render(ctx: &Context, catalog: &RegionCatalog, format: Format) -> Result<String> {
    let text = match format {
        Format::Xml => plist::xml::write(catalog.parameter_list(), ctx.config.indent())?,
        Format::Toml => catalog.serialize_as(Format::Toml)?,
    };
    Ok(text)
}
