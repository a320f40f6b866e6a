//! export command - Print or convert a catalog file

use anyhow::{Context as _, Result};
use std::path::Path;

use super::{load_catalog, render};
use crate::cli::Context;
use crate::plist::{self, Format};
use crate::ui::output;

/// Serialize a catalog to stdout or to `dest`.
///
/// The format is the explicit one if given, else the output file's
/// extension, else the configured default.
pub fn export(
    ctx: &Context,
    file: &Path,
    format: Option<Format>,
    dest: Option<&Path>,
) -> Result<()> {
    let catalog = load_catalog(file)?;

    let format = format
        .or_else(|| dest.map(Format::from_path))
        .unwrap_or_else(|| ctx.config.default_format());
    let text = render(ctx, &catalog, format)?;

    match dest {
        Some(path) => {
            plist::write_atomic(path, &text)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            output::print(
                format!("Wrote {} regions to {} ({})", catalog.len(), path.display(), format),
                ctx.verbosity,
            );
        }
        None => print!("{}", text),
    }
    Ok(())
}
