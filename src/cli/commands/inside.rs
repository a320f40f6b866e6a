//! inside command - Print the regions containing a point

use anyhow::Result;
use std::path::Path;

use super::load_catalog;
use crate::cli::Context;
use crate::ui::output;

/// Print one label per line for each region whose box contains `point`.
pub fn inside(ctx: &Context, file: &Path, point: &[f64]) -> Result<()> {
    let catalog = load_catalog(file)?;
    let hits = catalog.containing(point);

    if hits.is_empty() {
        output::warn(
            format!("no region contains {}", output::format_coords(Some(point))),
            ctx.verbosity,
        );
        return Ok(());
    }

    for region in hits {
        println!("{}", region.label());
    }
    Ok(())
}
