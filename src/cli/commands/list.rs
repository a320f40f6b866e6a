//! list command - List the regions in a catalog file

use anyhow::Result;
use std::path::Path;

use super::load_catalog;
use crate::cli::Context;
use crate::ui::output;

/// List regions in insertion order.
///
/// With `json`, prints an array of `{label, box: {lo, hi}}` objects.
pub fn list(ctx: &Context, file: &Path, json: bool) -> Result<()> {
    let catalog = load_catalog(file)?;
    let regions = catalog.regions();

    if json {
        println!("{}", serde_json::to_string_pretty(&regions)?);
        return Ok(());
    }

    if regions.is_empty() {
        output::print("No regions.", ctx.verbosity);
        return Ok(());
    }

    for region in &regions {
        println!("{}", output::format_region(region));
    }
    Ok(())
}
