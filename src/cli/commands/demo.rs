//! demo command - Print the deep vadose example catalog

use anyhow::Result;

use super::render;
use crate::cli::Context;
use crate::core::catalog::{CatalogError, RegionCatalog};
use crate::plist::Format;

/// Layers of the deep vadose zone example: label, lower corner, upper corner.
const DEEP_VADOSE: [(&str, [f64; 3], [f64; 3]); 4] = [
    ("Rwia region", [0.0, 0.0, 0.0], [103.2, 0.0, 6.0]),
    ("Rlm region", [0.0, 0.0, 6.0], [103.2, 0.0, 11.4]),
    ("CCug region", [0.0, 0.0, 11.4], [103.2, 0.0, 18.0]),
    ("CCuz region", [0.0, 0.0, 18.0], [103.2, 0.0, 22.2]),
];

/// Build the deep vadose example catalog.
pub fn deep_vadose_catalog() -> Result<RegionCatalog, CatalogError> {
    let mut catalog = RegionCatalog::default();
    for (label, lo, hi) in &DEEP_VADOSE {
        catalog.add_region(label, lo, hi)?;
    }
    Ok(catalog)
}

/// Print the example catalog.
pub fn demo(ctx: &Context, format: Option<Format>) -> Result<()> {
    let catalog = deep_vadose_catalog()?;
    let format = format.unwrap_or_else(|| ctx.config.default_format());
    print!("{}", render(ctx, &catalog, format)?);
    Ok(())
}
