//! add command - Add a box region to a catalog file

use anyhow::Result;
use std::path::Path;

use super::{load_catalog, save_catalog};
use crate::cli::Context;
use crate::core::catalog::{BoundsPolicy, RegionCatalog};
use crate::ui::output;

/// Add a region to `file`, creating the file if it does not exist.
///
/// A missing label is passed through as empty so the catalog reports it.
pub fn add(
    ctx: &Context,
    file: &Path,
    label: Option<&str>,
    lo: &[f64],
    hi: &[f64],
    strict: bool,
) -> Result<()> {
    let mut catalog = if file.exists() {
        load_catalog(file)?
    } else {
        tracing::debug!(path = %file.display(), "Catalog file not found, starting empty");
        RegionCatalog::default()
    };

    if strict || ctx.config.strict_bounds() {
        catalog.set_bounds_policy(BoundsPolicy::Strict);
    }

    let label = label.unwrap_or_default();
    let replaced = catalog.parameter_list().get_sublist(label).is_some();
    catalog.add_region(label, lo, hi)?;

    save_catalog(ctx, &catalog, file)?;

    let verb = if replaced { "Updated" } else { "Added" };
    output::print(
        format!("{} region '{}' in {}", verb, label, file.display()),
        ctx.verbosity,
    );
    Ok(())
}
