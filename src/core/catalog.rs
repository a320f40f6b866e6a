//! core::catalog
//!
//! The region catalog: a root parameter list of labelled boxes.
//!
//! # Overview
//!
//! [`RegionCatalog`] owns a parameter list named `Regions`. Each call to
//! [`RegionCatalog::add_region`] validates its arguments and then nests a
//! region sublist holding a `box` sublist under the root. The whole tree is
//! serialized on demand.
//!
//! # Validation
//!
//! Arguments are checked in a fixed order and the first failure is
//! reported:
//! 1. the label must be non-empty
//! 2. the lower bound must be non-empty
//! 3. the upper bound must be non-empty
//!
//! With [`BoundsPolicy::Strict`] two further checks follow: the bounds must
//! have the same length, and `lo[i] <= hi[i]` on every axis. The default
//! [`BoundsPolicy::Lenient`] performs only the three checks above.
//!
//! A failed call never modifies the catalog.
//!
//! # Example
//!
//! ```
//! use regionlist::core::catalog::RegionCatalog;
//!
//! let mut regions = RegionCatalog::new(None).unwrap();
//! regions
//!     .add_region("Rwia region", &[0.0, 0.0, 0.0], &[103.2, 0.0, 6.0])
//!     .unwrap();
//! regions
//!     .add_region("Rlm region", &[0.0, 0.0, 6.0], &[103.2, 0.0, 11.4])
//!     .unwrap();
//!
//! assert_eq!(regions.labels().collect::<Vec<_>>(), ["Rwia region", "Rlm region"]);
//! let xml = regions.serialize().unwrap();
//! assert!(xml.starts_with(r#"<ParameterList name="Regions">"#));
//! ```

use std::path::Path;
use thiserror::Error;

use super::region::{BoundingBox, Region};
use crate::plist::{Entry, Format, ParameterList, PlistError};

/// Errors from catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Plist(#[from] PlistError),
}

impl CatalogError {
    fn invalid(message: impl Into<String>) -> Self {
        CatalogError::InvalidArgument(message.into())
    }
}

/// How strictly `add_region` checks the bounds it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsPolicy {
    /// Bounds must be present and non-empty.
    #[default]
    Lenient,
    /// Additionally, bounds must match in length and be ordered per axis.
    Strict,
}

/// A named collection of box regions backed by a parameter list.
#[derive(Debug, Clone)]
pub struct RegionCatalog {
    list: ParameterList,
    policy: BoundsPolicy,
}

impl Default for RegionCatalog {
    fn default() -> Self {
        Self::from_parameter_list(ParameterList::new(Self::ROOT_NAME))
    }
}

impl RegionCatalog {
    /// Name of the root parameter list.
    pub const ROOT_NAME: &'static str = "Regions";

    /// Create a catalog, optionally loading it from a file.
    ///
    /// With no file the catalog is empty. Otherwise the file is parsed as
    /// XML, or as TOML when its extension is `.toml`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Plist` if the file cannot be read or parsed.
    pub fn new(file: Option<&Path>) -> Result<Self, CatalogError> {
        match file {
            None => Ok(Self::default()),
            Some(path) => {
                let list = ParameterList::load(path)?;
                if list.name() != Self::ROOT_NAME {
                    tracing::warn!(
                        path = %path.display(),
                        root = list.name(),
                        "Catalog root is not named '{}'",
                        Self::ROOT_NAME
                    );
                }
                Ok(Self::from_parameter_list(list))
            }
        }
    }

    /// Wrap an existing parameter list.
    pub fn from_parameter_list(list: ParameterList) -> Self {
        Self {
            list,
            policy: BoundsPolicy::default(),
        }
    }

    /// Set the bounds policy, builder style.
    pub fn with_bounds_policy(mut self, policy: BoundsPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the bounds policy.
    pub fn set_bounds_policy(&mut self, policy: BoundsPolicy) {
        self.policy = policy;
    }

    /// The current bounds policy.
    pub fn bounds_policy(&self) -> BoundsPolicy {
        self.policy
    }

    /// Add a region with the given label and box corners.
    ///
    /// Returns the region's sublist so callers can attach further
    /// parameters to it.
    ///
    /// Adding a label that already names a region replaces that region's
    /// box and keeps its position.
    ///
    /// # Errors
    ///
    /// - `CatalogError::InvalidArgument` if a check fails (see module docs)
    /// - `CatalogError::Plist` if the label names a parameter, not a sublist
    pub fn add_region(
        &mut self,
        label: &str,
        lo: &[f64],
        hi: &[f64],
    ) -> Result<&mut ParameterList, CatalogError> {
        self.validate(label, lo, hi)?;

        let existed = self.list.contains(label);
        let bounds = BoundingBox::new(Some(lo), Some(hi));

        // Fails without inserting if the label holds a parameter.
        let region = self.list.sublist(label)?;
        if existed {
            tracing::warn!(label, "Region already exists, replacing its box");
        }
        region.add_sublist(bounds.to_parameter_list());

        tracing::debug!(label, ?lo, ?hi, "Added region");
        Ok(region)
    }

    fn validate(&self, label: &str, lo: &[f64], hi: &[f64]) -> Result<(), CatalogError> {
        if label.is_empty() {
            return Err(CatalogError::invalid("label required"));
        }
        if lo.is_empty() {
            return Err(CatalogError::invalid("lower bound required"));
        }
        if hi.is_empty() {
            return Err(CatalogError::invalid("upper bound required"));
        }

        if self.policy == BoundsPolicy::Strict {
            if lo.len() != hi.len() {
                return Err(CatalogError::invalid(format!(
                    "bounds dimension mismatch: lower bound has {} coordinates, upper bound has {}",
                    lo.len(),
                    hi.len()
                )));
            }
            if let Some(axis) = lo.iter().zip(hi).position(|(a, b)| a > b) {
                return Err(CatalogError::invalid(format!(
                    "lower bound exceeds upper bound on axis {}: {} > {}",
                    axis, lo[axis], hi[axis]
                )));
            }
        }

        Ok(())
    }

    /// Labels of all region entries, in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.list
            .entries()
            .filter(|(_, entry)| entry.is_sublist())
            .map(|(label, _)| label)
    }

    /// Number of region entries.
    pub fn len(&self) -> usize {
        self.labels().count()
    }

    /// Whether the catalog has no region entries.
    pub fn is_empty(&self) -> bool {
        self.labels().next().is_none()
    }

    /// Look up a region by label.
    ///
    /// Returns `None` if the label is unknown or its entry has no box.
    pub fn region(&self, label: &str) -> Option<Region> {
        self.list
            .get_sublist(label)
            .and_then(Region::from_parameter_list)
    }

    /// All regions with a box, in insertion order.
    pub fn regions(&self) -> Vec<Region> {
        self.list
            .entries()
            .filter_map(|(_, entry)| match entry {
                Entry::Sublist(list) => Region::from_parameter_list(list),
                Entry::Parameter(_) => None,
            })
            .collect()
    }

    /// Regions whose box contains `point`, in insertion order.
    pub fn containing(&self, point: &[f64]) -> Vec<Region> {
        self.regions()
            .into_iter()
            .filter(|region| region.inside(point))
            .collect()
    }

    /// The underlying parameter list.
    pub fn parameter_list(&self) -> &ParameterList {
        &self.list
    }

    /// Serialize the whole catalog as XML.
    pub fn serialize(&self) -> Result<String, CatalogError> {
        self.serialize_as(Format::Xml)
    }

    /// Serialize the whole catalog in the given format.
    pub fn serialize_as(&self, format: Format) -> Result<String, CatalogError> {
        Ok(self.list.to_format(format)?)
    }

    /// Write the catalog to a file atomically; the format follows the
    /// extension.
    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        Ok(self.list.save(path)?)
    }
}
