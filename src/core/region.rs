//! core::region
//!
//! Box and region value types.
//!
//! # Tree Layout
//!
//! A region is a sublist keyed by its label, holding a `box` sublist with
//! two `Array(double)` parameters:
//!
//! ```text
//! <label>
//! └── box
//!     ├── lo = {x0, y0, z0}
//!     └── hi = {x1, y1, z1}
//! ```
//!
//! These types are read-only snapshots; the tree in
//! [`RegionCatalog`](crate::core::catalog::RegionCatalog) is the source of
//! truth.

use serde::Serialize;

use crate::plist::ParameterList;

/// An axis-aligned bounding box.
///
/// Either bound may be omitted. No relation between `lo` and `hi` is
/// enforced here.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BoundingBox {
    #[serde(skip_serializing_if = "Option::is_none")]
    lo: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hi: Option<Vec<f64>>,
}

impl BoundingBox {
    /// Name of the sublist holding the bounds.
    pub const LIST_NAME: &'static str = "box";
    /// Parameter holding the lower corner.
    pub const LO: &'static str = "lo";
    /// Parameter holding the upper corner.
    pub const HI: &'static str = "hi";

    /// Create a box from optional bounds.
    ///
    /// An omitted or empty bound is left out.
    ///
    /// # Example
    ///
    /// ```
    /// use regionlist::core::region::BoundingBox;
    ///
    /// let b = BoundingBox::new(Some(&[0.0, 0.0]), None);
    /// assert_eq!(b.lo(), Some(&[0.0, 0.0][..]));
    /// assert!(b.hi().is_none());
    ///
    /// let empty = BoundingBox::new(Some(&[]), Some(&[]));
    /// assert!(empty.lo().is_none() && empty.hi().is_none());
    /// ```
    pub fn new(lo: Option<&[f64]>, hi: Option<&[f64]>) -> Self {
        Self {
            lo: non_empty(lo),
            hi: non_empty(hi),
        }
    }

    /// The lower corner, if set.
    pub fn lo(&self) -> Option<&[f64]> {
        self.lo.as_deref()
    }

    /// The upper corner, if set.
    pub fn hi(&self) -> Option<&[f64]> {
        self.hi.as_deref()
    }

    /// Both corners, when both are set.
    pub fn corners(&self) -> Option<(&[f64], &[f64])> {
        Some((self.lo()?, self.hi()?))
    }

    /// The shared coordinate count of both corners.
    ///
    /// Returns `None` if a corner is missing or the counts differ.
    pub fn dimension(&self) -> Option<usize> {
        let (lo, hi) = self.corners()?;
        (lo.len() == hi.len()).then_some(lo.len())
    }

    /// Whether `point` lies in the box, boundary included.
    ///
    /// Each coordinate is compared against the two corners without assuming
    /// which one is smaller. A box with a missing corner, or whose
    /// dimension differs from the point's, contains nothing.
    pub fn inside(&self, point: &[f64]) -> bool {
        let Some((lo, hi)) = self.corners() else {
            return false;
        };
        if self.dimension() != Some(point.len()) {
            return false;
        }
        point
            .iter()
            .zip(lo.iter().zip(hi))
            .all(|(&x, (&a, &b))| between(x, a, b))
    }

    /// Number of axes along which the box has zero extent.
    ///
    /// Returns `None` if the box is incomplete or its corners disagree in
    /// dimension.
    pub fn degenerate_axes(&self) -> Option<usize> {
        self.dimension()?;
        let (lo, hi) = self.corners()?;
        Some(lo.iter().zip(hi).filter(|(a, b)| a == b).count())
    }

    /// Build the `box` sublist for this box.
    pub fn to_parameter_list(&self) -> ParameterList {
        let mut list = ParameterList::new(Self::LIST_NAME);
        if let Some(lo) = &self.lo {
            list.set(Self::LO, lo.clone());
        }
        if let Some(hi) = &self.hi {
            list.set(Self::HI, hi.clone());
        }
        list
    }

    /// Read a box back from a `box` sublist.
    ///
    /// Bounds stored as anything other than a double array are treated as
    /// missing.
    pub fn from_parameter_list(list: &ParameterList) -> Self {
        let bound = |name| list.get(name).and_then(|v| v.as_doubles());
        Self::new(bound(Self::LO), bound(Self::HI))
    }
}

fn non_empty(bound: Option<&[f64]>) -> Option<Vec<f64>> {
    bound.filter(|b| !b.is_empty()).map(<[f64]>::to_vec)
}

/// Inclusive range test that does not care which endpoint is larger.
fn between(x: f64, a: f64, b: f64) -> bool {
    let (min, max) = if a <= b { (a, b) } else { (b, a) };
    min <= x && x <= max
}

/// A labelled box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    label: String,
    #[serde(rename = "box")]
    bounds: BoundingBox,
}

impl Region {
    /// Create a region value.
    pub fn new(label: impl Into<String>, bounds: BoundingBox) -> Self {
        Self {
            label: label.into(),
            bounds,
        }
    }

    /// Read a region from its sublist.
    ///
    /// Returns `None` if the list has no `box` sublist.
    pub fn from_parameter_list(list: &ParameterList) -> Option<Self> {
        let bounds = list.get_sublist(BoundingBox::LIST_NAME)?;
        Some(Self::new(
            list.name(),
            BoundingBox::from_parameter_list(bounds),
        ))
    }

    /// The region's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The region's box.
    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Whether the region's box contains `point`.
    pub fn inside(&self, point: &[f64]) -> bool {
        self.bounds.inside(point)
    }
}
