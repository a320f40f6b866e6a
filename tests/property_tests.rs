//! Property-based tests for the region catalog.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated inputs.

use proptest::prelude::*;

use regionlist::core::catalog::{BoundsPolicy, CatalogError, RegionCatalog};
use regionlist::core::region::BoundingBox;
use regionlist::plist::{Format, ParameterList};

/// Strategy for region labels that survive any serialization unchanged.
fn label() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 _.&<>-]{0,20}"
}

/// Strategy for a single finite coordinate.
fn coord() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1.0e6..1.0e6f64,
        Just(0.0),
        Just(-0.0),
        Just(103.2),
        Just(f64::MAX),
        Just(f64::MIN_POSITIVE),
    ]
}

/// Strategy for a possibly empty coordinate vector.
fn coords(max: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(coord(), 0..=max)
}

/// Strategy for a non-empty coordinate vector.
fn bound() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(coord(), 1..=4)
}

/// Labels in first-seen order with duplicates removed.
fn first_seen(labels: &[String]) -> Vec<String> {
    let mut seen = Vec::new();
    for l in labels {
        if !seen.contains(l) {
            seen.push(l.clone());
        }
    }
    seen
}

fn seeded() -> RegionCatalog {
    let mut catalog = RegionCatalog::default();
    catalog.add_region("seed", &[0.0], &[1.0]).unwrap();
    catalog
}

proptest! {
    /// Validation checks run in a fixed order; the first failure wins.
    #[test]
    fn first_failing_check_is_reported(
        empty_label in any::<bool>(),
        lo in coords(3),
        hi in coords(3),
    ) {
        let label = if empty_label { "" } else { "region" };
        let expected = if label.is_empty() {
            Some("label required")
        } else if lo.is_empty() {
            Some("lower bound required")
        } else if hi.is_empty() {
            Some("upper bound required")
        } else {
            None
        };

        let mut catalog = RegionCatalog::default();
        match (catalog.add_region(label, &lo, &hi), expected) {
            (Err(CatalogError::InvalidArgument(msg)), Some(want)) => {
                prop_assert_eq!(msg.as_str(), want);
            }
            (Ok(_), None) => {}
            (result, want) => {
                prop_assert!(false, "got {:?}, wanted {:?}", result.map(|_| ()), want);
            }
        }
    }

    /// A failed add leaves the catalog exactly as it was.
    #[test]
    fn failed_add_leaves_catalog_unmodified(
        empty_label in any::<bool>(),
        lo in coords(3),
        hi in coords(3),
    ) {
        let label = if empty_label { "" } else { "fresh" };
        let mut catalog = seeded();
        let before = catalog.parameter_list().clone();

        if catalog.add_region(label, &lo, &hi).is_err() {
            prop_assert_eq!(catalog.parameter_list(), &before);
        }
    }

    /// A successful add stores both bounds exactly as given.
    #[test]
    fn valid_add_stores_exact_bounds(name in label(), lo in bound(), hi in bound()) {
        let mut catalog = RegionCatalog::default();
        catalog.add_region(&name, &lo, &hi).unwrap();

        let region = catalog.region(&name).unwrap();
        prop_assert_eq!(region.bounds().lo(), Some(lo.as_slice()));
        prop_assert_eq!(region.bounds().hi(), Some(hi.as_slice()));
    }

    /// Re-adding a label never changes the order of existing regions.
    #[test]
    fn labels_keep_first_insertion_order(names in prop::collection::vec(label(), 1..12)) {
        let mut catalog = RegionCatalog::default();
        for (i, name) in names.iter().enumerate() {
            let x = i as f64;
            catalog.add_region(name, &[x], &[x + 1.0]).unwrap();
        }

        let labels: Vec<String> = catalog.labels().map(String::from).collect();
        prop_assert_eq!(labels, first_seen(&names));
    }

    /// Strict mode accepts exactly the ordered, equal-length boxes.
    #[test]
    fn strict_accepts_only_ordered_boxes(lo in bound(), hi in bound()) {
        let mut catalog = RegionCatalog::default().with_bounds_policy(BoundsPolicy::Strict);
        let ordered = lo.len() == hi.len() && lo.iter().zip(&hi).all(|(a, b)| a <= b);

        prop_assert_eq!(catalog.add_region("r", &lo, &hi).is_ok(), ordered);
    }

    /// Serialize then load preserves labels, order, and coordinates.
    #[test]
    fn xml_round_trip_preserves_catalog(
        entries in prop::collection::vec((label(), bound(), bound()), 0..8),
    ) {
        let mut catalog = RegionCatalog::default();
        for (name, lo, hi) in &entries {
            catalog.add_region(name, lo, hi).unwrap();
        }

        let xml = catalog.serialize().unwrap();
        let loaded = RegionCatalog::from_parameter_list(ParameterList::from_xml(&xml).unwrap());

        prop_assert_eq!(loaded.parameter_list(), catalog.parameter_list());
        prop_assert_eq!(loaded.regions(), catalog.regions());
    }

    /// The TOML rendering carries the same tree as the XML one.
    #[test]
    fn toml_round_trip_preserves_catalog(
        entries in prop::collection::vec((label(), bound(), bound()), 0..8),
    ) {
        let mut catalog = RegionCatalog::default();
        for (name, lo, hi) in &entries {
            catalog.add_region(name, lo, hi).unwrap();
        }

        let toml = catalog.serialize_as(Format::Toml).unwrap();
        let loaded = ParameterList::from_toml(&toml).unwrap();

        prop_assert_eq!(&loaded, catalog.parameter_list());
    }

    /// Every corner of a box is inside it, whichever corner is "lower".
    #[test]
    fn corners_are_inside(lo in prop::collection::vec(coord(), 3), hi in prop::collection::vec(coord(), 3)) {
        let bounds = BoundingBox::new(Some(&lo), Some(&hi));
        prop_assert!(bounds.inside(&lo));
        prop_assert!(bounds.inside(&hi));
    }
}
