//! Integration tests for the region catalog.
//!
//! These tests exercise RegionCatalog through its public API, including
//! persistence to XML and TOML files created with tempfile.

use std::fs;

use tempfile::TempDir;

use regionlist::core::catalog::{BoundsPolicy, CatalogError, RegionCatalog};
use regionlist::plist::{Format, ParameterList, PlistError, Value};

// =============================================================================
// Test Helpers
// =============================================================================

fn two_layers() -> RegionCatalog {
    let mut catalog = RegionCatalog::new(None).expect("empty catalog");
    catalog
        .add_region("Rwia region", &[0.0, 0.0, 0.0], &[103.2, 0.0, 6.0])
        .expect("add Rwia");
    catalog
        .add_region("Rlm region", &[0.0, 0.0, 6.0], &[103.2, 0.0, 11.4])
        .expect("add Rlm");
    catalog
}

fn invalid_message(err: CatalogError) -> String {
    match err {
        CatalogError::InvalidArgument(msg) => msg,
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn two_regions_serialize_in_insertion_order() {
    let xml = two_layers().serialize().unwrap();

    let expected = r#"<ParameterList name="Regions">
  <ParameterList name="Rwia region">
    <ParameterList name="box">
      <Parameter name="lo" type="Array(double)" value="{0.0, 0.0, 0.0}"/>
      <Parameter name="hi" type="Array(double)" value="{103.2, 0.0, 6.0}"/>
    </ParameterList>
  </ParameterList>
  <ParameterList name="Rlm region">
    <ParameterList name="box">
      <Parameter name="lo" type="Array(double)" value="{0.0, 0.0, 6.0}"/>
      <Parameter name="hi" type="Array(double)" value="{103.2, 0.0, 11.4}"/>
    </ParameterList>
  </ParameterList>
</ParameterList>
"#;
    assert_eq!(xml, expected);
}

#[test]
fn missing_label_leaves_catalog_empty() {
    let mut catalog = RegionCatalog::new(None).unwrap();
    let err = catalog
        .add_region("", &[0.0, 0.0, 0.0], &[1.0, 1.0, 1.0])
        .unwrap_err();

    assert_eq!(invalid_message(err), "label required");
    assert_eq!(catalog.labels().count(), 0);
    assert!(catalog.parameter_list().is_empty());
}

#[test]
fn failures_do_not_touch_existing_regions() {
    let mut catalog = two_layers();
    let before = catalog.parameter_list().clone();

    for (label, lo, hi) in [
        ("", &[0.0][..], &[1.0][..]),
        ("new", &[][..], &[1.0][..]),
        ("new", &[0.0][..], &[][..]),
    ] {
        assert!(catalog.add_region(label, lo, hi).is_err());
        assert_eq!(catalog.parameter_list(), &before);
    }
}

#[test]
fn error_messages_are_the_user_contract() {
    let mut catalog = RegionCatalog::default();
    let err = catalog.add_region("x", &[], &[1.0]).unwrap_err();
    assert_eq!(err.to_string(), "invalid argument: lower bound required");
}

#[test]
fn strict_policy_is_opt_in() {
    let mut lenient = RegionCatalog::default();
    lenient.add_region("inverted", &[1.0, 1.0], &[0.0, 0.0]).unwrap();

    let mut strict = RegionCatalog::default().with_bounds_policy(BoundsPolicy::Strict);
    let err = strict.add_region("inverted", &[1.0, 1.0], &[0.0, 0.0]).unwrap_err();
    assert!(invalid_message(err).contains("axis 0"));
    assert!(strict.is_empty());
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn xml_file_round_trip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("regions.xml");

    let catalog = two_layers();
    catalog.save(&path).unwrap();

    let loaded = RegionCatalog::new(Some(&path)).unwrap();
    assert_eq!(
        loaded.labels().collect::<Vec<_>>(),
        ["Rwia region", "Rlm region"]
    );
    assert_eq!(loaded.regions(), catalog.regions());
    assert_eq!(loaded.parameter_list(), catalog.parameter_list());
}

#[test]
fn toml_file_round_trip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("regions.toml");

    let catalog = two_layers();
    catalog.save(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("Rwia region"));

    let loaded = RegionCatalog::new(Some(&path)).unwrap();
    assert_eq!(loaded.parameter_list(), catalog.parameter_list());
}

#[test]
fn loaded_catalog_accepts_more_regions() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("regions.xml");
    two_layers().save(&path).unwrap();

    let mut catalog = RegionCatalog::new(Some(&path)).unwrap();
    catalog
        .add_region("CCug region", &[0.0, 0.0, 11.4], &[103.2, 0.0, 18.0])
        .unwrap();
    catalog.save(&path).unwrap();

    let reloaded = RegionCatalog::new(Some(&path)).unwrap();
    assert_eq!(
        reloaded.labels().collect::<Vec<_>>(),
        ["Rwia region", "Rlm region", "CCug region"]
    );
}

#[test]
fn foreign_entries_survive_round_trip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("regions.xml");
    fs::write(
        &path,
        r#"<ParameterList name="Regions">
  <Parameter name="version" type="int" value="2"/>
  <ParameterList name="Outcrop">
    <Parameter name="material" type="string" value="basalt"/>
    <ParameterList name="box">
      <Parameter name="lo" type="Array(double)" value="{0.0, 0.0}"/>
      <Parameter name="hi" type="Array(double)" value="{5.0, 5.0}"/>
    </ParameterList>
  </ParameterList>
</ParameterList>
"#,
    )
    .unwrap();

    let catalog = RegionCatalog::new(Some(&path)).unwrap();
    assert_eq!(catalog.labels().collect::<Vec<_>>(), ["Outcrop"]);
    assert_eq!(catalog.parameter_list().get("version"), Some(&Value::Int(2)));

    let outcrop = catalog.parameter_list().get_sublist("Outcrop").unwrap();
    assert_eq!(outcrop.get("material").and_then(Value::as_str), Some("basalt"));

    let reparsed = ParameterList::from_xml(&catalog.serialize().unwrap()).unwrap();
    assert_eq!(&reparsed, catalog.parameter_list());
}

#[test]
fn format_conversion_preserves_tree() {
    let catalog = two_layers();
    let toml = catalog.serialize_as(Format::Toml).unwrap();
    let from_toml = ParameterList::from_toml(&toml).unwrap();
    let xml = from_toml.to_xml().unwrap();
    assert_eq!(xml, catalog.serialize().unwrap());
}

#[test]
fn region_attributes_keep_their_order_in_xml() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("regions.xml");

    let mut catalog = two_layers();
    catalog
        .add_region("Outcrop", &[0.0, 0.0], &[5.0, 5.0])
        .unwrap()
        .set("material", "sand");
    catalog.save(&path).unwrap();

    let loaded = RegionCatalog::new(Some(&path)).unwrap();
    let outcrop = loaded.parameter_list().get_sublist("Outcrop").unwrap();
    let keys: Vec<_> = outcrop.entries().map(|(k, _)| k).collect();
    assert_eq!(keys, ["box", "material"]);
    assert_eq!(loaded.parameter_list(), catalog.parameter_list());
}

#[test]
fn toml_refuses_to_reorder_region_attributes() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("regions.toml");

    let mut catalog = two_layers();
    catalog
        .add_region("Outcrop", &[0.0, 0.0], &[5.0, 5.0])
        .unwrap()
        .set("material", "sand");

    let err = catalog.save(&path).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::Plist(PlistError::Unrepresentable(_))
    ));
    assert!(!path.exists());
}

#[test]
fn toml_keeps_attributes_set_before_the_box() {
    let mut list = ParameterList::new(RegionCatalog::ROOT_NAME);
    list.sublist("Outcrop").unwrap().set("material", "sand");
    let mut catalog = RegionCatalog::from_parameter_list(list);
    catalog
        .add_region("Outcrop", &[0.0, 0.0], &[5.0, 5.0])
        .unwrap();

    let toml = catalog.serialize_as(Format::Toml).unwrap();
    let loaded = ParameterList::from_toml(&toml).unwrap();
    let keys: Vec<_> = loaded
        .get_sublist("Outcrop")
        .unwrap()
        .entries()
        .map(|(k, _)| k)
        .collect();
    assert_eq!(keys, ["material", "box"]);
    assert_eq!(&loaded, catalog.parameter_list());
}

#[test]
fn missing_file_is_reported() {
    let temp = TempDir::new().unwrap();
    let err = RegionCatalog::new(Some(&temp.path().join("nope.xml"))).unwrap_err();
    assert!(matches!(err, CatalogError::Plist(PlistError::Read { .. })));
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn containing_picks_layers_by_depth() {
    let catalog = two_layers();

    let labels: Vec<_> = catalog
        .containing(&[50.0, 0.0, 3.0])
        .into_iter()
        .map(|r| r.label().to_string())
        .collect();
    assert_eq!(labels, ["Rwia region"]);

    // The shared face belongs to both layers.
    assert_eq!(catalog.containing(&[50.0, 0.0, 6.0]).len(), 2);
    // Off the y = 0 plane nothing matches.
    assert!(catalog.containing(&[50.0, 0.1, 3.0]).is_empty());
}
