//! plist::toml_doc
//!
//! TOML encoding of parameter lists.
//!
//! The root list becomes a single top-level table named after the list;
//! sublists become nested tables and parameters become keys:
//!
//! ```toml
//! [Regions."Rwia region".box]
//! lo = [0.0, 0.0, 0.0]
//! hi = [103.2, 0.0, 6.0]
//! ```
//!
//! TOML writes a table's plain keys before its sub-tables, so a list in
//! which a parameter follows a sublist cannot keep its order; writing such a
//! list fails with `PlistError::Unrepresentable`. Empty arrays read back as
//! integer arrays since TOML carries no element type for them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Entry, ParameterList, PlistError, Value};

#[derive(Serialize)]
#[serde(untagged)]
enum NodeRef<'a> {
    Value(&'a Value),
    Table(IndexMap<&'a str, NodeRef<'a>>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Node {
    Value(Value),
    Table(IndexMap<String, Node>),
}

fn to_table(list: &ParameterList) -> IndexMap<&str, NodeRef<'_>> {
    list.entries()
        .map(|(name, entry)| {
            let node = match entry {
                Entry::Parameter(value) => NodeRef::Value(value),
                Entry::Sublist(child) => NodeRef::Table(to_table(child)),
            };
            (name, node)
        })
        .collect()
}

fn from_table(name: String, table: IndexMap<String, Node>) -> ParameterList {
    let mut list = ParameterList::new(name);
    for (key, node) in table {
        match node {
            Node::Value(value) => {
                list.set(key, value);
            }
            Node::Table(child) => {
                list.add_sublist(from_table(key, child));
            }
        }
    }
    list
}

/// Fail if any list in the tree has a parameter after a sublist.
fn check_order(list: &ParameterList) -> Result<(), PlistError> {
    let mut first_sublist: Option<&str> = None;
    for (name, entry) in list.entries() {
        match entry {
            Entry::Sublist(child) => {
                if first_sublist.is_none() {
                    first_sublist = Some(name);
                }
                check_order(child)?;
            }
            Entry::Parameter(_) => {
                if let Some(sub) = first_sublist {
                    return Err(PlistError::Unrepresentable(format!(
                        "parameter '{}' follows sublist '{}' in '{}'; TOML writes keys before tables",
                        name,
                        sub,
                        list.name()
                    )));
                }
            }
        }
    }
    Ok(())
}

/// Encode a list as a TOML document.
///
/// # Errors
///
/// Returns `PlistError::Unrepresentable` if a parameter follows a sublist
/// anywhere in the tree.
pub fn write(list: &ParameterList) -> Result<String, PlistError> {
    check_order(list)?;
    let mut doc = IndexMap::new();
    doc.insert(list.name(), NodeRef::Table(to_table(list)));
    toml::to_string(&doc).map_err(|e| PlistError::Encode(e.to_string()))
}

/// Decode a list from a TOML document.
///
/// The document must hold exactly one top-level table.
pub fn read(input: &str) -> Result<ParameterList, PlistError> {
    let doc: IndexMap<String, Node> =
        toml::from_str(input).map_err(|e| PlistError::Parse(e.to_string()))?;

    let mut roots = doc.into_iter();
    match (roots.next(), roots.next()) {
        (Some((name, Node::Table(table))), None) => Ok(from_table(name, table)),
        (Some((name, Node::Value(_))), None) => Err(PlistError::Parse(format!(
            "top-level key '{}' must be a table",
            name
        ))),
        _ => Err(PlistError::Parse(
            "expected exactly one top-level table".to_string(),
        )),
    }
}
