//! plist
//!
//! Hierarchical parameter lists.
//!
//! # Overview
//!
//! A [`ParameterList`] is a named, ordered collection of entries. Each entry
//! is either a typed parameter ([`Value`]) or a nested parameter list
//! (a *sublist*). Insertion order is preserved and drives serialization
//! order.
//!
//! # Formats
//!
//! - [`xml`] - The `<ParameterList>`/`<Parameter>` layout read by simulation
//!   codes built on Trilinos-style parameter lists
//! - [`toml_doc`] - A TOML document with one top-level table per root list
//!
//! # Example
//!
//! ```
//! use regionlist::plist::ParameterList;
//!
//! let mut root = ParameterList::new("Regions");
//! let region = root.sublist("Rwia region").unwrap();
//! let mut boxed = ParameterList::new("box");
//! boxed.set("lo", vec![0.0, 0.0, 0.0]);
//! region.add_sublist(boxed);
//!
//! let xml = root.to_xml().unwrap();
//! assert!(xml.contains(r#"<ParameterList name="Rwia region">"#));
//! ```

pub mod format;
pub mod toml_doc;
mod value;
pub mod xml;

pub use format::Format;
pub use value::Value;

use indexmap::IndexMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from parameter list operations.
#[derive(Debug, Error)]
pub enum PlistError {
    #[error("failed to read parameter list '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write parameter list '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse parameter list: {0}")]
    Parse(String),

    #[error("failed to encode parameter list: {0}")]
    Encode(String),

    #[error("'{0}' is a parameter, not a sublist")]
    NotASublist(String),

    #[error("cannot represent value: {0}")]
    Unrepresentable(String),
}

/// One entry of a parameter list.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Parameter(Value),
    Sublist(ParameterList),
}

impl Entry {
    /// Whether this entry is a nested list.
    pub fn is_sublist(&self) -> bool {
        matches!(self, Entry::Sublist(_))
    }
}

/// A named, ordered tree of parameters.
///
/// Equality is order-sensitive: two lists are equal only if their entries
/// match pairwise in insertion order.
#[derive(Debug, Clone)]
pub struct ParameterList {
    name: String,
    entries: IndexMap<String, Entry>,
}

impl PartialEq for ParameterList {
    fn eq(&self, other: &Self) -> bool {
        // IndexMap's own equality ignores order.
        self.name == other.name && self.entries.iter().eq(other.entries.iter())
    }
}

impl ParameterList {
    /// Create an empty list with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: IndexMap::new(),
        }
    }

    /// Load a list from a file, choosing the format from the extension.
    ///
    /// # Errors
    ///
    /// Returns `PlistError::Read` if the file cannot be read and
    /// `PlistError::Parse` if its contents are malformed.
    pub fn load(path: &Path) -> Result<Self, PlistError> {
        let contents = fs::read_to_string(path).map_err(|e| PlistError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let list = match Format::from_path(path) {
            Format::Xml => Self::from_xml(&contents)?,
            Format::Toml => Self::from_toml(&contents)?,
        };

        tracing::debug!(
            path = %path.display(),
            name = %list.name,
            entries = list.len(),
            "Loaded parameter list"
        );
        Ok(list)
    }

    /// The list's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of direct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an entry with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterate over entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Set a parameter, replacing any existing entry of the same name.
    ///
    /// A replaced entry keeps its position.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.entries
            .insert(name.into(), Entry::Parameter(value.into()));
        self
    }

    /// Get a parameter by name.
    ///
    /// Returns `None` if the name is missing or holds a sublist.
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self.entries.get(name) {
            Some(Entry::Parameter(v)) => Some(v),
            _ => None,
        }
    }

    /// Get a sublist by name, creating an empty one if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `PlistError::NotASublist` if `name` already holds a parameter.
    pub fn sublist(&mut self, name: &str) -> Result<&mut ParameterList, PlistError> {
        let entry = self
            .entries
            .entry(name.to_string())
            .or_insert_with(|| Entry::Sublist(ParameterList::new(name)));

        match entry {
            Entry::Sublist(list) => Ok(list),
            Entry::Parameter(_) => Err(PlistError::NotASublist(name.to_string())),
        }
    }

    /// Attach a list as a child under its own name.
    ///
    /// An existing entry of the same name is replaced in place.
    pub fn add_sublist(&mut self, list: ParameterList) -> &mut ParameterList {
        let key = list.name.clone();
        let index = match self.entries.get_index_of(&key) {
            Some(index) => {
                self.entries[index] = Entry::Sublist(list);
                index
            }
            None => self.entries.insert_full(key, Entry::Sublist(list)).0,
        };

        match &mut self.entries[index] {
            Entry::Sublist(list) => list,
            Entry::Parameter(_) => unreachable!("entry was just stored as a sublist"),
        }
    }

    /// Get an existing sublist by name.
    pub fn get_sublist(&self, name: &str) -> Option<&ParameterList> {
        match self.entries.get(name) {
            Some(Entry::Sublist(list)) => Some(list),
            _ => None,
        }
    }

    /// Serialize in the given format.
    pub fn to_format(&self, format: Format) -> Result<String, PlistError> {
        match format {
            Format::Xml => self.to_xml(),
            Format::Toml => self.to_toml(),
        }
    }

    /// Serialize as XML with the default two-space indent.
    pub fn to_xml(&self) -> Result<String, PlistError> {
        xml::write(self, xml::DEFAULT_INDENT)
    }

    /// Parse a list from XML.
    pub fn from_xml(input: &str) -> Result<Self, PlistError> {
        xml::read(input)
    }

    /// Serialize as a TOML document.
    pub fn to_toml(&self) -> Result<String, PlistError> {
        toml_doc::write(self)
    }

    /// Parse a list from a TOML document.
    pub fn from_toml(input: &str) -> Result<Self, PlistError> {
        toml_doc::read(input)
    }

    /// Write the list to a file atomically.
    ///
    /// The format is chosen from the extension. Parent directories are
    /// created if needed; contents go to a temp file in the same directory
    /// which is then renamed over the target.
    pub fn save(&self, path: &Path) -> Result<(), PlistError> {
        let contents = self.to_format(Format::from_path(path))?;
        write_atomic(path, &contents)
    }
}

/// Write `contents` to `path` via a temp file and rename.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> Result<(), PlistError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| PlistError::Write {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
    }

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);

    let mut file = fs::File::create(&temp_path).map_err(|e| PlistError::Write {
        path: temp_path.clone(),
        source: e,
    })?;

    file.write_all(contents.as_bytes())
        .map_err(|e| PlistError::Write {
            path: temp_path.clone(),
            source: e,
        })?;

    file.sync_all().map_err(|e| PlistError::Write {
        path: temp_path.clone(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| PlistError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "Wrote parameter list");
    Ok(())
}
