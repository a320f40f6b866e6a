//! regionlist - Region catalogs for simulation input decks
//!
//! Builds hierarchical parameter lists describing named, axis-aligned box
//! regions and serializes them for simulation codes that read
//! `<ParameterList>` XML.
//!
//! # Architecture
//!
//! - [`plist`] - Ordered parameter-list tree with XML and TOML encodings
//! - [`core`] - Region/box types, the region catalog, and configuration
//! - [`cli`] - Command-line interface layer (parses args, calls into core)
//! - [`ui`] - User-facing output
//!
//! # Example
//!
//! ```
//! use regionlist::core::catalog::RegionCatalog;
//!
//! let mut regions = RegionCatalog::new(None).unwrap();
//! regions
//!     .add_region("CCug region", &[0.0, 0.0, 11.4], &[103.2, 0.0, 18.0])
//!     .unwrap();
//! println!("{}", regions.serialize().unwrap());
//! ```

pub mod cli;
pub mod core;
pub mod plist;
pub mod ui;
