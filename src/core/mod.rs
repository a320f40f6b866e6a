//! core
//!
//! Core domain types and configuration.
//!
//! # Modules
//!
//! - [`region`] - Box and region value types
//! - [`catalog`] - The region catalog and its validation rules
//! - [`config`] - User settings schema and loading
//!
//! # Design Principles
//!
//! - The parameter list is the single source of truth; typed views are
//!   snapshots read from it
//! - Validation happens before any mutation
//! - Serialization output is deterministic (insertion order)

pub mod catalog;
pub mod config;
pub mod region;
