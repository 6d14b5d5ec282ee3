//! shortcut-core
//!
//! Core library for reading a local Steam install: installed applications,
//! their library roots, and the client icons recorded in the binary app cache.
//!
//! The goal is to keep all substantive logic here so it is fully testable and
//! reusable from multiple frontends (the CLI, shortcut emitters, etc.).

pub mod appinfo;
pub mod catalog;
pub mod config;
pub mod error;
pub mod keyvalue;
pub mod layout;
pub mod library;
pub mod manifest;
pub mod shortcut;

pub use appinfo::IconIndex;
pub use catalog::{Catalog, CatalogEntry, CatalogFailure};
pub use error::{MetadataError, MetadataResult};
pub use layout::{InstallLayout, LibraryLayout};
pub use manifest::ApplicationRecord;

/// Returns the library version as encoded at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
