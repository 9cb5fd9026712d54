//! Shared library for the edufinder institution directory.
//!
//! The crate bundles a catalog of South African higher-education institutions
//! and exposes the pieces the `edufinder` binary is built from: the strict
//! catalog loader, the case-insensitive substring filter, resource and
//! configuration resolution, and a small terminal presentation layer.
//!
//! The catalog is loaded once and then only read, so a `Catalog` can be
//! shared freely between threads.

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod presentation;
pub mod resource;
pub mod schema;

pub use catalog::{Catalog, Category, CategoryKey, Institution, filter, load};
pub use config::Settings;
pub use error::{LinkOpenError, LoadError, ResourceUnavailable, StartupError};
pub use resource::{CatalogSource, load_catalog};
pub use schema::CatalogSchema;

/// Catalog text compiled into the binary from `data/institutions.json`.
pub const BUNDLED_CATALOG: &str = include_str!("../data/institutions.json");

/// Load the bundled catalog.
///
/// Fails only if the bundled data itself is malformed, which the test suite
/// guards against.
pub fn load_bundled() -> Result<Catalog, LoadError> {
    load(BUNDLED_CATALOG)
}
