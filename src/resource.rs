//! Acquisition of the catalog text.
//!
//! The bundled catalog is compiled into the binary, so reading it cannot
//! fail; an override file can. Either way the loader only ever sees text.

use crate::BUNDLED_CATALOG;
use crate::catalog::{Catalog, load};
use crate::error::{ResourceUnavailable, StartupError};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Where the catalog text comes from.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum CatalogSource {
    /// The copy of `data/institutions.json` embedded at build time.
    #[default]
    Bundled,
    /// A catalog file on disk, replacing the bundled copy.
    File(PathBuf),
}

impl CatalogSource {
    /// Read the catalog text without parsing it.
    pub fn read(&self) -> Result<Cow<'static, str>, ResourceUnavailable> {
        match self {
            CatalogSource::Bundled => Ok(Cow::Borrowed(BUNDLED_CATALOG)),
            CatalogSource::File(path) => read_catalog_file(path).map(Cow::Owned),
        }
    }

    /// Human-readable description used in logs and summaries.
    pub fn describe(&self) -> String {
        match self {
            CatalogSource::Bundled => "bundled catalog".to_string(),
            CatalogSource::File(path) => path.display().to_string(),
        }
    }
}

fn read_catalog_file(path: &Path) -> Result<String, ResourceUnavailable> {
    fs::read_to_string(path).map_err(|source| {
        warn!(path = %path.display(), error = %source, "catalog file unreadable");
        ResourceUnavailable {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Read and load the catalog in one step.
pub fn load_catalog(source: &CatalogSource) -> Result<Catalog, StartupError> {
    debug!(source = %source.describe(), "reading catalog");
    let text = source.read()?;
    let catalog = load(&text)?;
    Ok(catalog)
}
