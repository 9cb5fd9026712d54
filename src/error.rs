//! Error taxonomy for catalog acquisition, loading, and link opening.
//!
//! Each concern gets its own type so the presentation layer can decide what
//! is fatal: a `StartupError` ends the load attempt, a `LinkOpenError` only
//! ends the one action that raised it. The filter engine has no error path.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The catalog text could not be obtained.
#[derive(Debug, Error)]
#[error("catalog resource {} is unavailable: {source}", .path.display())]
pub struct ResourceUnavailable {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Catalog text failed structural validation.
///
/// Every variant names enough context (category, record index, field) for a
/// human-readable message. A load that yields any of these produces no
/// catalog at all.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog root must be an object of category lists, found {found}")]
    NotAnObject { found: &'static str },

    #[error("category '{category}' must be a list of institutions, found {found}")]
    CategoryNotArray {
        category: String,
        found: &'static str,
    },

    #[error("{category}[{index}] must be an object, found {found}")]
    RecordNotObject {
        category: String,
        index: usize,
        found: &'static str,
    },

    #[error("{category}[{index}] is missing required field '{field}'")]
    MissingField {
        category: String,
        index: usize,
        field: &'static str,
    },

    #[error("{category}[{index}].{field} must be text, found {found}")]
    FieldNotText {
        category: String,
        index: usize,
        field: &'static str,
        found: &'static str,
    },

    #[error("{category}[{index}].{field} must not be empty")]
    EmptyField {
        category: String,
        index: usize,
        field: &'static str,
    },
}

impl LoadError {
    /// Category the failure was found in, when it is tied to one.
    pub fn category(&self) -> Option<&str> {
        match self {
            LoadError::Parse(_) | LoadError::NotAnObject { .. } => None,
            LoadError::CategoryNotArray { category, .. }
            | LoadError::RecordNotObject { category, .. }
            | LoadError::MissingField { category, .. }
            | LoadError::FieldNotText { category, .. }
            | LoadError::EmptyField { category, .. } => Some(category),
        }
    }
}

/// Either half of startup can fail; callers surface both the same way.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Resource(#[from] ResourceUnavailable),
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Opening an institution's website failed.
#[derive(Debug, Error)]
pub enum LinkOpenError {
    #[error("{name} has no website listed")]
    NoWebsite { name: String },

    #[error("could not open {url}: {source}")]
    Launch {
        url: String,
        #[source]
        source: io::Error,
    },
}
