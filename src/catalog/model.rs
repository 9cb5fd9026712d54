//! In-memory representation of the institution catalog.
//!
//! A `Catalog` is built once by the loader and then only read. Categories
//! keep the order they had in the source object and records keep their
//! source order, which is also display order.

use crate::catalog::filter;
use crate::catalog::identity::CategoryKey;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// One institution as listed in the catalog.
pub struct Institution {
    pub name: String,
    /// Free-form label such as "University of Technology"; unrelated to the
    /// category key the record is filed under.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl Institution {
    pub fn new(name: impl Into<String>, kind: impl Into<String>, website: Option<&str>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            website: website.map(str::to_string),
        }
    }

    /// The stored website text, verbatim.
    pub fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }

    /// Whether `query` occurs in the name, type, or website, ignoring case.
    ///
    /// An empty query matches every record.
    pub fn matches(&self, query: &str) -> bool {
        filter::matches_folded(self, &query.to_lowercase())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
/// All records filed under a single category key.
pub struct Category {
    pub key: CategoryKey,
    pub institutions: Vec<Institution>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
/// Read-only catalog of institutions grouped by category.
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub(crate) fn from_categories(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Records for `key`, or an empty slice when the catalog has no such
    /// category.
    pub fn category(&self, key: &CategoryKey) -> &[Institution] {
        self.categories
            .iter()
            .find(|category| &category.key == key)
            .map(|category| category.institutions.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, key: &CategoryKey) -> bool {
        self.categories.iter().any(|category| &category.key == key)
    }

    /// Category keys in source order.
    pub fn keys(&self) -> impl Iterator<Item = &CategoryKey> {
        self.categories.iter().map(|category| &category.key)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Filtered records of one category; an unknown key yields nothing.
    pub fn search(&self, key: &CategoryKey, query: &str) -> Vec<&Institution> {
        filter::filter(self.category(key), query)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of records across every category.
    pub fn institution_count(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.institutions.len())
            .sum()
    }
}
