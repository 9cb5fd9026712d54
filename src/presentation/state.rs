//! Immutable application state for a catalog browsing session.
//!
//! Every transition consumes the current snapshot and returns the next one,
//! so a front end only ever renders a complete, consistent state. The catalog
//! is shared behind an `Arc` and never mutated.

use crate::catalog::{Catalog, CategoryKey, Institution};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct AppState {
    catalog: Option<Arc<Catalog>>,
    error: Option<String>,
    loading: bool,
    query: String,
    category: CategoryKey,
}

impl AppState {
    /// Starting snapshot: loading, empty query, `category` selected.
    pub fn new(category: CategoryKey) -> Self {
        Self {
            catalog: None,
            error: None,
            loading: true,
            query: String::new(),
            category,
        }
    }

    pub fn load_succeeded(self, catalog: Arc<Catalog>) -> Self {
        Self {
            catalog: Some(catalog),
            error: None,
            loading: false,
            ..self
        }
    }

    /// Record a failed load. Any previously loaded catalog is dropped; the
    /// session never shows a partial catalog.
    pub fn load_failed(self, message: impl Into<String>) -> Self {
        Self {
            catalog: None,
            error: Some(message.into()),
            loading: false,
            ..self
        }
    }

    pub fn query_changed(self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..self
        }
    }

    pub fn category_selected(self, category: CategoryKey) -> Self {
        Self { category, ..self }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> &CategoryKey {
        &self.category
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_deref()
    }

    /// Records to display for the current category and query.
    pub fn visible(&self) -> Vec<&Institution> {
        match &self.catalog {
            Some(catalog) => catalog.search(&self.category, &self.query),
            None => Vec::new(),
        }
    }
}
