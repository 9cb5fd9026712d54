//! Runtime settings resolved from flags, environment, and defaults.
//!
//! Precedence is always explicit flag, then environment variable, then the
//! built-in default. Empty environment values count as unset.

use crate::resource::CatalogSource;
use std::env;
use std::path::PathBuf;

/// Environment variable naming an override catalog file.
pub const CATALOG_ENV: &str = "EDUFINDER_CATALOG";
/// Environment variable holding the default log filter.
pub const LOG_ENV: &str = "EDUFINDER_LOG";

const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settings {
    pub catalog: CatalogSource,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog: CatalogSource::Bundled,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Settings {
    /// Resolve settings against the process environment.
    pub fn resolve(catalog_flag: Option<PathBuf>, log_level_flag: Option<String>) -> Self {
        Self::resolve_with(catalog_flag, log_level_flag, env_non_empty)
    }

    /// Resolve settings with an injectable environment lookup.
    pub fn resolve_with(
        catalog_flag: Option<PathBuf>,
        log_level_flag: Option<String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let catalog = catalog_flag
            .or_else(|| lookup(CATALOG_ENV).map(PathBuf::from))
            .map(CatalogSource::File)
            .unwrap_or_default();
        let log_level = log_level_flag
            .filter(|level| !level.trim().is_empty())
            .or_else(|| lookup(LOG_ENV))
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        Self { catalog, log_level }
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}
