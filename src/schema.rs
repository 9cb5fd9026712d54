//! JSON Schema lint for catalog documents.
//!
//! The loader is the authority on what a valid catalog is; this schema is a
//! second, declarative description of the same shape so catalog files can be
//! checked by `edufinder validate` and by tests, and by external tooling that
//! speaks JSON Schema.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Schema embedded alongside the bundled catalog.
pub const BUNDLED_SCHEMA: &str = include_str!("../schema/institution_catalog.schema.json");

/// Compiled catalog schema.
pub struct CatalogSchema {
    compiled: JSONSchema,
    title: String,
}

impl CatalogSchema {
    /// Compile the schema shipped with the crate.
    pub fn bundled() -> Result<Self> {
        let raw: Value =
            serde_json::from_str(BUNDLED_SCHEMA).context("parsing bundled catalog schema")?;
        Self::compile(&raw).context("compiling bundled catalog schema")
    }

    /// Compile a schema stored on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("opening schema {}", path.display()))?;
        let raw: Value = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing schema {}", path.display()))?;
        Self::compile(&raw).with_context(|| format!("compiling schema {}", path.display()))
    }

    fn compile(raw: &Value) -> Result<Self> {
        let title = raw
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or("catalog schema")
            .to_string();
        // Compile errors borrow the schema value; render them before it drops.
        let compiled = JSONSchema::compile(raw).map_err(|err| anyhow!("{err}"))?;
        Ok(Self { compiled, title })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Validate a parsed document, reporting every violation at once.
    pub fn validate(&self, value: &Value) -> Result<()> {
        if let Err(errors) = self.compiled.validate(value) {
            let details = errors
                .map(|err| format!("{}: {}", display_path(&err.instance_path.to_string()), err))
                .collect::<Vec<_>>()
                .join("\n");
            bail!("catalog failed {} validation:\n{}", self.title, details);
        }
        Ok(())
    }

    /// Parse and validate catalog text.
    pub fn validate_text(&self, text: &str) -> Result<()> {
        let value: Value = serde_json::from_str(text).context("parsing catalog")?;
        self.validate(&value)
    }
}

fn display_path(pointer: &str) -> &str {
    if pointer.is_empty() { "/" } else { pointer }
}
