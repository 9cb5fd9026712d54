//! Parse catalog text into a validated [`Catalog`].
//!
//! The loader is strict: one malformed record rejects the whole document, so
//! authoring mistakes in the bundled data surface in tests instead of as
//! silently missing entries. It takes text rather than a path so callers own
//! resource acquisition.

use crate::catalog::identity::CategoryKey;
use crate::catalog::model::{Catalog, Category, Institution};
use crate::error::LoadError;
use serde_json::{Map, Value};
use tracing::debug;

const NAME: &str = "name";
const TYPE: &str = "type";
const WEBSITE: &str = "website";

/// Parse and validate catalog text.
///
/// Category order follows the source object; record order within each
/// category is preserved exactly.
pub fn load(text: &str) -> Result<Catalog, LoadError> {
    let root: Value = serde_json::from_str(text)?;
    let entries = match root {
        Value::Object(entries) => entries,
        other => {
            return Err(LoadError::NotAnObject {
                found: value_kind(&other),
            });
        }
    };

    let mut categories = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(LoadError::CategoryNotArray {
                    category: key,
                    found: value_kind(&other),
                });
            }
        };
        let institutions = items
            .iter()
            .enumerate()
            .map(|(index, item)| parse_institution(&key, index, item))
            .collect::<Result<Vec<_>, _>>()?;
        categories.push(Category {
            key: CategoryKey(key),
            institutions,
        });
    }

    let catalog = Catalog::from_categories(categories);
    debug!(
        categories = catalog.categories().len(),
        institutions = catalog.institution_count(),
        "loaded institution catalog"
    );
    Ok(catalog)
}

fn parse_institution(category: &str, index: usize, item: &Value) -> Result<Institution, LoadError> {
    let Value::Object(fields) = item else {
        return Err(LoadError::RecordNotObject {
            category: category.to_string(),
            index,
            found: value_kind(item),
        });
    };

    let name = required_text(fields, category, index, NAME)?;
    let kind = required_text(fields, category, index, TYPE)?;
    let website = match fields.get(WEBSITE) {
        None | Some(Value::Null) => None,
        Some(Value::String(website)) => Some(website.clone()),
        Some(other) => {
            return Err(LoadError::FieldNotText {
                category: category.to_string(),
                index,
                field: WEBSITE,
                found: value_kind(other),
            });
        }
    };

    Ok(Institution {
        name,
        kind,
        website,
    })
}

fn required_text(
    fields: &Map<String, Value>,
    category: &str,
    index: usize,
    field: &'static str,
) -> Result<String, LoadError> {
    match fields.get(field) {
        Some(Value::String(text)) if text.is_empty() => Err(LoadError::EmptyField {
            category: category.to_string(),
            index,
            field,
        }),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => Err(LoadError::FieldNotText {
            category: category.to_string(),
            index,
            field,
            found: value_kind(other),
        }),
        None => Err(LoadError::MissingField {
            category: category.to_string(),
            index,
            field,
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
