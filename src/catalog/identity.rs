use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for one category of the catalog (e.g.
/// `public_universities`).
///
/// The set of keys is whatever the source data declares; nothing here pins it
/// to a fixed enumeration, so unknown keys survive a load untouched.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryKey(pub String);

impl CategoryKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CategoryKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for CategoryKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_key_serializes_as_plain_string() {
        let key = CategoryKey::from("public_tvet_colleges");
        let serialized = serde_json::to_string(&key).unwrap();
        assert_eq!(serialized, "\"public_tvet_colleges\"");
        let parsed: CategoryKey = serde_json::from_str(&serialized).unwrap();
        assert_eq!(parsed, key);
        assert_eq!(parsed.to_string(), "public_tvet_colleges");
    }
}
