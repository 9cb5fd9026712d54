use crate::catalog::CategoryKey;

/// Tabs shown by default, in display order.
const DEFAULT_LABELS: &[(&str, &str)] = &[
    ("public_universities", "Public Universities"),
    ("private_higher_education", "Private Higher Education"),
    ("public_tvet_colleges", "Public TVET Colleges"),
    ("private_colleges", "Private Colleges"),
];

/// Fixed two-way table between category keys and their display labels.
///
/// The catalog never depends on this table: a key without a label is shown
/// as the raw key, and a label whose key is missing from the data resolves
/// to an empty category.
#[derive(Clone, Debug)]
pub struct CategoryLabels {
    entries: Vec<(CategoryKey, String)>,
}

impl Default for CategoryLabels {
    fn default() -> Self {
        Self::new(DEFAULT_LABELS.iter().copied())
    }
}

impl CategoryLabels {
    pub fn new<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, label)| (CategoryKey::from(key), label.to_string()))
                .collect(),
        }
    }

    /// Label for `key`, falling back to the key itself.
    pub fn label_for<'a>(&'a self, key: &'a CategoryKey) -> &'a str {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, label)| label.as_str())
            .unwrap_or(key.as_str())
    }

    /// Key whose label equals `label`, ignoring case.
    pub fn key_for(&self, label: &str) -> Option<&CategoryKey> {
        self.entries
            .iter()
            .find(|(_, candidate)| candidate.eq_ignore_ascii_case(label.trim()))
            .map(|(key, _)| key)
    }

    /// Accept either a label or a raw key, as typed by a user.
    pub fn resolve(&self, input: &str) -> CategoryKey {
        self.key_for(input)
            .cloned()
            .unwrap_or_else(|| CategoryKey::from(input.trim()))
    }

    /// First tab, used as the initial selection.
    pub fn first_key(&self) -> CategoryKey {
        self.entries
            .first()
            .map(|(key, _)| key.clone())
            .unwrap_or_else(|| CategoryKey::from(DEFAULT_LABELS[0].0))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CategoryKey, &str)> {
        self.entries.iter().map(|(key, label)| (key, label.as_str()))
    }
}
