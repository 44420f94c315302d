//! Display names for factor ids

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Human-readable labels keyed by factor id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameTranslations {
    labels: HashMap<String, String>,
}

impl NameTranslations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, label: impl Into<String>) {
        self.labels.insert(id.into(), label.into());
    }

    /// Label of a factor, or the id itself when untranslated
    pub fn label<'a>(&'a self, id: &'a str) -> &'a str {
        self.labels.get(id).map(String::as_str).unwrap_or(id)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for NameTranslations {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            labels: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_falls_back_to_id() {
        let t: NameTranslations = [("r_free", "R-free")].into_iter().collect();
        assert_eq!(t.label("r_free"), "R-free");
        assert_eq!(t.label("clashscore"), "clashscore");
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn test_deserialize_plain_map() {
        let t: NameTranslations =
            serde_json::from_str(r#"{"resolution": "Resolution (Å)"}"#).unwrap();
        assert_eq!(t.label("resolution"), "Resolution (Å)");
    }
}
