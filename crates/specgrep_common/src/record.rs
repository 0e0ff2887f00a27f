//! Ordered per-category record of collected spec fields.
//!
//! Keys are unique and keep insertion order, which is also the order the
//! device queries ran in. An absent value (the query missed or the pattern
//! did not match) is stored as `None` and serializes to JSON `null`.

use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, Default)]
pub struct SpecRecord {
    category: String,
    fields: Vec<(String, Option<String>)>,
}

impl SpecRecord {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            fields: Vec::new(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Append a field. Re-inserting an existing key replaces its value in
    /// place, keeping the original position.
    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        let key = key.into();
        if let Some(slot) = self.fields.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.fields.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&Option<String>> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for SpecRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
