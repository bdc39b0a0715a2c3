use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Assignment;

/// Ordered string properties.
///
/// Backing store of the process-wide settings, also handed out as a snapshot.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(BTreeMap<String, String>);

impl Properties {
    /// Create an empty set of properties.
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    /// Insert or overwrite a property.
    pub fn set<K, V>(&mut self, key: K, value: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Remove a property, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Apply an assignment: set it, or remove the key when the value is empty.
    pub fn apply(&mut self, assignment: &Assignment) {
        if assignment.is_clear() {
            self.remove(assignment.key());
        } else {
            self.set(assignment.key(), assignment.value());
        }
    }

    /// Iterate through all properties as `(&str, &str)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
