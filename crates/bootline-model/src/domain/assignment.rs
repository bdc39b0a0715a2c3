use serde::{Deserialize, Serialize};

use crate::{ModelError, ModelResult};

/// One `-Dkey=value` assignment taken off the command line.
///
/// An empty value means the property is cleared rather than set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Property name, never empty.
    key: String,
    /// Property value, possibly empty.
    value: String,
}

impl Assignment {
    /// Create a new assignment.
    ///
    /// Fails when `key` is empty.
    pub fn new<K, V>(key: K, value: V) -> ModelResult<Self>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        if key.is_empty() {
            return Err(ModelError::InvalidAssignment("empty key".into()));
        }
        Ok(Self {
            key,
            value: value.into(),
        })
    }

    /// Get the key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns `true` when applying this assignment clears the property.
    pub fn is_clear(&self) -> bool {
        self.value.is_empty()
    }
}
