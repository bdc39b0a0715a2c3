use std::{collections::BTreeMap, sync::Arc};

use tracing::debug;

use crate::{entry::EntryPoint, error::LaunchError};

/// Entry points known to one loading scope, keyed by name.
#[derive(Debug, Default, Clone)]
pub struct EntryTable {
    entries: BTreeMap<String, Arc<EntryPoint>>,
}

impl EntryTable {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entry point.
    ///
    /// A name can be registered once per table; shadowing a parent scope's
    /// entry is done by registering it in the child scope instead.
    pub fn register(&mut self, entry: EntryPoint) -> Result<(), LaunchError> {
        if self.entries.contains_key(entry.name()) {
            return Err(LaunchError::DuplicateEntry(entry.name().to_string()));
        }
        debug!(entry = entry.name(), "entry point registered");
        self.entries.insert(entry.name().to_string(), Arc::new(entry));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Arc<EntryPoint>> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
