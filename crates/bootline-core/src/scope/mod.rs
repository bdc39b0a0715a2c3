//! Isolated loading scopes.
//!
//! A scope owns the resource list assembled for a launch and the entry points
//! registered in it. Names it does not know are looked up in its parent.
pub mod ambient;

use std::{fmt, sync::Arc};

use crate::{
    classpath::ClassPath,
    entry::{EntryPoint, EntryTable},
};

/// Named resolution scope with parent delegation.
pub struct LoadingScope {
    name: String,
    resources: ClassPath,
    entries: EntryTable,
    parent: Option<Arc<LoadingScope>>,
}

impl LoadingScope {
    pub fn builder(name: impl Into<String>) -> LoadingScopeBuilder {
        LoadingScopeBuilder {
            name: name.into(),
            resources: ClassPath::default(),
            entries: EntryTable::default(),
            parent: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resources this scope was built over.
    pub fn resources(&self) -> &ClassPath {
        &self.resources
    }

    /// Entry points registered directly in this scope.
    pub fn entries(&self) -> &EntryTable {
        &self.entries
    }

    pub fn parent(&self) -> Option<&Arc<LoadingScope>> {
        self.parent.as_ref()
    }

    /// Resolve an entry point: this scope first, then each parent in turn.
    pub fn resolve(&self, name: &str) -> Option<Arc<EntryPoint>> {
        match self.entries.get(name) {
            Some(entry) => Some(Arc::clone(entry)),
            None => self.parent.as_ref()?.resolve(name),
        }
    }
}

impl fmt::Display for LoadingScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} scope: {}", self.name, self.resources)
    }
}

impl fmt::Debug for LoadingScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadingScope")
            .field("name", &self.name)
            .field("resources", &self.resources.len())
            .field("entries", &self.entries.names().collect::<Vec<_>>())
            .field("parent", &self.parent.as_ref().map(|p| p.name()))
            .finish()
    }
}

/// Builder for [`LoadingScope`].
pub struct LoadingScopeBuilder {
    name: String,
    resources: ClassPath,
    entries: EntryTable,
    parent: Option<Arc<LoadingScope>>,
}

impl LoadingScopeBuilder {
    pub fn with_resources(mut self, resources: ClassPath) -> Self {
        self.resources = resources;
        self
    }

    pub fn with_entries(mut self, entries: EntryTable) -> Self {
        self.entries = entries;
        self
    }

    pub fn with_parent(mut self, parent: Arc<LoadingScope>) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn build(self) -> Arc<LoadingScope> {
        Arc::new(LoadingScope {
            name: self.name,
            resources: self.resources,
            entries: self.entries,
            parent: self.parent,
        })
    }
}
