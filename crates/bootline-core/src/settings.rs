//! Process-wide string settings, the target of `-Dkey=value`.
use std::sync::{PoisonError, RwLock};

use bootline_model::{Assignment, Properties};

/// Key/value settings visible to the whole process.
pub trait Settings: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);

    fn clear(&self, key: &str);

    /// Set the assignment, or clear the key when its value is empty.
    fn apply(&self, assignment: &Assignment) {
        if assignment.is_clear() {
            self.clear(assignment.key());
        } else {
            self.set(assignment.key(), assignment.value());
        }
    }

    /// Append `list` to the path list stored under `key`, separated by the
    /// platform path-list separator.
    fn append_path_list(&self, key: &str, list: &str) {
        if list.is_empty() {
            return;
        }
        match self.get(key).filter(|v| !v.is_empty()) {
            Some(existing) => self.set(key, &format!("{existing}{PATH_LIST_SEPARATOR}{list}")),
            None => self.set(key, list),
        }
    }
}

/// Separator between entries of a rendered path list.
pub const PATH_LIST_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

static SYSTEM_PROPERTIES: SystemProperties = SystemProperties::new();

/// The process-global settings instance.
pub fn system_properties() -> &'static SystemProperties {
    &SYSTEM_PROPERTIES
}

/// Lock-protected [`Properties`].
///
/// [`system_properties`] is the shared instance; private instances are
/// for embedding and tests.
#[derive(Debug, Default)]
pub struct SystemProperties {
    inner: RwLock<Properties>,
}

impl SystemProperties {
    pub const fn new() -> Self {
        Self {
            inner: RwLock::new(Properties::new()),
        }
    }

    /// Copy of every property currently set.
    pub fn snapshot(&self) -> Properties {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Settings for SystemProperties {
    fn get(&self, key: &str) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .map(str::to_owned)
    }

    fn set(&self, key: &str, value: &str) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set(key, value);
    }

    fn clear(&self, key: &str) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }

    fn apply(&self, assignment: &Assignment) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .apply(assignment);
    }

    fn append_path_list(&self, key: &str, list: &str) {
        if list.is_empty() {
            return;
        }
        let mut props = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let joined = match props.get(key).filter(|v| !v.is_empty()) {
            Some(existing) => format!("{existing}{PATH_LIST_SEPARATOR}{list}"),
            None => list.to_owned(),
        };
        props.set(key, joined);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_clear() {
        let props = SystemProperties::new();
        props.set("favourite.fruit", "apples");
        assert_eq!(props.get("favourite.fruit").as_deref(), Some("apples"));

        props.clear("favourite.fruit");
        assert!(props.get("favourite.fruit").is_none());
    }

    #[test]
    fn apply_clears_on_empty_value() {
        let props = SystemProperties::new();
        props.apply(&Assignment::new("k", "v").unwrap());
        assert_eq!(props.get("k").as_deref(), Some("v"));
        props.apply(&Assignment::new("k", "").unwrap());
        assert!(props.get("k").is_none());
    }

    #[test]
    fn append_path_list_joins_with_separator() {
        let props = SystemProperties::new();
        props.append_path_list("cp", "a");
        props.append_path_list("cp", "");
        props.append_path_list("cp", "b");
        assert_eq!(
            props.get("cp").unwrap(),
            format!("a{PATH_LIST_SEPARATOR}b")
        );
    }

    #[test]
    fn snapshot_is_detached() {
        let props = SystemProperties::new();
        props.set("a", "1");
        let snap = props.snapshot();
        props.set("a", "2");
        assert_eq!(snap.get("a"), Some("1"));
    }

    #[test]
    fn global_instance_is_shared() {
        system_properties().set("bootline.test.settings.shared", "yes");
        assert_eq!(
            system_properties().get("bootline.test.settings.shared").as_deref(),
            Some("yes")
        );
        system_properties().clear("bootline.test.settings.shared");
    }
}
