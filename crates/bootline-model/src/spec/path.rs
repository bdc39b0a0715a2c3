use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::{ModelError, ModelResult};

/// Returns `true` if `segment` contains a `*` or `?` wildcard.
pub fn is_wildcard(segment: &str) -> bool {
    segment.contains(['*', '?'])
}

/// A path whose final segment may be a wildcard pattern.
///
/// Every segment before the last one is a literal directory name.
/// `lib/*.jar` expands to the archives of `lib`, while `lib/a.jar` names one
/// file whether or not it exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathSpec {
    path: PathBuf,
}

impl PathSpec {
    /// Build a path spec from a raw path.
    ///
    /// An empty path has no segments and is rejected.
    pub fn new(path: impl Into<PathBuf>) -> ModelResult<Self> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(ModelError::InvalidPathSpec("path has no segments".into()));
        }
        Ok(Self { path })
    }

    /// The raw path as given.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory part in front of the final segment.
    ///
    /// `None` for a bare name such as `*.jar`, which resolves against the
    /// working directory.
    pub fn parent(&self) -> Option<&Path> {
        self.path.parent().filter(|p| !p.as_os_str().is_empty())
    }

    /// Final segment, if it is a plain name representable as UTF-8.
    pub fn last_segment(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }

    /// Returns `true` when the final segment is a pattern.
    pub fn is_pattern(&self) -> bool {
        self.last_segment().is_some_and(is_wildcard)
    }
}

impl FromStr for PathSpec {
    type Err = ModelError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for PathSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
