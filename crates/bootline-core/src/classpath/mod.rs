//! Assembly of the ordered, duplicate-free resource list a launch scope is
//! built over.
mod layout;
pub use layout::HomeLayout;

use std::{
    collections::HashSet,
    fmt, fs, io,
    path::{self, Path, PathBuf},
};

use bootline_model::PathSpec;
use tracing::{debug, instrument, trace};

use crate::{
    fileset,
    settings::{PATH_LIST_SEPARATOR, Settings},
};

/// Ordered resource list with first-occurrence de-duplication.
///
/// Entries are stored resolved: canonical when the path exists, absolute
/// otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassPath {
    entries: Vec<PathBuf>,
    seen: HashSet<PathBuf>,
}

impl ClassPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand every spec in order and collect the results.
    ///
    /// Fails on the first spec whose directory cannot be listed.
    #[instrument(level = "debug", skip_all)]
    pub fn assemble<'a, I>(specs: I) -> io::Result<Self>
    where
        I: IntoIterator<Item = &'a PathSpec>,
    {
        let mut cp = Self::new();
        for spec in specs {
            cp.extend_spec(spec)?;
        }
        debug!(entries = cp.len(), "class path assembled");
        Ok(cp)
    }

    /// Expand `spec` and append its paths, returning how many were new.
    pub fn extend_spec(&mut self, spec: &PathSpec) -> io::Result<usize> {
        let mut added = 0;
        for path in fileset::expand(spec)? {
            if self.push(&path)? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Append one path unless its resolved form is already present.
    pub fn push(&mut self, path: &Path) -> io::Result<bool> {
        let resolved = resolve(path)?;
        if !self.seen.insert(resolved.clone()) {
            trace!(path = %resolved.display(), "duplicate class path entry skipped");
            return Ok(false);
        }
        self.entries.push(resolved);
        Ok(true)
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries joined with the platform path-list separator.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, p) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push(PATH_LIST_SEPARATOR);
            }
            out.push_str(&p.to_string_lossy());
        }
        out
    }

    /// Append the rendered list to the path list stored under `key`.
    pub fn append_to(&self, settings: &dyn Settings, key: &str) {
        settings.append_path_list(key, &self.render());
    }
}

impl fmt::Display for ClassPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Canonical form when the path can be resolved, absolute form otherwise.
fn resolve(p: &Path) -> io::Result<PathBuf> {
    fs::canonicalize(p).or_else(|_| path::absolute(p))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::settings::SystemProperties;

    fn spec(p: PathBuf) -> PathSpec {
        PathSpec::new(p).unwrap()
    }

    #[test]
    fn assemble_keeps_spec_order_and_drops_duplicates() {
        let tmp = tempfile::tempdir().unwrap();
        let root = fs::canonicalize(tmp.path()).unwrap();
        let lib = root.join("lib");
        fs::create_dir(&lib).unwrap();
        fs::write(lib.join("a.jar"), b"").unwrap();
        fs::write(lib.join("b.jar"), b"").unwrap();

        let specs = [
            spec(lib.join("b.jar")),
            spec(lib.join("*.jar")),
            spec(root.join("lib").join(".").join("a.jar")),
        ];
        let cp = ClassPath::assemble(&specs).unwrap();

        assert_eq!(cp.entries(), [lib.join("b.jar"), lib.join("a.jar")]);
    }

    #[test]
    fn missing_literal_is_kept_absolute() {
        let tmp = tempfile::tempdir().unwrap();
        let root = fs::canonicalize(tmp.path()).unwrap();

        let mut cp = ClassPath::new();
        assert!(cp.push(&root.join("later.jar")).unwrap());
        assert!(!cp.push(&root.join("later.jar")).unwrap());
        assert_eq!(cp.entries(), [root.join("later.jar")]);
    }

    #[test]
    fn literal_below_a_regular_file_is_kept() {
        let tmp = tempfile::tempdir().unwrap();
        let root = fs::canonicalize(tmp.path()).unwrap();
        fs::write(root.join("a.jar"), b"").unwrap();
        let below = root.join("a.jar").join("later.jar");

        let cp = ClassPath::assemble(&[spec(below.clone())]).unwrap();

        assert_eq!(cp.entries(), [below]);
    }

    #[test]
    fn relative_entries_become_absolute() {
        let mut cp = ClassPath::new();
        cp.push(Path::new("does-not-exist.jar")).unwrap();
        assert!(cp.entries()[0].is_absolute());
    }

    #[test]
    fn unlistable_directory_fails_assembly() {
        let tmp = tempfile::tempdir().unwrap();
        let specs = [spec(tmp.path().join("missing").join("*.jar"))];
        let err = ClassPath::assemble(&specs).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn render_and_append() {
        let tmp = tempfile::tempdir().unwrap();
        let root = fs::canonicalize(tmp.path()).unwrap();
        let mut cp = ClassPath::new();
        cp.push(&root.join("a.jar")).unwrap();
        cp.push(&root.join("b.jar")).unwrap();

        let expected = format!(
            "{}{PATH_LIST_SEPARATOR}{}",
            root.join("a.jar").display(),
            root.join("b.jar").display()
        );
        assert_eq!(cp.render(), expected);
        assert_eq!(cp.to_string(), expected);

        let settings = SystemProperties::new();
        settings.set("cp", "boot.jar");
        cp.append_to(&settings, "cp");
        assert_eq!(
            settings.get("cp").unwrap(),
            format!("boot.jar{PATH_LIST_SEPARATOR}{expected}")
        );
    }
}
