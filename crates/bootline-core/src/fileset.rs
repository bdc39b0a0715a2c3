//! Expansion of a [`PathSpec`] into the concrete paths it names.
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use bootline_model::{PathSpec, is_wildcard};
use tracing::trace;

use crate::pattern::{CaseSensitivity, Pattern};

/// Expand `spec` using the host case convention.
///
/// See [`expand_with`].
pub fn expand(spec: &PathSpec) -> io::Result<Vec<PathBuf>> {
    expand_with(spec, CaseSensitivity::host())
}

/// Expand `spec` into the paths it names.
///
/// - A literal final segment yields the path itself, existing or not.
/// - A pattern lists the parent directory (the working directory when the
///   spec has no parent) and keeps every entry whose name matches. Results
///   are sorted by name and keep the pattern's parent as prefix.
///
/// Fails when the parent of a pattern cannot be listed.
pub fn expand_with(spec: &PathSpec, case: CaseSensitivity) -> io::Result<Vec<PathBuf>> {
    let Some(segment) = spec.last_segment().filter(|s| is_wildcard(s)) else {
        return Ok(vec![spec.path().to_path_buf()]);
    };

    let pattern = Pattern::new(segment, case);
    let dir = spec.parent().unwrap_or(Path::new("."));

    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let name = entry?.file_name();
        if pattern.matches(&name.to_string_lossy()) {
            names.push(name);
        }
    }
    names.sort();

    trace!(spec = %spec, dir = %dir.display(), matched = names.len(), "expanded path spec");

    Ok(names
        .into_iter()
        .map(|name| match spec.parent() {
            Some(parent) => parent.join(name),
            None => PathBuf::from(name),
        })
        .collect())
}
