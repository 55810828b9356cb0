//! Project marker lookup for auto-switch.

use std::path::{Path, PathBuf};

/// Upper bound on ancestors visited, in case of a cyclic or corrupt mount.
pub const MAX_DEPTH: usize = 256;

/// First `name` file found in `start` or any of its ancestors.
pub fn find_marker(start: &Path, name: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .take(MAX_DEPTH)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Trimmed alias named by the nearest marker, or `None` if there is no
/// marker. An unreadable marker counts as naming the empty alias.
pub fn marker_alias(start: &Path, name: &str) -> Option<String> {
    let path = find_marker(start, name)?;
    let content = std::fs::read_to_string(&path).unwrap_or_else(|err| {
        tracing::trace!(path = %path.display(), error = %err, "unreadable marker");
        String::new()
    });
    Some(content.trim().to_string())
}
