//! The persisted default alias, activated when a new shell session starts.

use crate::error::Result;
use crate::registry::write_atomic;
use std::path::{Path, PathBuf};

/// Handle to the single-line default-alias file.
#[derive(Debug, Clone)]
pub struct DefaultAlias {
    path: PathBuf,
}

impl DefaultAlias {
    /// Default alias stored at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored alias, or `None` if the file is missing or blank.
    pub fn get(&self) -> Option<String> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        let alias = content.lines().next().unwrap_or("").trim();
        (!alias.is_empty()).then(|| alias.to_string())
    }

    /// Overwrite the stored alias.
    pub fn set(&self, alias: &str) -> Result<()> {
        let staging = self.path.parent().unwrap_or_else(|| Path::new("."));
        write_atomic(&self.path, staging, format!("{alias}\n").as_bytes())
    }
}
