//! Alias registry: the durable `alias -> install path` mapping.
//!
//! The backing file holds one `alias|path` record per line. Every mutation
//! reads the whole file, edits it in memory and replaces it through a
//! sibling temporary file and a single rename, so a shell reading the
//! registry concurrently never sees a half-written file. Concurrent writers
//! are not serialized: the last rename wins.
//!
//! Alias matching is case-sensitive on every platform.

use crate::error::{Result, SwitchError};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Field separator in the registry file. Not escapable.
pub const SEPARATOR: char = '|';

/// One registered installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    /// Short user-chosen name.
    pub alias: String,
    /// Absolute path to the installation root.
    pub install_path: String,
}

impl AliasEntry {
    /// Build an entry from its two fields.
    pub fn new(alias: impl Into<String>, install_path: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            install_path: install_path.into(),
        }
    }

    /// Parse one registry line. Blank lines and lines without a separator
    /// yield `None`.
    fn parse_line(line: &str) -> Option<Self> {
        let (alias, path) = line.split_once(SEPARATOR)?;
        let alias = alias.trim();
        if alias.is_empty() {
            return None;
        }
        Some(Self::new(alias, path.trim()))
    }
}

/// Handle to the registry file. Owns no data; every call re-reads the file.
#[derive(Debug, Clone)]
pub struct Registry {
    path: PathBuf,
    staging_dir: PathBuf,
}

impl Registry {
    /// Registry stored at `path`, staging writes next to it.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let staging_dir = path
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        Self { path, staging_dir }
    }

    /// Stage temporary files in `dir` instead of the registry's directory.
    /// `dir` must live on the same volume for the final rename to succeed.
    pub fn with_staging_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.staging_dir = dir.into();
        self
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every entry in file order. A missing file is an empty registry;
    /// any other read failure is an error so that a later write cannot
    /// replace entries it never saw.
    pub fn load(&self) -> Result<Vec<AliasEntry>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(content.lines().filter_map(AliasEntry::parse_line).collect()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(source) => Err(SwitchError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Find the entry for `alias`.
    pub fn lookup(&self, alias: &str) -> Result<AliasEntry> {
        self.load()?
            .into_iter()
            .find(|entry| entry.alias == alias)
            .ok_or_else(|| SwitchError::UnknownAlias(alias.to_string()))
    }

    /// Insert `entry`, replacing any entry with the same alias.
    pub fn upsert(&self, entry: AliasEntry) -> Result<()> {
        let mut entries = self.load()?;
        entries.retain(|e| e.alias != entry.alias);
        tracing::debug!(alias = %entry.alias, path = %entry.install_path, "registering alias");
        entries.push(entry);
        self.write(&entries)
    }

    /// Drop `alias`. Removing an unknown alias succeeds without touching the file.
    pub fn remove(&self, alias: &str) -> Result<()> {
        let mut entries = self.load()?;
        let before = entries.len();
        entries.retain(|e| e.alias != alias);
        if entries.len() == before {
            return Ok(());
        }
        tracing::debug!(alias, "removing alias");
        self.write(&entries)
    }

    /// Entries sorted by alias, for presentation.
    pub fn list(&self) -> Result<Vec<AliasEntry>> {
        let mut entries = self.load()?;
        entries.sort_by(|a, b| a.alias.cmp(&b.alias));
        Ok(entries)
    }

    /// Replace the file with `entries` via temp file + rename.
    fn write(&self, entries: &[AliasEntry]) -> Result<()> {
        let mut content = String::new();
        for entry in entries {
            content.push_str(&entry.alias);
            content.push(SEPARATOR);
            content.push_str(&entry.install_path);
            content.push('\n');
        }
        write_atomic(&self.path, &self.staging_dir, content.as_bytes())
    }
}

/// Write `content` to a fresh file in `staging_dir`, then rename it over
/// `target`. On any failure `target` is left as it was.
pub(crate) fn write_atomic(target: &Path, staging_dir: &Path, content: &[u8]) -> Result<()> {
    let mut tmp =
        NamedTempFile::new_in(staging_dir).map_err(|e| SwitchError::persist(staging_dir, e))?;
    tmp.write_all(content)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| SwitchError::persist(tmp.path(), e))?;
    tmp.persist(target)
        .map_err(|e| SwitchError::persist(target, e.error))?;
    tracing::debug!(path = %target.display(), bytes = content.len(), "replaced file");
    Ok(())
}
