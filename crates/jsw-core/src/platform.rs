//! Platform adapter: the only seam through which session logic touches
//! environment variables.
//!
//! The CLI snapshots the real process environment into an [`EnvBlock`] at
//! startup, runs one operation against it, and then renders
//! [`EnvBlock::changes`] for the calling shell. Tests build blocks from
//! literal pairs.

use std::collections::BTreeMap;

/// Host conventions that differ between Unix-like systems and Windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformKind {
    /// `:` separated `PATH`, executables without extension.
    Unix,
    /// `;` separated `Path`, executables end in `.exe`.
    Windows,
}

impl PlatformKind {
    /// The kind this binary was compiled for.
    pub const fn host() -> Self {
        if cfg!(windows) { Self::Windows } else { Self::Unix }
    }

    /// Separator between search path entries.
    pub const fn path_separator(self) -> char {
        match self {
            Self::Unix => ':',
            Self::Windows => ';',
        }
    }

    /// Name of the executable search path variable.
    pub const fn search_path_var(self) -> &'static str {
        match self {
            Self::Unix => "PATH",
            Self::Windows => "Path",
        }
    }

    /// File name of `executable` on this platform.
    pub fn executable_name(self, executable: &str) -> String {
        match self {
            Self::Unix => executable.to_string(),
            Self::Windows => format!("{executable}.exe"),
        }
    }

    /// Whether two variable names refer to the same variable. Windows
    /// names are case-insensitive.
    pub fn same_var(self, a: &str, b: &str) -> bool {
        match self {
            Self::Unix => a == b,
            Self::Windows => a.eq_ignore_ascii_case(b),
        }
    }
}

/// Environment access plus the platform facts session logic depends on.
pub trait Platform {
    /// Current value of `key`, if set.
    fn var(&self, key: &str) -> Option<String>;

    /// Set `key` to `value`.
    fn set_var(&mut self, key: &str, value: &str);

    /// Unset `key`.
    fn remove_var(&mut self, key: &str);

    /// Separator between search path entries.
    fn path_separator(&self) -> char;

    /// Name of the search path variable (`PATH`/`Path`).
    fn search_path_var(&self) -> &str;

    /// Subdirectory of an install root holding executables.
    fn bin_dir_name(&self) -> &str {
        "bin"
    }

    /// File name of `executable` on this platform.
    fn executable_name(&self, executable: &str) -> String;
}

/// A single recorded mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvChange {
    /// The variable now has this value.
    Set(String, String),
    /// The variable is no longer defined.
    Unset(String),
}

/// In-memory environment snapshot that remembers what changed.
///
/// Names are matched with [`PlatformKind::same_var`], and an existing
/// variable keeps the spelling it was seeded with, so on Windows a host
/// `PATH` is read and rewritten when asked for `Path`.
#[derive(Debug, Clone)]
pub struct EnvBlock {
    kind: PlatformKind,
    initial: BTreeMap<String, String>,
    current: BTreeMap<String, String>,
}

impl EnvBlock {
    /// Block seeded from `vars`.
    pub fn new<I, K, V>(kind: PlatformKind, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let initial: BTreeMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            kind,
            current: initial.clone(),
            initial,
        }
    }

    /// Snapshot of the running process. Non-UTF-8 values are decoded lossily.
    pub fn from_process() -> Self {
        Self::new(
            PlatformKind::host(),
            std::env::vars_os().map(|(k, v)| {
                (
                    k.to_string_lossy().into_owned(),
                    v.to_string_lossy().into_owned(),
                )
            }),
        )
    }

    /// The platform conventions this block follows.
    pub fn kind(&self) -> PlatformKind {
        self.kind
    }

    /// Net differences from the initial snapshot, ordered by name.
    pub fn changes(&self) -> Vec<EnvChange> {
        let mut changes = Vec::new();
        for (key, value) in &self.current {
            if self.initial.get(key) != Some(value) {
                changes.push(EnvChange::Set(key.clone(), value.clone()));
            }
        }
        for key in self.initial.keys() {
            if !self.current.contains_key(key) {
                changes.push(EnvChange::Unset(key.clone()));
            }
        }
        changes.sort_by(|a, b| change_key(a).cmp(change_key(b)));
        changes
    }
}

impl EnvBlock {
    /// The spelling `key` already has in this block, or `key` itself.
    fn stored_key(&self, key: &str) -> String {
        self.find(&self.current, key)
            .or_else(|| self.find(&self.initial, key))
            .map_or_else(|| key.to_string(), |(k, _)| k.clone())
    }

    fn find<'m>(
        &self,
        map: &'m BTreeMap<String, String>,
        key: &str,
    ) -> Option<(&'m String, &'m String)> {
        map.get_key_value(key)
            .or_else(|| map.iter().find(|(k, _)| self.kind.same_var(k, key)))
    }
}

fn change_key(change: &EnvChange) -> &str {
    match change {
        EnvChange::Set(key, _) | EnvChange::Unset(key) => key,
    }
}

impl Platform for EnvBlock {
    fn var(&self, key: &str) -> Option<String> {
        self.find(&self.current, key).map(|(_, v)| v.clone())
    }

    fn set_var(&mut self, key: &str, value: &str) {
        let key = self.stored_key(key);
        self.current.insert(key, value.to_string());
    }

    fn remove_var(&mut self, key: &str) {
        let kind = self.kind;
        self.current.retain(|k, _| !kind.same_var(k, key));
    }

    fn path_separator(&self) -> char {
        self.kind.path_separator()
    }

    fn search_path_var(&self) -> &str {
        self.kind.search_path_var()
    }

    fn executable_name(&self, executable: &str) -> String {
        self.kind.executable_name(executable)
    }
}
