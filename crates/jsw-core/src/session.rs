//! Session controller: the per-shell state machine over the active alias.
//!
//! ```text
//!            use / default <a>            use / default <b>
//! NoneActive ─────────────────▶ Active(a) ─────────────────▶ Active(b)
//!     ▲                            │
//!     └──── clear / rm <a> ────────┘
//! ```
//!
//! [`SessionState`] is loaded from a [`Platform`] at the boundary, mutated by
//! [`SessionController`] operations, and stored back afterwards. Operations
//! that fail leave the state exactly as they found it.

use crate::config::Settings;
use crate::defaults::DefaultAlias;
use crate::error::{BestEffort, Result, SwitchError};
use crate::marker::marker_alias;
use crate::platform::Platform;
use crate::registry::{AliasEntry, Registry};
use std::fmt;
use std::path::{Path, PathBuf};

/// Alias selected in this session.
pub const ACTIVE_ALIAS_VAR: &str = "JSW_ACTIVE";
/// Search path captured before the first switch.
pub const ORIGINAL_PATH_VAR: &str = "JSW_ORIGINAL_PATH";
/// Opt-in flag for auto-switch.
pub const AUTO_SWITCH_VAR: &str = "JSW_AUTO_SWITCH";
/// Last candidate applied by auto-switch.
pub const AUTO_LAST_VAR: &str = "JSW_AUTO_LAST";

/// Environment-scoped state of one shell session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Alias selected by this tool, if any.
    pub active_alias: Option<String>,
    /// Value of the install-path variable, possibly set outside this tool.
    pub active_install_path: Option<String>,
    /// Current executable search path.
    pub search_path: String,
    /// Baseline search path that `clear` restores.
    pub original_search_path: String,
    /// Last candidate seen by auto-switch.
    pub auto_switch_last: Option<String>,
}

impl SessionState {
    /// Read the session from `env`. The original search path is captured
    /// from the current one if this session never recorded it.
    pub fn load(env: &dyn Platform, home_var: &str) -> Self {
        let search_path = env.var(env.search_path_var()).unwrap_or_default();
        let original_search_path = env
            .var(ORIGINAL_PATH_VAR)
            .unwrap_or_else(|| search_path.clone());
        Self {
            active_alias: non_empty(env.var(ACTIVE_ALIAS_VAR)),
            active_install_path: non_empty(env.var(home_var)),
            search_path,
            original_search_path,
            auto_switch_last: non_empty(env.var(AUTO_LAST_VAR)),
        }
    }

    /// Write the session back into `env`.
    pub fn store(&self, env: &mut dyn Platform, home_var: &str) {
        let search_var = env.search_path_var().to_string();
        put(env, &search_var, Some(&self.search_path));
        put(env, ORIGINAL_PATH_VAR, Some(&self.original_search_path));
        put(env, ACTIVE_ALIAS_VAR, self.active_alias.as_deref());
        put(env, home_var, self.active_install_path.as_deref());
        put(env, AUTO_LAST_VAR, self.auto_switch_last.as_deref());
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn put(env: &mut dyn Platform, key: &str, value: Option<&str>) {
    match value {
        Some(v) if !v.is_empty() => env.set_var(key, v),
        _ => env.remove_var(key),
    }
}

/// Answer to the `current` query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Current {
    /// An alias selected through this tool.
    Active {
        /// Selected alias.
        alias: String,
        /// Its install path.
        install_path: String,
    },
    /// The install-path variable was set by something else.
    External(String),
    /// Nothing selected.
    NotSelected,
}

impl fmt::Display for Current {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active {
                alias,
                install_path,
            } => write!(f, "{alias} -> {install_path}"),
            Self::External(path) => write!(f, "{path} (external)"),
            Self::NotSelected => f.write_str("(not selected)"),
        }
    }
}

/// What one auto-switch step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoSwitch {
    /// Auto-switch is not enabled.
    Disabled,
    /// Candidate matches the last one applied; nothing touched.
    Unchanged,
    /// Switched to this alias.
    Switched(String),
    /// Tried to switch to this alias and failed silently.
    Failed(String),
    /// Empty candidate; selection cleared.
    Cleared,
}

/// Platform facts the controller needs, copied out of a [`Platform`].
#[derive(Debug, Clone)]
struct Layout {
    separator: char,
    bin_dir: String,
    executable: String,
}

/// Runs session transitions against a registry and a default-alias file.
#[derive(Debug)]
pub struct SessionController<'a> {
    registry: &'a Registry,
    defaults: &'a DefaultAlias,
    settings: &'a Settings,
    layout: Layout,
}

impl<'a> SessionController<'a> {
    /// Controller using `platform` for separators and binary layout.
    pub fn new(
        registry: &'a Registry,
        defaults: &'a DefaultAlias,
        settings: &'a Settings,
        platform: &dyn Platform,
    ) -> Self {
        Self {
            registry,
            defaults,
            settings,
            layout: Layout {
                separator: platform.path_separator(),
                bin_dir: platform.bin_dir_name().to_string(),
                executable: platform.executable_name(&settings.executable),
            },
        }
    }

    /// Path, relative to an install root, that must exist for it to be
    /// registered.
    pub fn expected_binary(&self) -> PathBuf {
        Path::new(&self.layout.bin_dir).join(&self.layout.executable)
    }

    /// Validate `dir` and register it as `alias`.
    pub fn add(&self, alias: &str, dir: &Path) -> Result<AliasEntry> {
        let alias = alias.trim();
        if alias.is_empty() {
            return Err(SwitchError::Usage("alias must not be empty".to_string()));
        }

        let dir = std::path::absolute(dir)
            .map_err(|_| SwitchError::DirectoryNotAccessible(dir.to_path_buf()))?;
        if !dir.is_dir() {
            return Err(SwitchError::DirectoryNotAccessible(dir));
        }

        let expected = self.expected_binary();
        if !dir.join(&expected).is_file() {
            return Err(SwitchError::MissingExpectedBinary { dir, expected });
        }

        let entry = AliasEntry::new(alias, dir.to_string_lossy());
        self.registry.upsert(entry.clone())?;
        Ok(entry)
    }

    /// Activate `alias`. Either every session field changes or none does.
    pub fn use_alias(&self, state: &mut SessionState, alias: &str) -> Result<AliasEntry> {
        let entry = self.registry.lookup(alias)?;
        let bin = Path::new(&entry.install_path).join(&self.layout.bin_dir);
        if !bin.is_dir() {
            return Err(SwitchError::DirectoryNotAccessible(bin));
        }

        let bin = bin.to_string_lossy();
        let search_path = if state.original_search_path.is_empty() {
            bin.into_owned()
        } else {
            format!(
                "{bin}{}{}",
                self.layout.separator, state.original_search_path
            )
        };

        tracing::debug!(alias, path = %entry.install_path, "activating");
        state.search_path = search_path;
        state.active_install_path = Some(entry.install_path.clone());
        state.active_alias = Some(entry.alias.clone());
        Ok(entry)
    }

    /// Return to the original search path with nothing selected.
    pub fn clear(&self, state: &mut SessionState) {
        tracing::debug!(previous = ?state.active_alias, "clearing selection");
        state.search_path.clone_from(&state.original_search_path);
        state.active_install_path = None;
        state.active_alias = None;
    }

    /// Describe the current selection.
    pub fn current(&self, state: &SessionState) -> Current {
        match (&state.active_alias, &state.active_install_path) {
            (Some(alias), path) => Current::Active {
                alias: alias.clone(),
                install_path: path.clone().unwrap_or_default(),
            },
            (None, Some(path)) => Current::External(path.clone()),
            (None, None) => Current::NotSelected,
        }
    }

    /// The persisted default alias, if set.
    pub fn default_alias(&self) -> Option<String> {
        self.defaults.get()
    }

    /// Persist `alias` as the default and activate it.
    pub fn set_default(&self, state: &mut SessionState, alias: &str) -> Result<AliasEntry> {
        let entry = self.registry.lookup(alias)?;
        self.defaults.set(&entry.alias)?;
        self.use_alias(state, &entry.alias)
    }

    /// Unregister `alias`, clearing the session if it was active.
    /// Returns whether the session was cleared.
    pub fn remove(&self, state: &mut SessionState, alias: &str) -> Result<bool> {
        self.registry.remove(alias)?;
        if state.active_alias.as_deref() == Some(alias) {
            self.clear(state);
            return Ok(true);
        }
        Ok(false)
    }

    /// Session start: activate the default alias unless something is
    /// already active. Failures are swallowed.
    pub fn start(&self, state: &mut SessionState) -> Option<AliasEntry> {
        if state.active_alias.is_some() {
            return None;
        }
        let alias = self.defaults.get()?;
        self.use_alias(state, &alias).best_effort()
    }

    /// One auto-switch step for working directory `cwd`.
    pub fn auto_switch(&self, state: &mut SessionState, cwd: &Path) -> AutoSwitch {
        if !self.settings.auto_switch {
            return AutoSwitch::Disabled;
        }

        let candidate = marker_alias(cwd, &self.settings.marker_file)
            .unwrap_or_else(|| self.defaults.get().unwrap_or_default());
        if state.auto_switch_last.as_deref().unwrap_or("") == candidate {
            return AutoSwitch::Unchanged;
        }

        let outcome = if candidate.is_empty() {
            self.clear(state);
            AutoSwitch::Cleared
        } else if self.use_alias(state, &candidate).best_effort().is_some() {
            AutoSwitch::Switched(candidate.clone())
        } else {
            AutoSwitch::Failed(candidate.clone())
        };
        state.auto_switch_last = Some(candidate);
        outcome
    }
}
