//! Optional user settings read from `config.toml` in the base directory.
//!
//! Every key is optional, so a missing file and an empty file behave the
//! same. Environment flags are applied on top by the caller through
//! [`Settings::with_auto_switch_flag`].

use crate::error::{Result, SwitchError};
use serde::Deserialize;
use std::path::Path;

/// Tunables for the toolchain being switched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// File name searched for by auto-switch.
    pub marker_file: String,
    /// Executable expected under `<install>/bin`, without extension.
    pub executable: String,
    /// Variable that receives the active install path.
    pub home_var: String,
    /// Whether `jsw hook` acts at all.
    pub auto_switch: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            marker_file: ".java-version".to_string(),
            executable: "java".to_string(),
            home_var: "JAVA_HOME".to_string(),
            auto_switch: false,
        }
    }
}

impl Settings {
    /// Load settings from `path`, returning defaults if the file is absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| SwitchError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| SwitchError::Config {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })
    }

    /// Apply the `JSW_AUTO_SWITCH` flag on top of the file setting. A
    /// truthy or falsy value wins; unset or unrecognised leaves it alone.
    pub fn with_auto_switch_flag(mut self, flag: Option<&str>) -> Self {
        if let Some(enabled) = flag.and_then(parse_flag) {
            self.auto_switch = enabled;
        }
        self
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
