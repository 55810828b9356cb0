//! Standard locations under the jsw base directory.

use crate::error::{Result, SwitchError};
use dirs::home_dir;
use std::path::{Path, PathBuf};

/// Environment variable overriding the base directory.
pub const HOME_ENV: &str = "JSW_HOME";

/// Resolves the base directory from an explicit override.
///
/// Falls back to the directory holding the running executable, then to
/// `~/.jsw`. Returns `None` only if all three are unavailable.
pub fn try_jsw_home(override_dir: Option<&str>) -> Option<PathBuf> {
    if let Some(val) = override_dir.filter(|v| !v.trim().is_empty()) {
        return Some(PathBuf::from(val));
    }
    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        return Some(dir);
    }
    home_dir().map(|h| h.join(".jsw"))
}

/// Creates the base directory if needed.
pub fn ensure_home(home: &Path) -> Result<()> {
    std::fs::create_dir_all(home).map_err(|e| SwitchError::persist(home, e))
}

/// Alias registry: `<home>/jdks`
pub fn registry_path(home: &Path) -> PathBuf {
    home.join("jdks")
}

/// Default alias: `<home>/default`
pub fn default_alias_path(home: &Path) -> PathBuf {
    home.join("default")
}

/// Optional settings: `<home>/config.toml`
pub fn config_path(home: &Path) -> PathBuf {
    home.join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let home = try_jsw_home(Some("/srv/jsw")).unwrap();
        assert_eq!(home, PathBuf::from("/srv/jsw"));
        assert_eq!(registry_path(&home), PathBuf::from("/srv/jsw/jdks"));
    }

    #[test]
    fn test_blank_override_falls_back() {
        let home = try_jsw_home(Some("  "));
        assert_ne!(home, Some(PathBuf::from("  ")));
    }

    #[test]
    fn test_ensure_home_creates_nested() {
        let dir = tempfile::tempdir().unwrap();
        let home = dir.path().join("a").join("b");
        ensure_home(&home).unwrap();
        assert!(home.is_dir());
    }
}
