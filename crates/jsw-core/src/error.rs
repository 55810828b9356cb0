//! Domain-specific errors for registry and session operations

use std::path::PathBuf;
use thiserror::Error;

/// Every failure a registry or session operation can report.
///
/// None of these are retried. The CLI prints the message and exits with
/// status 1; the best-effort hooks discard them via [`BestEffort`].
#[derive(Error, Debug)]
pub enum SwitchError {
    /// A required argument was missing or empty.
    #[error("{0}")]
    Usage(String),

    /// The alias is not present in the registry.
    #[error("unknown alias '{0}'. Run 'jsw list' to see registered aliases")]
    UnknownAlias(String),

    /// The path does not exist or could not be resolved.
    #[error("directory not accessible: {}", .0.display())]
    DirectoryNotAccessible(PathBuf),

    /// The install directory lacks `<bin>/<executable>`.
    #[error("{} does not contain {}", .dir.display(), .expected.display())]
    MissingExpectedBinary {
        /// The directory that was checked.
        dir: PathBuf,
        /// The relative path that was expected inside it.
        expected: PathBuf,
    },

    /// The registry exists but could not be read or is not valid UTF-8.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// The file being read.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// The registry, default-alias file, or base directory could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Persist {
        /// The file or directory being written.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// `config.toml` exists but could not be read or parsed.
    #[error("invalid config {}: {message}", .path.display())]
    Config {
        /// Location of the offending file.
        path: PathBuf,
        /// Parser or IO message.
        message: String,
    },
}

impl SwitchError {
    /// Wrap an IO failure that happened while writing `path`.
    pub fn persist(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Persist {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used across `jsw-core`.
pub type Result<T> = std::result::Result<T, SwitchError>;

/// Marks an operation whose failure must never reach the user.
///
/// Shell hooks run before every prompt, so a stale marker file or a default
/// alias pointing at a deleted JDK has to degrade to "nothing happened".
pub trait BestEffort<T> {
    /// Discard the error, keeping only a success value.
    fn best_effort(self) -> Option<T>;
}

impl<T> BestEffort<T> for Result<T> {
    fn best_effort(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::trace!(error = %err, "best-effort operation failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_effort_discards_error() {
        let failed: Result<u8> = Err(SwitchError::UnknownAlias("jdk8".into()));
        assert_eq!(failed.best_effort(), None);

        let ok: Result<u8> = Ok(7);
        assert_eq!(ok.best_effort(), Some(7));
    }

    #[test]
    fn test_messages_name_the_alias() {
        let err = SwitchError::UnknownAlias("corretto".into());
        assert!(err.to_string().contains("'corretto'"));
    }
}
