//! jsw-core - alias registry and per-shell session state for switching JDKs.
//!
//! # Overview
//!
//! A user registers named aliases for JDK installations, then selects one
//! per shell session. Selecting rewrites `JAVA_HOME` and prepends the JDK's
//! `bin` directory to the search path captured when the session started.
//!
//! # Architecture
//!
//! - **Registry Store** ([`registry`]): the only code that touches the alias
//!   file. Mutations go through temp file + rename.
//! - **Session Controller** ([`session`]): transitions over an explicit
//!   [`SessionState`], never over ambient process state.
//! - **Platform adapter** ([`platform`]): environment access plus separators
//!   and binary layout; the CLI supplies an [`EnvBlock`] snapshot.
//!
//! # Directory Layout
//!
//! ```text
//! $JSW_HOME/
//! ├── jdks         # alias|path, one per line
//! ├── default      # default alias
//! └── config.toml  # optional settings
//! ```

pub mod config;
pub mod defaults;
pub mod error;
pub mod marker;
pub mod paths;
pub mod platform;
pub mod registry;
pub mod session;

pub use config::Settings;
pub use defaults::DefaultAlias;
pub use error::{BestEffort, Result, SwitchError};
pub use paths::*;
pub use platform::{EnvBlock, EnvChange, Platform, PlatformKind};
pub use registry::{AliasEntry, Registry};
pub use session::{AutoSwitch, Current, SessionController, SessionState};
