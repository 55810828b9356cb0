//! UI Module - terminal output for jsw commands
//!
//! # Modules
//!
//! - [`theme`] - Colors, icons, and column widths
//! - [`output`] - Public API for commands to use
//! - [`list`] - Row formatting for `jsw list`

pub mod list;
pub mod output;
pub mod theme;

pub use output::Output;
pub use theme::Theme;
