//! Command handlers, one per subcommand.

pub mod add;
pub mod clear;
pub mod completions;
pub mod current;
pub mod default;
pub mod hook;
pub mod init;
pub mod list;
pub mod remove;
pub mod r#use;
