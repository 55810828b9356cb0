//! jsw - switch between installed JDKs per shell session
#![allow(missing_docs)]
#![allow(clippy::doc_markdown)]
//!
//! # Overview
//!
//! `jsw` keeps a registry of named JDK installations and rewrites
//! `JAVA_HOME` and `PATH` for the calling shell. A child process cannot
//! change its parent's environment, so shells integrate by evaluating what
//! `jsw --shell <dialect> <command>` prints on stdout:
//!
//! ```text
//! eval "$(jsw --shell bash use jdk17)"
//! ```
//!
//! Without `--shell` the commands still update the registry and default
//! files, but environment changes stay inside the `jsw` process.

pub mod cmd;
pub mod context;
pub mod shell;
pub mod ui;

pub use context::Context;
pub use shell::ShellDialect;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "jsw")]
#[command(author, version = env!("JSW_VERSION"), about = "jsw - switch between installed JDKs")]
pub struct Cli {
    /// Print environment changes as statements for this shell to evaluate
    #[arg(long, global = true, env = "JSW_SHELL", value_enum)]
    pub shell: Option<ShellDialect>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List registered aliases, marking the active one
    #[command(visible_alias = "ls")]
    List,
    /// Register a JDK installation under an alias
    Add {
        /// Alias to register
        alias: String,
        /// Installation root containing bin/java (defaults to the current directory)
        dir: Option<PathBuf>,
    },
    /// Activate an alias in this shell
    Use {
        /// Registered alias
        alias: String,
    },
    /// Show the default alias, or set it and activate it
    Default {
        /// Alias to make the default
        alias: Option<String>,
    },
    /// Unregister an alias
    #[command(name = "rm", visible_alias = "remove")]
    Remove {
        /// Alias to remove
        alias: String,
    },
    /// Deactivate the current alias and restore the original PATH
    Clear,
    /// Show the active alias
    Current,
    /// Session start: activate the default alias if nothing is active
    #[command(hide = true)]
    Init,
    /// Prompt hook: switch according to the nearest marker file
    #[command(hide = true)]
    Hook,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(id = "completions_shell", value_name = "SHELL")]
        shell: clap_complete::Shell,
    },
}
