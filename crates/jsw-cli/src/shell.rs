//! Shell dialects for exporting environment changes.
//!
//! Each dialect turns the [`EnvChange`] list recorded during a command into
//! statements the calling shell evaluates. Values are always quoted; nothing
//! here runs a shell.

use clap::ValueEnum;
use jsw_core::EnvChange;
use std::fmt::Write;

/// Shells `jsw` can emit statements for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShellDialect {
    /// POSIX shells: bash, zsh, dash.
    Bash,
    /// Windows PowerShell and pwsh.
    #[value(alias = "pwsh")]
    Powershell,
    /// cmd.exe
    Cmd,
}

impl ShellDialect {
    /// One statement per change, newline terminated.
    pub fn render(self, changes: &[EnvChange]) -> String {
        let mut script = String::new();
        for change in changes {
            let _ = writeln!(script, "{}", self.statement(change));
        }
        script
    }

    fn statement(self, change: &EnvChange) -> String {
        match (self, change) {
            (Self::Bash, EnvChange::Set(key, value)) => {
                format!("export {key}='{}'", value.replace('\'', r"'\''"))
            }
            (Self::Bash, EnvChange::Unset(key)) => format!("unset {key}"),
            (Self::Powershell, EnvChange::Set(key, value)) => {
                format!("$env:{key} = '{}'", value.replace('\'', "''"))
            }
            (Self::Powershell, EnvChange::Unset(key)) => {
                format!("Remove-Item Env:{key} -ErrorAction SilentlyContinue")
            }
            (Self::Cmd, EnvChange::Set(key, value)) => format!("set \"{key}={value}\""),
            (Self::Cmd, EnvChange::Unset(key)) => format!("set {key}="),
        }
    }
}
