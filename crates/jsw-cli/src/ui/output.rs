//! Unified UI output interface.
//!
//! Commands report through [`Output`] instead of printing directly. In eval
//! mode (`--shell`) stdout belongs to the generated shell statements, so
//! every human-facing line moves to stderr.

use super::theme::Theme;
use crossterm::style::Stylize;

/// A cheap, copyable handle for user-facing messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    eval_mode: bool,
}

impl Output {
    /// Create a new output handle. `eval_mode` routes everything to stderr.
    pub fn new(eval_mode: bool) -> Self {
        Self { eval_mode }
    }

    /// Whether stdout is reserved for shell statements.
    pub fn eval_mode(&self) -> bool {
        self.eval_mode
    }

    /// Prints a line of command output as-is.
    pub fn line(&self, msg: &str) {
        self.emit(msg);
    }

    /// Prints an informational message to the console.
    pub fn info(&self, msg: &str) {
        let theme = Theme::default();
        self.emit(&format!("{} {msg}", theme.icons.info.with(theme.colors.secondary)));
    }

    /// Prints a success message to the console.
    pub fn success(&self, msg: &str) {
        let theme = Theme::default();
        self.emit(&format!("{} {msg}", theme.icons.success.with(theme.colors.success)));
    }

    /// Prints a warning message to the console.
    pub fn warning(&self, msg: &str) {
        let theme = Theme::default();
        self.emit(&format!("{} {msg}", theme.icons.warning.with(theme.colors.warning)));
    }

    /// Prints an error message. Always goes to stderr.
    pub fn error(&self, msg: &str) {
        let theme = Theme::default();
        eprintln!("{} {msg}", theme.icons.error.with(theme.colors.error));
    }

    fn emit(&self, text: &str) {
        if self.eval_mode {
            eprintln!("{text}");
        } else {
            println!("{text}");
        }
    }
}
