//! UI Theme - Design system constants
//!
//! Colors, icons and column widths shared by every command, kept in one
//! place so output stays consistent.

use crossterm::style::Color;

/// Default theme for jsw output
#[derive(Debug, Clone, Default)]
pub struct Theme {
    /// Colors for different UI elements
    pub colors: ColorScheme,
    /// Status icons
    pub icons: Icons,
    /// Table layout constants
    pub layout: Layout,
}

/// Color scheme for UI elements
#[derive(Debug, Clone)]
pub struct ColorScheme {
    /// Alias names (primary content)
    pub alias: Color,
    /// Install paths and secondary info
    pub secondary: Color,
    /// Headers and labels
    pub header: Color,
    /// Success states
    pub success: Color,
    /// Warning states
    pub warning: Color,
    /// Error states
    pub error: Color,
    /// The active alias marker
    pub active: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            alias: Color::Cyan,
            secondary: Color::DarkGrey,
            header: Color::DarkGrey,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            active: Color::Green,
        }
    }
}

/// Status icons for different states
#[derive(Debug, Clone)]
pub struct Icons {
    /// Active alias (●)
    pub active: &'static str,
    /// Success/completed state (✓)
    pub success: &'static str,
    /// Error/failed state (✗)
    pub error: &'static str,
    /// Warning state (⚠)
    pub warning: &'static str,
    /// Info/Tip state (ℹ)
    pub info: &'static str,
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            active: "●",
            success: "✓",
            error: "✗",
            warning: "⚠",
            info: "ℹ",
        }
    }
}

/// Table layout constants
#[derive(Debug, Clone)]
pub struct Layout {
    /// Width allocated for the alias column
    pub alias_width: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self { alias_width: 16 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_defaults() {
        let theme = Theme::default();
        assert_eq!(theme.icons.success, "✓");
        assert_eq!(theme.icons.active, "●");
        assert_eq!(theme.layout.alias_width, 16);
    }
}
