//! List output formatting
//!
//! Provides column-aligned rendering for `jsw list`.

use super::theme::Theme;
use crossterm::style::Stylize;

/// Column headers for `jsw list`
pub fn list_header() -> String {
    let theme = Theme::default();
    let header = format!(
        "    {:<aw$} {}",
        "alias",
        "path",
        aw = theme.layout.alias_width,
    );
    header.with(theme.colors.header).to_string()
}

/// A single row for `jsw list`, marked when `active`
pub fn list_row(alias: &str, path: &str, active: bool) -> String {
    let theme = Theme::default();

    let marker = if active {
        theme.icons.active.with(theme.colors.active).to_string()
    } else {
        " ".to_string()
    };
    let alias_part = format!("{:<width$}", alias, width = theme.layout.alias_width);

    format!(
        "  {marker} {} {}",
        alias_part.with(theme.colors.alias),
        path.with(theme.colors.secondary)
    )
}

/// Footer for `jsw list`
pub fn list_footer(count: usize) -> String {
    let theme = Theme::default();
    let msg = format!("  {count} alias{}", if count == 1 { "" } else { "es" });
    msg.with(theme.colors.secondary).to_string()
}
