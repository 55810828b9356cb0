use crate::Context;
use crate::ui::list::{list_footer, list_header, list_row};
use anyhow::Result;

/// List all registered aliases
pub fn list(ctx: &mut Context) -> Result<()> {
    let output = ctx.output;
    let entries = ctx.registry.list()?;

    if entries.is_empty() {
        output.line("");
        output.line("  No JDKs registered.");
        output.line("  Run 'jsw add <alias> <dir>' to get started.");
        return Ok(());
    }

    output.line(&list_header());
    let active = ctx.state.active_alias.as_deref();
    for entry in &entries {
        output.line(&list_row(
            &entry.alias,
            &entry.install_path,
            active == Some(entry.alias.as_str()),
        ));
    }
    output.line(&list_footer(entries.len()));

    Ok(())
}
