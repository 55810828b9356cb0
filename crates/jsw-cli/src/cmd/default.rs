//! Default command: show or set the alias activated at session start
use crate::Context;
use anyhow::Result;

/// Print the default alias, or persist and activate a new one
pub fn default(ctx: &mut Context, alias: Option<&str>) -> Result<()> {
    let output = ctx.output;
    let (session, state) = ctx.session();

    let Some(alias) = alias else {
        let current = session.default_alias();
        output.line(current.as_deref().unwrap_or("(not set)"));
        return Ok(());
    };

    let entry = session.set_default(state, alias)?;
    output.success(&format!("Default set to {} ({})", entry.alias, entry.install_path));
    Ok(())
}
