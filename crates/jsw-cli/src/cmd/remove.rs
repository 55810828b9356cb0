//! Remove command
use crate::Context;
use anyhow::Result;

/// Unregister an alias. Unknown aliases are not an error.
pub fn remove(ctx: &mut Context, alias: &str) -> Result<()> {
    let output = ctx.output;
    let (session, state) = ctx.session();

    let cleared = session.remove(state, alias)?;
    output.success(&format!("Removed {alias}"));
    if cleared {
        output.warning(&format!("{alias} was active; selection cleared"));
    }
    Ok(())
}
