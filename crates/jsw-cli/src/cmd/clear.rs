//! Clear command
use crate::Context;
use anyhow::Result;

/// Deactivate the current alias and restore the original search path
pub fn clear(ctx: &mut Context) -> Result<()> {
    let output = ctx.output;
    let (session, state) = ctx.session();
    session.clear(state);

    output.success("Cleared JDK selection");
    Ok(())
}
