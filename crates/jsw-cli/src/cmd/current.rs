use crate::Context;
use anyhow::Result;

/// Show the active alias
pub fn current(ctx: &mut Context) -> Result<()> {
    let output = ctx.output;
    let (session, state) = ctx.session();
    output.line(&session.current(state).to_string());
    Ok(())
}
