//! Use command: activate an alias in the calling shell
use crate::Context;
use anyhow::Result;

/// Switch the active JDK (CLI Entry Point)
pub fn use_alias(ctx: &mut Context, alias: &str) -> Result<()> {
    let output = ctx.output;
    let (session, state) = ctx.session();
    let entry = session.use_alias(state, alias)?;

    output.success(&format!("Now using {} ({})", entry.alias, entry.install_path));
    if !output.eval_mode() {
        output.info("Pass --shell <bash|powershell|cmd> and eval the output to update your shell.");
    }
    Ok(())
}
