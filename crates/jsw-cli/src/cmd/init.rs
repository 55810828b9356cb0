//! Session start, called once from a shell's startup file.
use crate::Context;
use anyhow::Result;

/// Activate the default alias if nothing is active. Never fails.
pub fn init(ctx: &mut Context) -> Result<()> {
    let (session, state) = ctx.session();
    match session.start(state) {
        Some(entry) => tracing::debug!(alias = %entry.alias, "default alias loaded"),
        None => tracing::debug!("no default alias loaded"),
    }
    Ok(())
}
