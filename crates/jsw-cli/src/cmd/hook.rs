//! Prompt hook, called before every interactive command.
use crate::Context;
use anyhow::Result;

/// Run one auto-switch step for the current directory. Never fails.
pub fn hook(ctx: &mut Context) -> Result<()> {
    let Ok(cwd) = std::env::current_dir() else {
        return Ok(());
    };

    let (session, state) = ctx.session();
    let outcome = session.auto_switch(state, &cwd);
    tracing::debug!(?outcome, cwd = %cwd.display(), "auto-switch");
    Ok(())
}
