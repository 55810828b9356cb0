//! Add command
use crate::Context;
use anyhow::{Context as _, Result};
use std::path::PathBuf;

/// Register `dir` (or the current directory) as `alias`
pub fn add(ctx: &mut Context, alias: &str, dir: Option<PathBuf>) -> Result<()> {
    let dir = match dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };

    let output = ctx.output;
    let (session, _) = ctx.session();
    let entry = session.add(alias, &dir)?;

    output.success(&format!("Registered {} -> {}", entry.alias, entry.install_path));
    Ok(())
}
