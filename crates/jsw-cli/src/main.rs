//! jsw - switch between installed JDKs per shell session

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use jsw_cli::cmd;
use jsw_cli::ui::Output;
use jsw_cli::{Cli, Commands, Context};
use jsw_core::EnvBlock;

fn main() -> ExitCode {
    // Logs go to stderr; stdout may be evaluated by the shell.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("JSW_LOG"))
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    let output = Output::new(cli.shell.is_some());
    match run(cli, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output.error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, output: Output) -> Result<()> {
    let Some(command) = cli.command else {
        // No subcommand is a request for usage, not an error.
        Cli::command().print_help()?;
        return Ok(());
    };

    if let Commands::Completions { shell } = command {
        cmd::completions::completions(shell);
        return Ok(());
    }

    // Shell startup and the prompt hook must never surface an error.
    let silent = matches!(command, Commands::Init | Commands::Hook);
    let mut ctx = match Context::load(EnvBlock::from_process(), output) {
        Ok(ctx) => ctx,
        Err(err) if silent => {
            tracing::trace!(error = ?err, "session hook skipped");
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    match command {
        Commands::List => cmd::list::list(&mut ctx),
        Commands::Add { alias, dir } => cmd::add::add(&mut ctx, &alias, dir),
        Commands::Use { alias } => cmd::r#use::use_alias(&mut ctx, &alias),
        Commands::Default { alias } => cmd::default::default(&mut ctx, alias.as_deref()),
        Commands::Remove { alias } => cmd::remove::remove(&mut ctx, &alias),
        Commands::Clear => cmd::clear::clear(&mut ctx),
        Commands::Current => cmd::current::current(&mut ctx),
        Commands::Init => cmd::init::init(&mut ctx),
        Commands::Hook => cmd::hook::hook(&mut ctx),
        Commands::Completions { .. } => Ok(()),
    }?;

    let changes = ctx.finish();
    match cli.shell {
        Some(dialect) => print!("{}", dialect.render(&changes)),
        None => {
            for change in &changes {
                tracing::debug!(?change, "not exported; pass --shell to apply");
            }
        }
    }

    Ok(())
}
