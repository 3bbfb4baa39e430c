use std::process::ExitCode;

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{hints::hints, hover::hover, init::init, languages::languages},
    exit_status::ExitStatus,
};

/// Dispatch a parsed command line to its command handler.
///
/// `serve` never reaches this point: `main` starts the MCP server before
/// dispatching, because it owns stdout.
pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(Arguments { command }) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let status = match command {
        Some(Command::Hints(cmd)) => hints(cmd)?,
        Some(Command::Hover(cmd)) => hover(cmd)?,
        Some(Command::Languages(cmd)) => languages(cmd)?,
        Some(Command::Init) => init()?,
        Some(Command::Serve) => {
            anyhow::bail!("Serve command should be handled before run_cli()")
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    };

    Ok(status.into())
}
