use std::process::ExitCode;

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{analyze::analyze, init::init, sync::sync},
    exit_status::ExitStatus,
    logging,
};

/// Main entry point for the parley CLI.
///
/// Installs the diagnostics subscriber, then dispatches to the command
/// handler. Without a subcommand the help text is printed.
///
/// # Returns
/// - `Ok(ExitCode)`: 0 when clean, 1 when the command found problems
/// - `Err` for fatal errors (invalid config, absent baseline, write failure)
pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    logging::init(args.verbose());

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let status = match args.command {
        Some(Command::Analyze(cmd)) => analyze(cmd)?,
        Some(Command::Sync(cmd)) => sync(cmd)?,
        Some(Command::Init) => init()?,
        None => ExitStatus::Success,
    };

    Ok(status.into())
}
