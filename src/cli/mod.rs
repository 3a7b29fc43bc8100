//! Command-line layer: argument parsing, command handlers and console output.

pub mod args;
mod commands;
mod exit_status;
mod logging;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use commands::{LocaleSyncSummary, SyncSummary};
pub use exit_status::ExitStatus;
pub use run::run_cli;
