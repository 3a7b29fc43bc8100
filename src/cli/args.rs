//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `analyze`: Scan sources, project layout and locale files for problems
//! - `sync`: Bring every target locale file in line with the baseline locale
//! - `init`: Initialize a parley configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Analyze(cmd)) => cmd.common.verbose,
            Some(Command::Sync(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project directory to start the config file search from
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Messages directory path (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Baseline locale (overrides config file)
    #[arg(long)]
    pub baseline: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct AnalyzeCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Also write the report as JSON to this file
    #[arg(long, value_name = "PATH")]
    pub json_report: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct SyncCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Target locale to synchronize (default: all)
    /// Can be specified multiple times: --locale de --locale fr
    #[arg(long = "locale", value_name = "LOCALE")]
    pub locales: Vec<String>,

    /// Fill remaining leaves with machine translation
    #[arg(long)]
    pub machine: bool,

    /// Report what would change without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Like --dry-run, but exit with status 1 if any key would change
    #[arg(long)]
    pub check: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report responsive, performance, accessibility, import and translation problems
    Analyze(AnalyzeCommand),
    /// Fill missing and untranslated keys of every target locale file
    Sync(SyncCommand),
    /// Initialize a new .parleyrc.json configuration file
    Init,
}
