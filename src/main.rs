use std::process::ExitCode;

use clap::Parser;
use parley::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();

    match parley::cli::run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
