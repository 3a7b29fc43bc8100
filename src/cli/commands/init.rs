use std::{env, fs};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::{
    exit_status::ExitStatus,
    report::{FAILURE_MARK, SUCCESS_MARK},
};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write a default `.parleyrc.json` into the working directory.
pub fn init() -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        println!(
            "{} {} already exists, leaving it untouched",
            FAILURE_MARK.red(),
            CONFIG_FILE_NAME
        );
        return Ok(ExitStatus::Failure);
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::debug!("wrote {}", config_path.display());

    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );
    println!("  adjust baselineLocale and messagesRoot to match your project");

    Ok(ExitStatus::Success)
}
