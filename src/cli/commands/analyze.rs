use std::fs;

use anyhow::{Context, Result};

use super::super::{args::AnalyzeCommand, exit_status::ExitStatus, report::print_analysis};
use crate::{
    config::resolve_path,
    core::{ProjectContext, analyze as run_analysis},
};

pub fn analyze(cmd: AnalyzeCommand) -> Result<ExitStatus> {
    let ctx = ProjectContext::load(&cmd.common)?;
    let report = run_analysis(&ctx)?;

    print_analysis(&report, ctx.verbose);

    // --json-report is relative to the working directory, reportFile to the project root
    let json_path = match (&cmd.json_report, &ctx.config.report_file) {
        (Some(path), _) => Some(path.clone()),
        (None, Some(configured)) => Some(resolve_path(&ctx.root, configured)),
        (None, None) => None,
    };
    if let Some(path) = json_path {
        let content = serde_json::to_string_pretty(&report.to_json())
            .context("Failed to serialize report")?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&path, format!("{}\n", content))
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        tracing::debug!("report written to {}", path.display());
    }

    if report.findings.is_empty() {
        Ok(ExitStatus::Success)
    } else {
        Ok(ExitStatus::Failure)
    }
}
