//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow parley to be used as a library. Every
//! printer has a `*_to` variant taking a writer, used by the tests.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{LocaleSyncSummary, SyncSummary};
use crate::core::{AnalysisReport, stats::Stats};
use crate::issues::{Finding, Report, ReportLocation};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Maximum number of findings printed per category.
pub const MAX_EXAMPLES_PER_CATEGORY: usize = 10;

fn plural(count: usize, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 { singular } else { plural }
}

// ============================================================
// Analyze
// ============================================================

pub fn print_analysis(report: &AnalysisReport, verbose: bool) {
    print_analysis_to(report, verbose, &mut io::stdout().lock());
}

pub fn print_analysis_to<W: Write>(report: &AnalysisReport, verbose: bool, writer: &mut W) {
    for (category, findings) in report.by_category() {
        let _ = writeln!(
            writer,
            "{} ({})",
            category.to_string().bold().underline(),
            findings.len()
        );
        for finding in findings.iter().take(MAX_EXAMPLES_PER_CATEGORY) {
            print_finding(finding, writer);
        }
        if findings.len() > MAX_EXAMPLES_PER_CATEGORY {
            let _ = writeln!(
                writer,
                "  {}",
                format!(
                    "... and {} more",
                    findings.len() - MAX_EXAMPLES_PER_CATEGORY
                )
                .dimmed()
            );
        }
        let _ = writeln!(writer);
    }

    print_stats(&report.stats, writer);

    if verbose && report.unreadable_files > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} skipped (not valid UTF-8 or unreadable)",
            "warning:".bold().yellow(),
            report.unreadable_files,
            plural(report.unreadable_files, "file", "files")
        );
    }
    if report.inaccessible_paths > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} could not be accessed",
            "warning:".bold().yellow(),
            report.inaccessible_paths,
            plural(report.inaccessible_paths, "path", "paths")
        );
    }

    let files = report.stats.count("files_scanned").unwrap_or(0);
    let total = report.findings.len();
    if total == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} source {} - no issues found",
                files,
                plural(files, "file", "files")
            )
            .green()
        );
    } else {
        let categories = report.by_category().len();
        let _ = writeln!(
            writer,
            "{} {} {} in {} {} ({} source {} checked)",
            FAILURE_MARK.red(),
            total,
            plural(total, "problem", "problems").red(),
            categories,
            plural(categories, "category", "categories"),
            files,
            plural(files, "file", "files")
        );
    }
}

fn print_finding<W: Write>(finding: &Finding, writer: &mut W) {
    let location = match finding.location() {
        ReportLocation::File {
            path,
            line: Some(line),
        } => format!("{}:{}", path, line),
        ReportLocation::File { path, line: None } => path.to_string(),
        ReportLocation::Locale { locale, path } => format!("[{}] {}", locale, path),
    };

    let _ = writeln!(
        writer,
        "  {} {}  {}",
        "-->".blue(),
        location,
        finding.message()
    );
    if let Some(details) = finding.details() {
        let _ = writeln!(writer, "      {} {} {}", "=".blue(), "note:".bold(), details);
    }
}

fn print_stats<W: Write>(stats: &Stats, writer: &mut W) {
    if stats.is_empty() {
        return;
    }
    let width = stats
        .iter()
        .map(|(name, _)| UnicodeWidthStr::width(name))
        .max()
        .unwrap_or(0);

    let _ = writeln!(writer, "{}", "statistics".bold().underline());
    for (name, value) in stats.iter() {
        let padding = width - UnicodeWidthStr::width(name);
        let _ = writeln!(writer, "  {}{}  {}", name, " ".repeat(padding), value);
    }
    let _ = writeln!(writer);
}

// ============================================================
// Sync
// ============================================================

pub fn print_sync(summary: &SyncSummary) {
    print_sync_to(summary, &mut io::stdout().lock());
}

pub fn print_sync_to<W: Write>(summary: &SyncSummary, writer: &mut W) {
    if summary.locales.is_empty() {
        let _ = writeln!(
            writer,
            "{} no target locales besides {}",
            "warning:".bold().yellow(),
            summary.baseline_locale
        );
        return;
    }

    for locale in &summary.locales {
        print_locale_sync(locale, writer);
    }

    let changes = summary.total_changes();
    let touched = summary
        .locales
        .iter()
        .filter(|l| l.total_changes() > 0)
        .count();
    let failures = summary.failure_count();

    if failures > 0 {
        let _ = writeln!(
            writer,
            "{} {} machine {} failed; the baseline text was kept",
            "warning:".bold().yellow(),
            failures,
            plural(failures, "translation", "translations")
        );
    }

    if changes == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "All locale files are in sync with {}",
                summary.baseline_locale
            )
            .green()
        );
    } else if summary.dry_run {
        let _ = writeln!(
            writer,
            "{} {} {} in {} locale {}",
            "Would update".yellow().bold(),
            changes,
            plural(changes, "key", "keys"),
            touched,
            plural(touched, "file", "files")
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Updated {} {} in {} locale {}",
                changes,
                plural(changes, "key", "keys"),
                touched,
                plural(touched, "file", "files")
            )
            .green()
        );
    }
}

fn print_locale_sync<W: Write>(summary: &LocaleSyncSummary, writer: &mut W) {
    let report = &summary.report;
    let header = if summary.created {
        format!("{} (new file)", summary.file_path)
    } else {
        summary.file_path.clone()
    };
    let _ = writeln!(writer, "{}  {}", summary.locale.bold(), header.dimmed());

    let _ = writeln!(
        writer,
        "  {} changed ({} from dictionary, {} machine translated, {} skipped, {} failed)",
        report.changed,
        report.from_dictionary,
        report.machine_translated,
        report.skipped,
        report.failures.len()
    );
    let _ = writeln!(
        writer,
        "  missing keys: {} -> {}, untranslated before: {}",
        summary.missing_before, summary.missing_after, summary.untranslated_before
    );
    if summary.deprecated_removed > 0 || summary.overrides_applied > 0 {
        let _ = writeln!(
            writer,
            "  deprecated keys removed: {}, overrides applied: {}",
            summary.deprecated_removed, summary.overrides_applied
        );
    }
    for failure in &report.failures {
        let _ = writeln!(
            writer,
            "  {} {} {:?}: {}",
            FAILURE_MARK.red(),
            failure.key,
            failure.text,
            failure.error
        );
    }
    let _ = writeln!(writer);
}
