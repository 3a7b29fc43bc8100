use crate::core::locale::SyncReport;

/// Outcome of synchronizing one target locale.
#[derive(Debug)]
pub struct LocaleSyncSummary {
    pub locale: String,
    /// Locale file path relative to the project root.
    pub file_path: String,
    /// The file did not exist before this run.
    pub created: bool,
    pub deprecated_removed: usize,
    pub overrides_applied: usize,
    pub missing_before: usize,
    pub untranslated_before: usize,
    pub missing_after: usize,
    pub report: SyncReport,
}

impl LocaleSyncSummary {
    /// Leaves written differently than before: merged, overridden or removed.
    pub fn total_changes(&self) -> usize {
        self.report.changed + self.overrides_applied + self.deprecated_removed
    }
}

/// Result of `parley sync`.
#[derive(Debug)]
pub struct SyncSummary {
    pub baseline_locale: String,
    pub locales: Vec<LocaleSyncSummary>,
    /// Nothing was written (`--dry-run` or `--check`).
    pub dry_run: bool,
    pub machine_enabled: bool,
    /// Provider calls made during the run.
    pub provider_calls: usize,
}

impl SyncSummary {
    pub fn total_changes(&self) -> usize {
        self.locales.iter().map(LocaleSyncSummary::total_changes).sum()
    }

    pub fn failure_count(&self) -> usize {
        self.locales.iter().map(|l| l.report.failures.len()).sum()
    }
}
