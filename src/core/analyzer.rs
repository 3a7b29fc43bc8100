//! Static analysis run: per-file rules, project checks, locale completeness.

use std::collections::BTreeMap;

use anyhow::Result;
use serde_json::{Value, json};

use crate::{
    core::{
        context::ProjectContext,
        file_scanner::{ScanOptions, display_path, scan_files},
        locale::target_locales,
        source::SourceFile,
        stats::Stats,
    },
    issues::{Category, Finding, FindingRecord, Report},
    rules::{
        hardcoded::check_hardcoded_text,
        images::{check_missing_alt, check_raw_images, find_img_tags, imports_next_image},
        imports::check_imports,
        pages::{check_server_translations, is_page_file},
        project::{ProjectLayout, check_project},
        responsive::{Breakpoints, check_fixed_sizes},
        translations::check_translations,
    },
};

/// Findings and statistics of one analyzer run.
pub struct AnalysisReport {
    /// Grouped by category, file order within a category.
    pub findings: Vec<Finding>,
    pub stats: Stats,
    /// Files that could not be read as UTF-8 text.
    pub unreadable_files: usize,
    /// Directory entries the walk could not access.
    pub inaccessible_paths: usize,
}

impl AnalysisReport {
    pub fn by_category(&self) -> BTreeMap<Category, Vec<&Finding>> {
        let mut grouped: BTreeMap<Category, Vec<&Finding>> = BTreeMap::new();
        for finding in &self.findings {
            grouped.entry(finding.category()).or_default().push(finding);
        }
        grouped
    }

    /// `{"stats": {...}, "issues": {"<category>": [...]}}`
    pub fn to_json(&self) -> Value {
        let issues: serde_json::Map<String, Value> = self
            .by_category()
            .into_iter()
            .map(|(category, findings)| {
                let records: Vec<FindingRecord> =
                    findings.into_iter().map(FindingRecord::from).collect();
                (category.to_string(), json!(records))
            })
            .collect();
        json!({ "stats": self.stats, "issues": issues })
    }
}

/// Per-file counters accumulated during the scan.
#[derive(Default)]
struct SourceCounts {
    files_scanned: usize,
    breakpoints: Vec<usize>,
    files_with_responsive: usize,
    next_image_files: usize,
    img_tag_files: usize,
    pages_analyzed: usize,
}

pub fn analyze(ctx: &ProjectContext) -> Result<AnalysisReport> {
    let config = &ctx.config;
    let breakpoints = Breakpoints::new(&config.breakpoints)?;
    let pages_root = ctx.pages_root();

    let scan = scan_files(
        &ctx.source_root(),
        &ScanOptions {
            includes: &config.includes,
            ignores: &config.ignores,
            ignore_test_files: config.ignore_test_files,
            extensions: &config.extensions,
        },
    );

    let mut findings: Vec<Finding> = Vec::new();
    let mut counts = SourceCounts {
        breakpoints: vec![0; breakpoints.names().len()],
        ..Default::default()
    };
    let mut unreadable_files = 0;

    for path in &scan.files {
        let Some(file) = SourceFile::read(path, display_path(&ctx.root, path)) else {
            unreadable_files += 1;
            continue;
        };
        counts.files_scanned += 1;

        let file_breakpoints = breakpoints.count(&file.content);
        if file_breakpoints.iter().any(|&n| n > 0) {
            counts.files_with_responsive += 1;
        }
        for (total, n) in counts.breakpoints.iter_mut().zip(&file_breakpoints) {
            *total += n;
        }
        findings.extend(
            check_fixed_sizes(&file, &breakpoints)
                .into_iter()
                .map(Finding::FixedSize),
        );

        let tags = find_img_tags(&file.content);
        if imports_next_image(&file) {
            counts.next_image_files += 1;
        }
        if !tags.is_empty() {
            counts.img_tag_files += 1;
        }
        findings.extend(
            check_raw_images(&file, &tags)
                .into_iter()
                .map(Finding::RawImage),
        );
        findings.extend(
            check_missing_alt(&file, &tags)
                .into_iter()
                .map(Finding::MissingAlt),
        );

        findings.extend(check_imports(&file).into_iter().map(Finding::Import));
        findings.extend(
            check_hardcoded_text(&file)
                .into_iter()
                .map(Finding::HardcodedText),
        );

        if is_page_file(path, &pages_root) {
            counts.pages_analyzed += 1;
            findings.extend(check_server_translations(&file).map(Finding::ServerTranslations));
        }
    }

    let mut stats = Stats::new();
    stats.set_count("files_scanned", counts.files_scanned);
    stats.set_count("responsive_classes", counts.breakpoints.iter().sum());
    for (name, n) in breakpoints.names().iter().zip(&counts.breakpoints) {
        stats.set_count(format!("breakpoint_{}", name), *n);
    }
    stats.set_count("files_with_responsive", counts.files_with_responsive);
    stats.set_count("next_image_files", counts.next_image_files);
    stats.set_count("img_tag_files", counts.img_tag_files);
    stats.set_count("pages_analyzed", counts.pages_analyzed);

    let env_file = ctx.env_file();
    let project = check_project(&ProjectLayout {
        root: &ctx.root,
        pages_root: &pages_root,
        messages_dir: ctx.messages_dir(),
        env_file: &env_file,
        required_env: &config.required_env,
    });
    findings.extend(project.issues.into_iter().map(Finding::Project));

    if ctx.messages_dir().is_dir() {
        let targets = target_locales(ctx.messages_dir(), &config.baseline_locale, &config.locales)?;
        let translations = check_translations(
            &ctx.root,
            ctx.messages_dir(),
            &config.baseline_locale,
            &targets,
            &ctx.skip_policy(),
        )?;
        stats.set_count("total_translation_keys", translations.total_keys);
        for locale in &translations.locales {
            stats.set_count(format!("{}_missing", locale.locale), locale.missing);
            stats.set_count(
                format!("{}_untranslated", locale.locale),
                locale.untranslated,
            );
        }
        findings.extend(translations.issues);
    }

    if let Some(api_url) = project.api_url {
        stats.set_text("api_url", api_url);
    }

    findings.sort_by_key(|finding| finding.category());
    tracing::debug!(
        findings = findings.len(),
        files = counts.files_scanned,
        "analysis finished"
    );

    Ok(AnalysisReport {
        findings,
        stats,
        unreadable_files,
        inaccessible_paths: scan.skipped_count,
    })
}
