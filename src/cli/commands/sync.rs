use std::{collections::HashSet, path::PathBuf, time::Duration};

use anyhow::{Context, Result, bail};

use super::super::{args::SyncCommand, exit_status::ExitStatus, report::print_sync};
use super::{LocaleSyncSummary, SyncSummary};
use crate::core::{
    ProjectContext,
    file_scanner::display_path,
    locale::{
        Dictionary, LeafTranslator, LocaleFile, LocaleTree, SkipPolicy, deep_merge,
        flatten_keys, get_key, locale_path, missing_keys, remove_key, synchronize,
        target_locales, untranslated_keys,
    },
    translate::{CachedTranslator, GoogleTranslate},
};

pub fn sync(cmd: SyncCommand) -> Result<ExitStatus> {
    let ctx = ProjectContext::load(&cmd.common)?;
    let baseline_locale = ctx.config.baseline_locale.clone();
    let messages_dir = ctx.messages_dir();

    let baseline_path = locale_path(messages_dir, &baseline_locale);
    if !baseline_path.is_file() {
        bail!(
            "Baseline locale file not found: {}",
            display_path(&ctx.root, &baseline_path)
        );
    }
    let baseline = LocaleFile::open(&baseline_path, &baseline_locale)?;

    let targets: Vec<String> = if cmd.locales.is_empty() {
        target_locales(messages_dir, &baseline_locale, &ctx.config.locales)?
    } else {
        cmd.locales
            .iter()
            .filter(|locale| **locale != baseline_locale)
            .cloned()
            .collect()
    };

    let machine_config = &ctx.config.machine_translation;
    let machine_enabled = cmd.machine || machine_config.enabled;
    let mut machine = machine_enabled.then(|| {
        let provider = GoogleTranslate::new(
            machine_config.endpoint.clone(),
            Duration::from_secs(machine_config.timeout_secs),
        );
        CachedTranslator::new(
            Box::new(provider),
            baseline_locale.clone(),
            Duration::from_millis(machine_config.request_delay_ms),
        )
    });

    let dry_run = cmd.dry_run || cmd.check;
    let run = LocaleSync {
        ctx: &ctx,
        baseline: &baseline,
        policy: ctx.skip_policy(),
        dictionaries_dir: ctx.dictionaries_dir(),
        overrides_dir: ctx.overrides_dir(),
        dry_run,
    };

    let mut locales = Vec::with_capacity(targets.len());
    for locale in &targets {
        locales.push(run.sync_locale(locale, machine.as_mut())?);
    }

    let summary = SyncSummary {
        baseline_locale,
        locales,
        dry_run,
        machine_enabled,
        provider_calls: machine.as_ref().map_or(0, CachedTranslator::calls),
    };
    print_sync(&summary);

    if cmd.check && summary.total_changes() > 0 {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}

/// Settings shared by every target locale of one run.
struct LocaleSync<'a> {
    ctx: &'a ProjectContext,
    baseline: &'a LocaleFile,
    policy: SkipPolicy,
    dictionaries_dir: PathBuf,
    overrides_dir: PathBuf,
    dry_run: bool,
}

impl LocaleSync<'_> {
    /// Remove deprecated keys, apply overrides, then merge the baseline.
    fn sync_locale(
        &self,
        locale: &str,
        machine: Option<&mut CachedTranslator>,
    ) -> Result<LocaleSyncSummary> {
        let path = locale_path(self.ctx.messages_dir(), locale);
        let created = !path.exists();
        let mut target = LocaleFile::open_or_empty(&path, locale)?;
        let loaded = target.tree.clone();

        let deprecated_removed = self.remove_deprecated(&mut target.tree);

        let overrides = self.load_overrides(locale)?;
        let pinned: HashSet<String> = overrides
            .as_ref()
            .map(|o| flatten_keys(&o.tree).into_iter().collect())
            .unwrap_or_default();

        let missing_before = missing_keys(&self.baseline.tree, &target.tree).len();
        let untranslated_before =
            untranslated_keys(&self.baseline.tree, &target.tree, &self.policy)
                .iter()
                .filter(|key| !pinned.contains(*key))
                .count();

        // Override leaves are pinned: merged first, then skipped by the synchronizer.
        let overrides_applied = overrides
            .as_ref()
            .map_or(0, |o| deep_merge(&mut target.tree, &o.tree));

        let dictionary = Dictionary::load(&self.dictionaries_dir, locale)?;
        tracing::debug!(
            "{}: {} dictionary entries, {} missing keys, {} pinned",
            locale,
            dictionary.len(),
            missing_before,
            pinned.len()
        );

        let mut translator = LeafTranslator {
            locale,
            policy: &self.policy,
            dictionary: &dictionary,
            machine,
            pinned: &pinned,
        };
        let report = synchronize(&self.baseline.tree, &mut target.tree, &mut translator);

        let missing_after = missing_keys(&self.baseline.tree, &target.tree).len();

        let summary = LocaleSyncSummary {
            locale: locale.to_string(),
            file_path: display_path(&self.ctx.root, &path),
            created,
            deprecated_removed,
            overrides_applied,
            missing_before,
            untranslated_before,
            missing_after,
            report,
        };

        if !self.dry_run && (created || target.tree != loaded) {
            target.save()?;
        }

        Ok(summary)
    }

    /// Drop deprecated keys. A key the baseline still defines would come back
    /// on every run, so it is kept.
    fn remove_deprecated(&self, tree: &mut LocaleTree) -> usize {
        let mut removed = 0;
        for key in &self.ctx.config.deprecated_keys {
            if get_key(&self.baseline.tree, key).is_some() {
                tracing::warn!(
                    "deprecated key {} is still defined in the baseline locale; keeping it",
                    key
                );
                continue;
            }
            if remove_key(tree, key) {
                removed += 1;
            }
        }
        removed
    }

    fn load_overrides(&self, locale: &str) -> Result<Option<LocaleFile>> {
        let path = locale_path(&self.overrides_dir, locale);
        if !path.is_file() {
            return Ok(None);
        }
        let overrides = LocaleFile::open(&path, locale)
            .with_context(|| format!("Invalid overrides for {}", locale))?;
        Ok(Some(overrides))
    }
}
