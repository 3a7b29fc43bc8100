//! Recursive merge of the baseline tree into a target tree.
//!
//! For every baseline key the target ends up with the same key. Nested
//! mappings are created (or coerced) as needed, and string leaves that are
//! absent, of the wrong shape, or still identical to the baseline are
//! replaced following the leaf policy:
//!
//! 1. skip pattern ⇒ baseline value
//! 2. dictionary entry ⇒ dictionary value
//! 3. machine translation (if enabled) ⇒ provider value, or baseline value on failure
//! 4. otherwise ⇒ baseline value
//!
//! Pinned paths (the leaves of the override tree) are left alone entirely.

use std::collections::HashSet;

use serde_json::{Map, Value};

use super::{
    dictionary::Dictionary,
    skip::SkipPolicy,
    tree::{LocaleTree, join_key},
};
use crate::core::translate::{CachedTranslator, MachineOutcome, ProviderError};

/// A leaf whose machine translation failed; the baseline value was kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationFailure {
    pub key: String,
    pub text: String,
    pub error: ProviderError,
}

/// Counters for one target locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Leaves inserted or whose value changed.
    pub changed: usize,
    /// Leaves kept verbatim because of a skip pattern.
    pub skipped: usize,
    pub from_dictionary: usize,
    pub machine_translated: usize,
    /// Leaves left as the baseline value because no translation was available.
    pub untranslated: usize,
    /// Mappings created or coerced to match the baseline shape.
    pub nodes_created: usize,
    pub failures: Vec<TranslationFailure>,
}

/// Where a replacement leaf value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LeafSource {
    Skipped,
    Dictionary,
    Machine,
    Untranslated,
    Failed(ProviderError),
}

/// Translates leaves into one target language.
pub struct LeafTranslator<'a> {
    pub locale: &'a str,
    pub policy: &'a SkipPolicy,
    pub dictionary: &'a Dictionary,
    pub machine: Option<&'a mut CachedTranslator>,
    /// Dotted paths owned by overrides; never translated or coerced.
    pub pinned: &'a HashSet<String>,
}

impl LeafTranslator<'_> {
    fn translate(&mut self, value: &str) -> (String, LeafSource) {
        if self.policy.should_skip(value) {
            return (value.to_string(), LeafSource::Skipped);
        }

        if let Some(translated) = self.dictionary.lookup(value) {
            return (translated.to_string(), LeafSource::Dictionary);
        }

        let Some(machine) = self.machine.as_deref_mut() else {
            return (value.to_string(), LeafSource::Untranslated);
        };

        match machine.translate(value, self.locale) {
            MachineOutcome::Translated(translated) => (translated, LeafSource::Machine),
            MachineOutcome::Unchanged => (value.to_string(), LeafSource::Untranslated),
            MachineOutcome::Failed(err) => (value.to_string(), LeafSource::Failed(err)),
        }
    }
}

/// Merge `baseline` into `target` in place.
pub fn synchronize(
    baseline: &LocaleTree,
    target: &mut LocaleTree,
    translator: &mut LeafTranslator<'_>,
) -> SyncReport {
    let mut report = SyncReport::default();
    sync_node(baseline, target, translator, "", &mut report);
    report
}

fn sync_node(
    baseline: &LocaleTree,
    target: &mut LocaleTree,
    translator: &mut LeafTranslator<'_>,
    prefix: &str,
    report: &mut SyncReport,
) {
    for (key, baseline_value) in baseline {
        let path = join_key(prefix, key);
        if translator.pinned.contains(&path) {
            continue;
        }
        match baseline_value {
            Value::Object(baseline_child) => {
                if !matches!(target.get(key), Some(Value::Object(_))) {
                    target.insert(key.clone(), Value::Object(Map::new()));
                    report.nodes_created += 1;
                }
                if let Some(Value::Object(target_child)) = target.get_mut(key) {
                    sync_node(baseline_child, target_child, translator, &path, report);
                }
            }
            Value::String(text) => {
                let needs_translation = match target.get(key) {
                    Some(Value::String(current)) => current == text,
                    _ => true,
                };
                if !needs_translation {
                    continue;
                }

                let (replacement, source) = translator.translate(text);
                match source {
                    LeafSource::Skipped => report.skipped += 1,
                    LeafSource::Dictionary => report.from_dictionary += 1,
                    LeafSource::Machine => report.machine_translated += 1,
                    LeafSource::Untranslated => report.untranslated += 1,
                    LeafSource::Failed(error) => {
                        report.untranslated += 1;
                        report.failures.push(TranslationFailure {
                            key: path,
                            text: text.clone(),
                            error,
                        });
                    }
                }

                let replacement = Value::String(replacement);
                if target.get(key) != Some(&replacement) {
                    target.insert(key.clone(), replacement);
                    report.changed += 1;
                }
            }
            other => {
                if !target.contains_key(key) {
                    target.insert(key.clone(), other.clone());
                    report.changed += 1;
                }
            }
        }
    }
}
