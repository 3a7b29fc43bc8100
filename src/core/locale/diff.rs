//! Read-only comparisons between the baseline tree and a target tree.

use serde_json::Value;

use super::{
    skip::SkipPolicy,
    tree::{LocaleTree, join_key},
};
use crate::utils::contains_alphabetic;

/// Dotted keys present in `baseline` but absent from `target`, in baseline order.
///
/// A leaf is missing when the target has nothing or a mapping at its path.
/// An empty baseline mapping is reported by its own path when the target has
/// no mapping there, since the synchronizer creates it.
pub fn missing_keys(baseline: &LocaleTree, target: &LocaleTree) -> Vec<String> {
    let mut keys = Vec::new();
    collect_missing(baseline, Some(target), "", &mut keys);
    keys
}

fn collect_missing(
    baseline: &LocaleTree,
    target: Option<&LocaleTree>,
    prefix: &str,
    keys: &mut Vec<String>,
) {
    for (key, baseline_value) in baseline {
        let path = join_key(prefix, key);
        let target_value = target.and_then(|t| t.get(key));
        match baseline_value {
            Value::Object(baseline_child) => {
                let target_child = target_value.and_then(Value::as_object);
                if baseline_child.is_empty() {
                    if target_child.is_none() {
                        keys.push(path);
                    }
                } else {
                    collect_missing(baseline_child, target_child, &path, keys);
                }
            }
            _ => {
                if target_value.is_none_or(Value::is_object) {
                    keys.push(path);
                }
            }
        }
    }
}

/// Dotted keys whose target value is verbatim the baseline value.
///
/// Only non-empty string leaves with an alphabetic character count, and values
/// the skip policy keeps verbatim (emails, phone numbers, brands, codes) are
/// exempt. Recursion follows keys that are mappings on both sides.
pub fn untranslated_keys(
    baseline: &LocaleTree,
    target: &LocaleTree,
    policy: &SkipPolicy,
) -> Vec<String> {
    let mut keys = Vec::new();
    collect_untranslated(baseline, target, policy, "", &mut keys);
    keys
}

fn collect_untranslated(
    baseline: &LocaleTree,
    target: &LocaleTree,
    policy: &SkipPolicy,
    prefix: &str,
    keys: &mut Vec<String>,
) {
    for (key, baseline_value) in baseline {
        let path = join_key(prefix, key);
        match (baseline_value, target.get(key)) {
            (Value::Object(baseline_child), Some(Value::Object(target_child))) => {
                collect_untranslated(baseline_child, target_child, policy, &path, keys);
            }
            (Value::String(expected), Some(Value::String(actual)))
                if expected == actual
                    && contains_alphabetic(expected)
                    && !policy.should_skip(expected) =>
            {
                keys.push(path);
            }
            _ => {}
        }
    }
}
