//! Translation completeness of the locale files.
//!
//! Compares every target locale against the baseline: keys missing from the
//! target, and values left identical to the baseline.

use std::path::Path;

use anyhow::{Result, bail};

use crate::{
    core::{
        file_scanner::display_path,
        locale::{
            LocaleFile, SkipPolicy, flatten_keys, locale_path, missing_keys, untranslated_keys,
        },
    },
    issues::{Finding, LocaleFileIssue, LocaleFileProblem, MissingKeysIssue, UntranslatedIssue},
};

/// Per-locale counters for the statistics block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleCounts {
    pub locale: String,
    pub missing: usize,
    pub untranslated: usize,
}

#[derive(Debug, Default)]
pub struct TranslationCheck {
    pub issues: Vec<Finding>,
    /// Number of leaf keys in the baseline locale.
    pub total_keys: usize,
    pub locales: Vec<LocaleCounts>,
}

/// Check `targets` against the baseline locale in `messages_dir`.
///
/// Fails only when the baseline file is absent or unreadable; problems with
/// target files become findings.
pub fn check_translations(
    root: &Path,
    messages_dir: &Path,
    baseline_locale: &str,
    targets: &[String],
    policy: &SkipPolicy,
) -> Result<TranslationCheck> {
    let baseline_path = locale_path(messages_dir, baseline_locale);
    if !baseline_path.is_file() {
        bail!(
            "Baseline locale file not found: {}",
            display_path(root, &baseline_path)
        );
    }
    let baseline = LocaleFile::open(&baseline_path, baseline_locale)?;

    let mut check = TranslationCheck {
        total_keys: flatten_keys(&baseline.tree).len(),
        ..Default::default()
    };

    for locale in targets {
        let path = locale_path(messages_dir, locale);
        let file_path = display_path(root, &path);

        if !path.is_file() {
            check.issues.push(Finding::LocaleFile(LocaleFileIssue {
                locale: locale.clone(),
                file_path,
                problem: LocaleFileProblem::Missing,
            }));
            continue;
        }

        let target = match LocaleFile::open(&path, locale) {
            Ok(target) => target,
            Err(err) => {
                check.issues.push(Finding::LocaleFile(LocaleFileIssue {
                    locale: locale.clone(),
                    file_path,
                    problem: LocaleFileProblem::Invalid(err.root_cause().to_string()),
                }));
                continue;
            }
        };

        let missing = missing_keys(&baseline.tree, &target.tree);
        let untranslated = untranslated_keys(&baseline.tree, &target.tree, policy);
        tracing::debug!(
            locale = locale.as_str(),
            missing = missing.len(),
            untranslated = untranslated.len(),
            "compared against {}",
            baseline_locale
        );

        check.locales.push(LocaleCounts {
            locale: locale.clone(),
            missing: missing.len(),
            untranslated: untranslated.len(),
        });

        if !missing.is_empty() {
            check.issues.push(Finding::MissingKeys(MissingKeysIssue {
                locale: locale.clone(),
                file_path: file_path.clone(),
                keys: missing,
            }));
        }
        if !untranslated.is_empty() {
            check.issues.push(Finding::Untranslated(UntranslatedIssue {
                locale: locale.clone(),
                file_path,
                keys: untranslated,
            }));
        }
    }

    Ok(check)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;
    use crate::issues::{FindingRecord, Report};

    fn targets(locales: &[&str]) -> Vec<String> {
        locales.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_missing_and_untranslated_per_locale() {
        let dir = tempdir().unwrap();
        let messages = dir.path().join("messages");
        fs::create_dir(&messages).unwrap();
        fs::write(
            messages.join("en.json"),
            r#"{"nav": {"home": "Home", "cars": "Browse Cars"}, "brand": "SafeTrade", "vin": "VIN"}"#,
        )
        .unwrap();
        fs::write(
            messages.join("de.json"),
            r#"{"nav": {"home": "Startseite", "cars": "Browse Cars"}, "vin": "VIN"}"#,
        )
        .unwrap();

        let check = check_translations(
            dir.path(),
            &messages,
            "en",
            &targets(&["de"]),
            &SkipPolicy::default(),
        )
        .unwrap();

        assert_eq!(check.total_keys, 4);
        assert_eq!(
            check.locales,
            vec![LocaleCounts {
                locale: "de".to_string(),
                missing: 1,
                untranslated: 1,
            }]
        );
        assert_eq!(check.issues.len(), 2);
        assert_eq!(check.issues[0].message(), "1 missing translation keys");
        assert_eq!(check.issues[0].details().as_deref(), Some("brand"));
        assert_eq!(check.issues[1].details().as_deref(), Some("nav.cars"));
    }

    #[test]
    fn test_missing_and_invalid_target_files() {
        let dir = tempdir().unwrap();
        let messages = dir.path().join("messages");
        fs::create_dir(&messages).unwrap();
        fs::write(messages.join("en.json"), r#"{"a": "Hello"}"#).unwrap();
        fs::write(messages.join("fr.json"), "{ not json").unwrap();

        let check = check_translations(
            dir.path(),
            &messages,
            "en",
            &targets(&["fr", "it"]),
            &SkipPolicy::default(),
        )
        .unwrap();

        let found: Vec<(String, String)> = check
            .issues
            .iter()
            .map(|i| (i.message(), file_of(i)))
            .collect();
        assert_eq!(
            found,
            vec![
                ("Invalid locale file".to_string(), "messages/fr.json".to_string()),
                ("Locale file missing".to_string(), "messages/it.json".to_string()),
            ]
        );
        assert!(check.locales.is_empty());
    }

    #[test]
    fn test_absent_baseline_is_fatal() {
        let dir = tempdir().unwrap();
        let messages = dir.path().join("messages");
        fs::create_dir(&messages).unwrap();
        fs::write(messages.join("de.json"), "{}").unwrap();

        let err = check_translations(
            dir.path(),
            &messages,
            "en",
            &targets(&["de"]),
            &SkipPolicy::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Baseline locale file not found"));
    }

    fn file_of(finding: &Finding) -> String {
        FindingRecord::from(finding).file.unwrap_or_default()
    }
}
