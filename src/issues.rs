//! Finding types produced by the analyzer.
//!
//! Each finding is self-contained with everything the reporters need: the
//! console report groups them by category, the JSON report serializes them
//! as records.

use enum_dispatch::enum_dispatch;
use serde::Serialize;

// ============================================================
// Category
// ============================================================

/// Report section a finding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Structure,
    Config,
    Translations,
    Mobile,
    Performance,
    Accessibility,
    Imports,
    Pages,
    Hardcoded,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Structure => "structure",
            Category::Config => "config",
            Category::Translations => "translations",
            Category::Mobile => "mobile",
            Category::Performance => "performance",
            Category::Accessibility => "accessibility",
            Category::Imports => "imports",
            Category::Pages => "pages",
            Category::Hardcoded => "hardcoded",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================
// Source file findings
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Dimension {
    Width,
    Height,
}

/// Fixed pixel-scale width or height utility with no responsive variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSizeIssue {
    pub file_path: String,
    pub line: usize,
    pub dimension: Dimension,
    /// The offending class token, e.g. `w-500`.
    pub token: String,
}

/// Raw `<img>` tag instead of the optimized `next/image` component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImageIssue {
    pub file_path: String,
    pub line: usize,
}

/// `<img>` tag without an `alt` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingAltIssue {
    pub file_path: String,
    pub line: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ImportProblem {
    /// `import Link from 'next/link'`
    Link,
    /// `useRouter` from `next/navigation` in a client component
    Router,
    /// `usePathname` from `next/navigation` in a client component
    Pathname,
}

impl ImportProblem {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportProblem::Link => "wrong_link_import",
            ImportProblem::Router => "wrong_router_import",
            ImportProblem::Pathname => "wrong_pathname_import",
        }
    }
}

/// Import that bypasses the locale-aware navigation helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportIssue {
    pub file_path: String,
    pub line: usize,
    pub problem: ImportProblem,
}

/// Heading with long literal text that should probably be translated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardcodedTextIssue {
    pub file_path: String,
    pub line: usize,
    pub text: String,
}

/// Page calling `useTranslations` without being a client component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerTranslationsIssue {
    pub file_path: String,
}

// ============================================================
// Project findings
// ============================================================

/// Project-level problem: an expected file, directory, or setting is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectIssue {
    pub category: Category,
    pub path: String,
    pub message: String,
}

// ============================================================
// Locale findings
// ============================================================

/// Keys present in the baseline locale but missing from a target locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKeysIssue {
    pub locale: String,
    pub file_path: String,
    pub keys: Vec<String>,
}

/// Keys whose target value is identical to the baseline value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UntranslatedIssue {
    pub locale: String,
    pub file_path: String,
    pub keys: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleFileProblem {
    Missing,
    Invalid(String),
}

/// Target locale file that is absent or cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFileIssue {
    pub locale: String,
    pub file_path: String,
    pub problem: LocaleFileProblem,
}

// ============================================================
// Finding Enum
// ============================================================

/// One reported problem.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    FixedSize(FixedSizeIssue),
    RawImage(RawImageIssue),
    MissingAlt(MissingAltIssue),
    Import(ImportIssue),
    HardcodedText(HardcodedTextIssue),
    ServerTranslations(ServerTranslationsIssue),
    Project(ProjectIssue),
    MissingKeys(MissingKeysIssue),
    Untranslated(UntranslatedIssue),
    LocaleFile(LocaleFileIssue),
}

// ============================================================
// Report Trait
// ============================================================

/// Where a finding points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLocation<'a> {
    File { path: &'a str, line: Option<usize> },
    Locale { locale: &'a str, path: &'a str },
}

/// Number of sample keys kept in locale findings' details.
pub const MAX_SAMPLE_KEYS: usize = 5;

/// Trait for types that can be reported.
///
/// Implemented by every finding type; `enum_dispatch` forwards the calls
/// from the `Finding` enum.
#[enum_dispatch]
pub trait Report {
    fn category(&self) -> Category;

    fn location(&self) -> ReportLocation<'_>;

    /// One-line issue description.
    fn message(&self) -> String;

    /// Optional extra context (matched text, sample keys).
    fn details(&self) -> Option<String> {
        None
    }

    /// Number of occurrences summarized by this finding.
    fn count(&self) -> Option<usize> {
        None
    }
}

impl Report for FixedSizeIssue {
    fn category(&self) -> Category {
        Category::Mobile
    }

    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
            line: Some(self.line),
        }
    }

    fn message(&self) -> String {
        match self.dimension {
            Dimension::Width => "Fixed width without responsive breakpoint".to_string(),
            Dimension::Height => "Fixed height - might overflow on mobile".to_string(),
        }
    }

    fn details(&self) -> Option<String> {
        Some(self.token.clone())
    }
}

impl Report for RawImageIssue {
    fn category(&self) -> Category {
        Category::Performance
    }

    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
            line: Some(self.line),
        }
    }

    fn message(&self) -> String {
        "Using <img> instead of the optimized Image component".to_string()
    }
}

impl Report for MissingAltIssue {
    fn category(&self) -> Category {
        Category::Accessibility
    }

    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
            line: Some(self.line),
        }
    }

    fn message(&self) -> String {
        "Image without alt text".to_string()
    }
}

impl Report for ImportIssue {
    fn category(&self) -> Category {
        Category::Imports
    }

    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
            line: Some(self.line),
        }
    }

    fn message(&self) -> String {
        match self.problem {
            ImportProblem::Link => {
                "Link imported from next/link instead of the locale-aware navigation"
            }
            ImportProblem::Router => {
                "useRouter imported from next/navigation instead of the locale-aware navigation"
            }
            ImportProblem::Pathname => {
                "usePathname imported from next/navigation instead of the locale-aware navigation"
            }
        }
        .to_string()
    }

    fn details(&self) -> Option<String> {
        Some(self.problem.as_str().to_string())
    }
}

impl Report for HardcodedTextIssue {
    fn category(&self) -> Category {
        Category::Hardcoded
    }

    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
            line: Some(self.line),
        }
    }

    fn message(&self) -> String {
        "Possible hardcoded text".to_string()
    }

    fn details(&self) -> Option<String> {
        Some(self.text.clone())
    }
}

impl Report for ServerTranslationsIssue {
    fn category(&self) -> Category {
        Category::Pages
    }

    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
            line: None,
        }
    }

    fn message(&self) -> String {
        "Uses translations but is not a client component".to_string()
    }
}

impl Report for ProjectIssue {
    fn category(&self) -> Category {
        self.category
    }

    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.path,
            line: None,
        }
    }

    fn message(&self) -> String {
        self.message.clone()
    }
}

impl Report for MissingKeysIssue {
    fn category(&self) -> Category {
        Category::Translations
    }

    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Locale {
            locale: &self.locale,
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        format!("{} missing translation keys", self.keys.len())
    }

    fn details(&self) -> Option<String> {
        Some(sample_keys(&self.keys))
    }

    fn count(&self) -> Option<usize> {
        Some(self.keys.len())
    }
}

impl Report for UntranslatedIssue {
    fn category(&self) -> Category {
        Category::Translations
    }

    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Locale {
            locale: &self.locale,
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        format!("{} values identical to the baseline locale", self.keys.len())
    }

    fn details(&self) -> Option<String> {
        Some(sample_keys(&self.keys))
    }

    fn count(&self) -> Option<usize> {
        Some(self.keys.len())
    }
}

impl Report for LocaleFileIssue {
    fn category(&self) -> Category {
        Category::Translations
    }

    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Locale {
            locale: &self.locale,
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        match &self.problem {
            LocaleFileProblem::Missing => "Locale file missing".to_string(),
            LocaleFileProblem::Invalid(_) => "Invalid locale file".to_string(),
        }
    }

    fn details(&self) -> Option<String> {
        match &self.problem {
            LocaleFileProblem::Missing => None,
            LocaleFileProblem::Invalid(error) => Some(error.clone()),
        }
    }
}

fn sample_keys(keys: &[String]) -> String {
    let mut sorted: Vec<&str> = keys.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    let shown = sorted
        .iter()
        .take(MAX_SAMPLE_KEYS)
        .copied()
        .collect::<Vec<_>>()
        .join(", ");
    if keys.len() > MAX_SAMPLE_KEYS {
        format!("{}, ...", shown)
    } else {
        shown
    }
}

// ============================================================
// Serialized record (JSON report)
// ============================================================

/// Flat JSON form of a finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FindingRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    pub issue: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl From<&Finding> for FindingRecord {
    fn from(finding: &Finding) -> Self {
        let (file, line, lang) = match finding.location() {
            ReportLocation::File { path, line } => (Some(path.to_string()), line, None),
            ReportLocation::Locale { locale, path } => {
                (Some(path.to_string()), None, Some(locale.to_string()))
            }
        };
        Self {
            file,
            line,
            lang,
            issue: finding.message(),
            count: finding.count(),
            detail: finding.details(),
        }
    }
}
