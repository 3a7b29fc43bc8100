//! Skip-pattern policy.
//!
//! Decides which leaf values must pass through untouched: placeholders,
//! markup, URLs, contact details, brand names and short technical tokens.
//! The synchronizer consults it before translating a value, and the
//! untranslated check consults it before counting an identical value.

use crate::config::SkipConfig;

/// Structural markers meaning the value carries placeholders, markup or links.
pub const DEFAULT_MARKERS: &[&str] = &["{", "}", "<", ">", "http://", "https://", "${", "www."];

/// Markers for contact details: emails and phone numbers.
pub const DEFAULT_KEEP_AS_IS: &[&str] = &["@", "+"];

/// Whole-value technical terms and abbreviations.
pub const DEFAULT_TECHNICAL_TERMS: &[&str] = &[
    "EUR", "USD", "GBP", "RON", "VIN", "ID", "PDF", "API", "URL", "HTML", "CSS", "JS", "JSON",
    "XML",
];

/// Values at or below this many characters (trimmed) are treated as codes.
pub const MAX_SHORT_TOKEN_CHARS: usize = 2;

/// Why a value is kept verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Blank,
    Marker,
    KeepAsIs,
    TechnicalTerm,
    ShortToken,
}

#[derive(Debug, Clone)]
pub struct SkipPolicy {
    markers: Vec<String>,
    keep_as_is: Vec<String>,
    technical_terms: Vec<String>,
}

impl Default for SkipPolicy {
    fn default() -> Self {
        Self {
            markers: DEFAULT_MARKERS.iter().map(|s| s.to_string()).collect(),
            keep_as_is: DEFAULT_KEEP_AS_IS.iter().map(|s| s.to_string()).collect(),
            technical_terms: DEFAULT_TECHNICAL_TERMS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl SkipPolicy {
    /// Default policy extended with the configured brand names and terms.
    pub fn from_config(config: &SkipConfig) -> Self {
        let mut policy = Self::default();
        policy.keep_as_is.extend(config.keep_as_is.iter().cloned());
        policy
            .technical_terms
            .extend(config.technical_terms.iter().cloned());
        policy
    }

    /// Returns the first rule that forces `value` to stay unchanged.
    pub fn skip_reason(&self, value: &str) -> Option<SkipReason> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Some(SkipReason::Blank);
        }
        if self.markers.iter().any(|m| value.contains(m.as_str())) {
            return Some(SkipReason::Marker);
        }
        if self.keep_as_is.iter().any(|m| value.contains(m.as_str())) {
            return Some(SkipReason::KeepAsIs);
        }
        if self.technical_terms.iter().any(|t| t == trimmed) {
            return Some(SkipReason::TechnicalTerm);
        }
        if trimmed.chars().count() <= MAX_SHORT_TOKEN_CHARS {
            return Some(SkipReason::ShortToken);
        }
        None
    }

    pub fn should_skip(&self, value: &str) -> bool {
        self.skip_reason(value).is_some()
    }
}
