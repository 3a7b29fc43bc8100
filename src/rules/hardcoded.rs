//! Hardcoded heading text detection.
//!
//! A heading whose content is a long, capitalized, letters-only literal is
//! most likely user-facing copy that never went through `useTranslations`.

use std::sync::LazyLock;

use regex::Regex;

use crate::{core::source::SourceFile, issues::HardcodedTextIssue, utils::truncate_chars};

// Capture groups: 1 opening tag, 2 text content, 3 closing tag
static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(h[1-6])\b[^>]*>([^<]+)</(h[1-6])>").unwrap());

/// Minimum length (exclusive) of a heading text to be reported.
const MIN_TEXT_CHARS: usize = 10;

/// Maximum characters of the text kept in the finding.
const MAX_DETAIL_CHARS: usize = 50;

pub fn check_hardcoded_text(file: &SourceFile) -> Vec<HardcodedTextIssue> {
    HEADING
        .captures_iter(&file.content)
        .filter(|caps| caps.get(1).map(|m| m.as_str()) == caps.get(3).map(|m| m.as_str()))
        .filter_map(|caps| {
            let text = caps.get(2)?;
            let trimmed = text.as_str().trim();
            if !looks_hardcoded(trimmed) {
                return None;
            }
            let leading = text.as_str().len() - text.as_str().trim_start().len();
            Some(HardcodedTextIssue {
                file_path: file.path.clone(),
                line: file.line_at(text.start() + leading),
                text: truncate_chars(trimmed, MAX_DETAIL_CHARS),
            })
        })
        .collect()
}

fn looks_hardcoded(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_uppercase()
        && text.chars().all(|c| c.is_alphabetic() || c.is_whitespace())
        && text.chars().count() > MIN_TEXT_CHARS
}
