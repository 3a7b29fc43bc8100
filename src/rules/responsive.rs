//! Responsive design rules.
//!
//! Counts Tailwind breakpoint prefixes and flags fixed pixel-scale sizes that
//! have no responsive variant.

use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

use crate::{
    core::source::SourceFile,
    issues::{Dimension, FixedSizeIssue},
};

/// Characters that may precede a class token inside a class string.
const TOKEN_BOUNDARY: &str = r#"(?:^|[\s"'`{(,])"#;

static FIXED_WIDTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{}(w-\d{{3,}})\b", TOKEN_BOUNDARY)).unwrap()
});

static FIXED_HEIGHT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{}(h-\d{{3,}})\b", TOKEN_BOUNDARY)).unwrap()
});

/// Breakpoint-prefix matcher built from the configured breakpoint names.
pub struct Breakpoints {
    names: Vec<String>,
    prefix: Regex,
}

impl Breakpoints {
    pub fn new(names: &[String]) -> Result<Self> {
        // Longest first so `2xl` is tried before `xl`.
        let mut alternatives: Vec<&String> = names.iter().collect();
        alternatives.sort_by_key(|name| std::cmp::Reverse(name.len()));
        let alternation = alternatives
            .iter()
            .map(|name| regex::escape(name))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!("{}({}):", TOKEN_BOUNDARY, alternation);
        let prefix = Regex::new(&pattern)
            .with_context(|| format!("Invalid breakpoint list: {:?}", names))?;

        Ok(Self {
            names: names.to_vec(),
            prefix,
        })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Occurrences of each breakpoint prefix, in configured order.
    pub fn count(&self, content: &str) -> Vec<usize> {
        let mut counts = vec![0; self.names.len()];
        for caps in self.prefix.captures_iter(content) {
            if let Some(name) = caps.get(1)
                && let Some(idx) = self.names.iter().position(|n| n == name.as_str())
            {
                counts[idx] += 1;
            }
        }
        counts
    }

    /// Whether `rest` begins (after whitespace) with a breakpoint-prefixed class.
    fn starts_with_prefixed_class(&self, rest: &str) -> bool {
        let trimmed = rest.trim_start();
        if trimmed.len() == rest.len() {
            return false;
        }
        self.names.iter().any(|name| {
            trimmed
                .strip_prefix(name.as_str())
                .is_some_and(|after| after.starts_with(':'))
        })
    }
}

/// Fixed-size findings for one file: at most one width and one height finding.
pub fn check_fixed_sizes(file: &SourceFile, breakpoints: &Breakpoints) -> Vec<FixedSizeIssue> {
    if !file.content.contains("className=") {
        return Vec::new();
    }

    let mut issues = Vec::new();

    let unresponsive_width = FIXED_WIDTH
        .captures_iter(&file.content)
        .filter_map(|caps| caps.get(1))
        .find(|token| !breakpoints.starts_with_prefixed_class(&file.content[token.end()..]));
    if let Some(token) = unresponsive_width {
        issues.push(FixedSizeIssue {
            file_path: file.path.clone(),
            line: file.line_at(token.start()),
            dimension: Dimension::Width,
            token: token.as_str().to_string(),
        });
    }

    if let Some(token) = FIXED_HEIGHT
        .captures(&file.content)
        .and_then(|caps| caps.get(1))
    {
        issues.push(FixedSizeIssue {
            file_path: file.path.clone(),
            line: file.line_at(token.start()),
            dimension: Dimension::Height,
            token: token.as_str().to_string(),
        });
    }

    issues
}
