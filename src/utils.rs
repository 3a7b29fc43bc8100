//! Common utility functions shared across the codebase.

/// Checks if the text contains at least one Unicode alphabetic character.
///
/// Returns false for empty strings, pure numbers, or pure symbols.
///
/// # Examples
///
/// ```
/// use parley::utils::contains_alphabetic;
///
/// assert!(contains_alphabetic("Hello"));
/// assert!(contains_alphabetic("你好"));
/// assert!(contains_alphabetic("Hello123"));
/// assert!(!contains_alphabetic("123"));
/// assert!(!contains_alphabetic("---"));
/// assert!(!contains_alphabetic("$100"));
/// assert!(!contains_alphabetic(""));
/// ```
pub fn contains_alphabetic(text: &str) -> bool {
    text.chars().any(|c| c.is_alphabetic())
}

/// Truncate text to at most `max` characters, appending `...` when cut.
///
/// ```
/// use parley::utils::truncate_chars;
///
/// assert_eq!(truncate_chars("Welcome", 10), "Welcome");
/// assert_eq!(truncate_chars("Welcome to the site", 7), "Welcome...");
/// ```
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

/// Byte offsets where each line of `content` starts.
///
/// Line 1 starts at offset 0, line 2 starts after the first '\n', etc.
pub fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Find the 1-based line number for a byte offset using binary search.
pub fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}
