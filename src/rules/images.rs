//! Raw `<img>` tag detection for the performance and accessibility rules.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    core::source::SourceFile,
    issues::{MissingAltIssue, RawImageIssue},
};

static IMG_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<img[\s/>]").unwrap());

static ALT_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\salt\s*=").unwrap());

static NEXT_IMAGE_IMPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"from\s+['"]next/image['"]"#).unwrap());

/// A raw `<img ...>` tag in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImgTag<'a> {
    pub offset: usize,
    pub text: &'a str,
}

impl ImgTag<'_> {
    pub fn has_alt(&self) -> bool {
        ALT_ATTRIBUTE.is_match(self.text)
    }

    /// Attributes spread in with `{...props}` may carry an alt.
    pub fn has_spread(&self) -> bool {
        self.text.contains("{...")
    }
}

/// Find every raw `<img>` tag. The tag ends at the first `>` outside of
/// braces and quotes, so `onError={() => ...}` does not cut it short.
pub fn find_img_tags(content: &str) -> Vec<ImgTag<'_>> {
    IMG_OPEN
        .find_iter(content)
        .map(|m| {
            let end = tag_end(content, m.start()).unwrap_or(content.len());
            ImgTag {
                offset: m.start(),
                text: &content[m.start()..end],
            }
        })
        .collect()
}

fn tag_end(content: &str, start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    for (i, c) in content[start..].char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'' | '`') if depth == 0 => quote = Some(c),
            (None, '{') => depth += 1,
            (None, '}') => depth = depth.saturating_sub(1),
            (None, '>') if depth == 0 => return Some(start + i + 1),
            _ => {}
        }
    }
    None
}

pub fn imports_next_image(file: &SourceFile) -> bool {
    NEXT_IMAGE_IMPORT.is_match(&file.content)
}

/// One finding per raw `<img>` tag.
pub fn check_raw_images(file: &SourceFile, tags: &[ImgTag<'_>]) -> Vec<RawImageIssue> {
    tags.iter()
        .map(|tag| RawImageIssue {
            file_path: file.path.clone(),
            line: file.line_at(tag.offset),
        })
        .collect()
}

/// One finding per raw `<img>` tag that has no `alt` attribute.
pub fn check_missing_alt(file: &SourceFile, tags: &[ImgTag<'_>]) -> Vec<MissingAltIssue> {
    tags.iter()
        .filter(|tag| !tag.has_alt() && !tag.has_spread())
        .map(|tag| MissingAltIssue {
            file_path: file.path.clone(),
            line: file.line_at(tag.offset),
        })
        .collect()
}
