use std::{fs, path::Path};

use crate::utils::{build_line_index, offset_to_line};

/// A source file loaded for rule checks.
pub struct SourceFile {
    /// Path relative to the project root, forward slashes.
    pub path: String,
    pub content: String,
    line_index: Vec<usize>,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let line_index = build_line_index(&content);
        Self {
            path: path.into(),
            content,
            line_index,
        }
    }

    /// Read a file; `None` when it is unreadable or not valid UTF-8.
    pub fn read(full_path: &Path, display: String) -> Option<Self> {
        match fs::read_to_string(full_path) {
            Ok(content) => Some(Self::new(display, content)),
            Err(e) => {
                tracing::debug!("skipping {}: {}", full_path.display(), e);
                None
            }
        }
    }

    /// 1-based line of a byte offset.
    pub fn line_at(&self, offset: usize) -> usize {
        offset_to_line(&self.line_index, offset)
    }

    /// The file declares the `'use client'` directive.
    pub fn is_client_component(&self) -> bool {
        self.content.contains("'use client'") || self.content.contains("\"use client\"")
    }
}
