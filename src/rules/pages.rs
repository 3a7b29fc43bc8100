//! Localized page checks.

use std::path::Path;

use crate::{core::source::SourceFile, issues::ServerTranslationsIssue};

const PAGE_FILE_NAME: &str = "page.tsx";

/// A `page.tsx` below the localized route segment.
pub fn is_page_file(path: &Path, pages_root: &Path) -> bool {
    path.file_name().is_some_and(|name| name == PAGE_FILE_NAME) && path.starts_with(pages_root)
}

/// `useTranslations` is a hook; the page must opt into client rendering.
pub fn check_server_translations(file: &SourceFile) -> Option<ServerTranslationsIssue> {
    if file.content.contains("useTranslations") && !file.is_client_component() {
        Some(ServerTranslationsIssue {
            file_path: file.path.clone(),
        })
    } else {
        None
    }
}
