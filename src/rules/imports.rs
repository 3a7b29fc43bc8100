//! Navigation imports that bypass the locale-aware wrappers.
//!
//! With next-intl, `Link`, `useRouter` and `usePathname` should come from the
//! project's navigation module so that the active locale is kept in URLs.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    core::source::SourceFile,
    issues::{ImportIssue, ImportProblem},
};

static NEXT_LINK_IMPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"import\s+Link\s+from\s+['"]next/link['"]"#).unwrap());

// Capture group 1: the imported names
static NEXT_NAVIGATION_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s*\{([^}]*)\}\s*from\s*['"]next/navigation['"]"#).unwrap()
});

pub fn check_imports(file: &SourceFile) -> Vec<ImportIssue> {
    let mut issues = Vec::new();

    if let Some(m) = NEXT_LINK_IMPORT.find(&file.content) {
        issues.push(ImportIssue {
            file_path: file.path.clone(),
            line: file.line_at(m.start()),
            problem: ImportProblem::Link,
        });
    }

    if !file.is_client_component() {
        return issues;
    }

    let uses_params = file.content.contains("useParams");
    for caps in NEXT_NAVIGATION_IMPORT.captures_iter(&file.content) {
        let Some(statement) = caps.get(0) else {
            continue;
        };
        let names: Vec<&str> = caps
            .get(1)
            .map(|list| imported_names(list.as_str()))
            .unwrap_or_default();
        let line = file.line_at(statement.start());

        if names.contains(&"useRouter") && !uses_params {
            issues.push(ImportIssue {
                file_path: file.path.clone(),
                line,
                problem: ImportProblem::Router,
            });
        }
        if names.contains(&"usePathname") {
            issues.push(ImportIssue {
                file_path: file.path.clone(),
                line,
                problem: ImportProblem::Pathname,
            });
        }
    }

    issues
}

/// Imported names of `{ a, b as c, type D }`; aliases reduce to the left side.
fn imported_names(list: &str) -> Vec<&str> {
    list.split(',')
        .filter_map(|spec| {
            let spec = spec.trim();
            let spec = spec.strip_prefix("type ").unwrap_or(spec).trim();
            spec.split_whitespace().next()
        })
        .collect()
}
