//! Project-level checks: directory layout, root layout, next-intl wiring and
//! environment configuration.
//!
//! An absent input always becomes a finding; none of these checks fail the run.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    core::file_scanner::display_path,
    issues::{Category, ProjectIssue},
};

/// Inputs of the project checks, all resolved against the project root.
pub struct ProjectLayout<'a> {
    pub root: &'a Path,
    pub pages_root: &'a Path,
    pub messages_dir: &'a Path,
    pub env_file: &'a Path,
    pub required_env: &'a [String],
}

#[derive(Debug, Default)]
pub struct ProjectCheck {
    pub issues: Vec<ProjectIssue>,
    /// Value of the first required environment variable, when set.
    pub api_url: Option<String>,
}

pub fn check_project(layout: &ProjectLayout<'_>) -> ProjectCheck {
    let mut check = ProjectCheck::default();
    check_structure(layout, &mut check.issues);
    check_root_layout(layout, &mut check.issues);
    check_i18n_wiring(layout, &mut check.issues);
    check.api_url = check_env(layout, &mut check.issues);
    check
}

fn push(
    issues: &mut Vec<ProjectIssue>,
    layout: &ProjectLayout<'_>,
    category: Category,
    path: &Path,
    message: impl Into<String>,
) {
    issues.push(ProjectIssue {
        category,
        path: display_path(layout.root, path),
        message: message.into(),
    });
}

fn read_optional(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            if path.exists() {
                tracing::debug!("cannot read {}: {}", path.display(), e);
            }
            None
        }
    }
}

fn check_structure(layout: &ProjectLayout<'_>, issues: &mut Vec<ProjectIssue>) {
    if !layout.pages_root.is_dir() {
        push(
            issues,
            layout,
            Category::Structure,
            layout.pages_root,
            "Missing [locale] directory",
        );
    }
    if !layout.messages_dir.is_dir() {
        push(
            issues,
            layout,
            Category::Structure,
            layout.messages_dir,
            "Missing messages directory",
        );
    }
}

fn check_root_layout(layout: &ProjectLayout<'_>, issues: &mut Vec<ProjectIssue>) {
    let path = layout.pages_root.join("layout.tsx");
    let Some(content) = read_optional(&path) else {
        return;
    };
    if !content.contains("viewport") {
        push(
            issues,
            layout,
            Category::Mobile,
            &path,
            "Missing viewport meta tag",
        );
    }
    if !content.contains("next/font") {
        push(
            issues,
            layout,
            Category::Performance,
            &path,
            "Fonts not optimized with next/font",
        );
    }
}

fn check_i18n_wiring(layout: &ProjectLayout<'_>, issues: &mut Vec<ProjectIssue>) {
    let i18n_dir = layout.root.join("src").join("i18n");

    let routing = i18n_dir.join("routing.ts");
    match read_optional(&routing) {
        None => push(
            issues,
            layout,
            Category::Config,
            &routing,
            "Missing i18n routing configuration",
        ),
        Some(content) if !content.contains("localePrefix") => push(
            issues,
            layout,
            Category::Config,
            &routing,
            "localePrefix not configured in routing",
        ),
        Some(_) => {}
    }

    let middleware_candidates: [PathBuf; 2] = [
        layout.root.join("middleware.ts"),
        layout.root.join("src").join("middleware.ts"),
    ];
    if !middleware_candidates.iter().any(|p| p.is_file()) {
        push(
            issues,
            layout,
            Category::Config,
            &middleware_candidates[0],
            "Missing middleware.ts",
        );
    }

    let request = i18n_dir.join("request.ts");
    if !request.is_file() {
        push(
            issues,
            layout,
            Category::Config,
            &request,
            "Missing i18n request configuration",
        );
    }
}

fn check_env(layout: &ProjectLayout<'_>, issues: &mut Vec<ProjectIssue>) -> Option<String> {
    let Some(content) = read_optional(layout.env_file) else {
        push(
            issues,
            layout,
            Category::Config,
            layout.env_file,
            "Missing environment file",
        );
        return None;
    };

    let vars = parse_env(&content);
    let lookup = |name: &str| {
        vars.iter()
            .rev()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.clone())
    };

    for name in layout.required_env {
        if lookup(name).is_none_or(|value| value.is_empty()) {
            push(
                issues,
                layout,
                Category::Config,
                layout.env_file,
                format!("{} not set", name),
            );
        }
    }

    layout
        .required_env
        .first()
        .and_then(|name| lookup(name))
        .filter(|value| !value.is_empty())
}

/// `KEY=value` pairs of a dotenv file, in file order.
fn parse_env(content: &str) -> Vec<(&str, String)> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (key, value) = line.split_once('=')?;
            let value = value.trim();
            let unquoted = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
                .unwrap_or(value);
            Some((key.trim(), unquoted.to_string()))
        })
        .collect()
}
