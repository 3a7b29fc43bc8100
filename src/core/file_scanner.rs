use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::config::TEST_FILE_PATTERNS;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// What to scan and what to leave out.
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions<'a> {
    pub includes: &'a [String],
    pub ignores: &'a [String],
    pub ignore_test_files: bool,
    /// File extensions without the leading dot.
    pub extensions: &'a [String],
}

/// Result of scanning files.
pub struct ScanResult {
    /// Matching source files, sorted.
    pub files: BTreeSet<PathBuf>,
    pub skipped_count: usize,
}

pub fn scan_files(base_dir: &Path, options: &ScanOptions<'_>) -> ScanResult {
    let mut files: BTreeSet<PathBuf> = BTreeSet::new();
    let mut skipped_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in options.ignores {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => tracing::warn!("invalid ignore pattern '{}': {}", p, e),
            }
        } else {
            literal_ignore_paths.push(base_dir.join(p));
        }
    }

    if options.ignore_test_files {
        for p in TEST_FILE_PATTERNS {
            if let Ok(pattern) = Pattern::new(p) {
                glob_patterns.push(pattern);
            }
        }
    }

    let dirs_to_scan: Vec<PathBuf> = if options.includes.is_empty() {
        vec![base_dir.to_path_buf()]
    } else {
        let mut paths = Vec::new();
        for inc in options.includes {
            if is_glob_pattern(inc) {
                let full_pattern = base_dir.join(inc);
                match glob(&full_pattern.to_string_lossy()) {
                    Ok(entries) => {
                        paths.extend(entries.flatten().filter(|entry| entry.is_dir()));
                    }
                    Err(e) => tracing::warn!("invalid include pattern '{}': {}", inc, e),
                }
            } else {
                let path = base_dir.join(inc);
                if path.exists() {
                    paths.push(path);
                } else {
                    tracing::warn!("include path does not exist: {}", path.display());
                }
            }
        }
        paths
    };

    for dir in dirs_to_scan {
        for entry in WalkDir::new(dir) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    tracing::warn!("cannot access path: {}", e);
                    continue;
                }
            };
            let path = entry.path();

            if literal_ignore_paths
                .iter()
                .any(|ignore_path| path.starts_with(ignore_path))
            {
                continue;
            }

            let path_str = path.to_string_lossy();
            if glob_patterns.iter().any(|p| p.matches(&path_str)) {
                continue;
            }

            if path.is_file() && has_extension(path, options.extensions) {
                files.insert(path.to_path_buf());
            }
        }
    }

    tracing::debug!(
        files = files.len(),
        skipped = skipped_count,
        "scanned {}",
        base_dir.display()
    );

    ScanResult {
        files,
        skipped_count,
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}

/// Path relative to `root` with forward slashes, for reports.
pub fn display_path(root: &Path, path: &Path) -> String {
    let Ok(relative) = path.strip_prefix(root) else {
        return path.to_string_lossy().into_owned();
    };
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
