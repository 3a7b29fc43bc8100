//! Locale trees: nested key → string mappings loaded from JSON files.
//!
//! A tree is a `serde_json::Map` (insertion ordered). Objects are nodes,
//! strings are leaves, and any other JSON value is an opaque leaf that is
//! copied but never translated.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

pub type LocaleTree = Map<String, Value>;

/// A locale file on disk together with its parsed tree.
#[derive(Debug, Clone)]
pub struct LocaleFile {
    pub locale: String,
    pub path: PathBuf,
    pub tree: LocaleTree,
}

impl LocaleFile {
    /// Open an existing locale file; fails if it is missing or not a JSON object.
    pub fn open(path: &Path, locale: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read locale file: {}", path.display()))?;
        let tree = parse_tree(&content)
            .with_context(|| format!("Failed to parse locale file: {}", path.display()))?;
        Ok(Self {
            locale: locale.to_string(),
            path: path.to_path_buf(),
            tree,
        })
    }

    /// Open a locale file, starting from an empty tree when it does not exist.
    pub fn open_or_empty(path: &Path, locale: &str) -> Result<Self> {
        if path.exists() {
            Self::open(path, locale)
        } else {
            Ok(Self {
                locale: locale.to_string(),
                path: path.to_path_buf(),
                tree: LocaleTree::new(),
            })
        }
    }

    /// Save with 2-space indentation, literal non-ASCII and a trailing newline.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&self.path, render_tree(&self.tree)?)
            .with_context(|| format!("Failed to write file: {}", self.path.display()))?;

        Ok(())
    }
}

pub fn parse_tree(content: &str) -> Result<LocaleTree> {
    match serde_json::from_str::<Value>(content)? {
        Value::Object(map) => Ok(map),
        _ => bail!("Root of locale file must be an object"),
    }
}

pub fn render_tree(tree: &LocaleTree) -> Result<String> {
    let content = serde_json::to_string_pretty(tree).context("Failed to serialize JSON")?;
    Ok(format!("{}\n", content))
}

/// Path of the locale file for `locale` inside `messages_dir`.
pub fn locale_path(messages_dir: &Path, locale: &str) -> PathBuf {
    messages_dir.join(format!("{}.json", locale))
}

/// Locale codes of every `*.json` file in `messages_dir`, sorted.
pub fn discover_locales(messages_dir: &Path) -> Result<Vec<String>> {
    let mut locales = Vec::new();
    for entry in fs::read_dir(messages_dir)
        .with_context(|| format!("Failed to read directory: {}", messages_dir.display()))?
    {
        let path = entry?.path();
        if path.is_file()
            && path.extension().and_then(|e| e.to_str()) == Some("json")
            && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
        {
            locales.push(stem.to_string());
        }
    }
    locales.sort();
    Ok(locales)
}

/// Target locales: the configured list, else every locale file found,
/// never including the baseline.
pub fn target_locales(
    messages_dir: &Path,
    baseline: &str,
    configured: &[String],
) -> Result<Vec<String>> {
    let candidates = if !configured.is_empty() {
        configured.to_vec()
    } else if messages_dir.is_dir() {
        discover_locales(messages_dir)?
    } else {
        Vec::new()
    };
    Ok(candidates
        .into_iter()
        .filter(|locale| locale != baseline)
        .collect())
}

/// Flatten a tree into dotted key paths. Nodes recurse; everything else is a leaf.
///
/// ```
/// use parley::core::locale::flatten_keys;
/// use serde_json::json;
///
/// let tree = json!({"nav": {"home": "Home"}, "count": 1});
/// let keys = flatten_keys(tree.as_object().unwrap());
/// assert_eq!(keys, vec!["nav.home", "count"]);
/// ```
pub fn flatten_keys(tree: &LocaleTree) -> Vec<String> {
    let mut keys = Vec::new();
    collect_keys(tree, "", &mut keys);
    keys
}

fn collect_keys(node: &LocaleTree, prefix: &str, keys: &mut Vec<String>) {
    for (key, value) in node {
        let path = join_key(prefix, key);
        match value {
            Value::Object(child) => collect_keys(child, &path, keys),
            _ => keys.push(path),
        }
    }
}

pub fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

/// Value at a dotted key path.
pub fn get_key<'a>(tree: &'a LocaleTree, dotted: &str) -> Option<&'a Value> {
    let (parents, last) = match dotted.rsplit_once('.') {
        Some((parents, last)) => (Some(parents), last),
        None => (None, dotted),
    };

    let mut current = tree;
    for part in parents.into_iter().flat_map(|p| p.split('.')) {
        match current.get(part) {
            Some(Value::Object(child)) => current = child,
            _ => return None,
        }
    }
    current.get(last)
}

/// Remove the value at a dotted key path. Returns true if something was removed.
pub fn remove_key(tree: &mut LocaleTree, dotted: &str) -> bool {
    let parts: Vec<&str> = dotted.split('.').collect();
    let Some((last, parents)) = parts.split_last() else {
        return false;
    };

    let mut current = tree;
    for part in parents {
        match current.get_mut(*part) {
            Some(Value::Object(child)) => current = child,
            _ => return false,
        }
    }
    current.shift_remove(*last).is_some()
}

/// Deep-merge `source` into `target`; source leaves win.
///
/// Returns the number of leaves inserted or changed.
pub fn deep_merge(target: &mut LocaleTree, source: &LocaleTree) -> usize {
    let mut changed = 0;
    for (key, value) in source {
        match value {
            Value::Object(source_child) => {
                let slot = target
                    .entry(key.clone())
                    .or_insert_with(|| Value::Object(Map::new()));
                if !slot.is_object() {
                    *slot = Value::Object(Map::new());
                }
                if let Value::Object(target_child) = slot {
                    changed += deep_merge(target_child, source_child);
                }
            }
            _ => {
                if target.get(key) != Some(value) {
                    target.insert(key.clone(), value.clone());
                    changed += 1;
                }
            }
        }
    }
    changed
}
