//! Static per-language lookup tables (`source text → translation`).
//!
//! Dictionaries live outside the code, one flat JSON object per language:
//! `<dictionariesRoot>/<lang>.json`.

use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Load `<dir>/<locale>.json`; a missing file yields an empty dictionary.
    pub fn load(dir: &Path, locale: &str) -> Result<Self> {
        let path = dir.join(format!("{}.json", locale));
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read dictionary: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid dictionary: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let Value::Object(map) = serde_json::from_str::<Value>(content)? else {
            bail!("Dictionary root must be an object of strings");
        };

        let mut entries = HashMap::with_capacity(map.len());
        for (source, target) in map {
            match target {
                Value::String(target) => {
                    entries.insert(source, target);
                }
                other => bail!(
                    "Dictionary entry \"{}\" must be a string, found {}",
                    source,
                    other
                ),
            }
        }
        Ok(Self { entries })
    }

    pub fn lookup(&self, source: &str) -> Option<&str> {
        self.entries.get(source).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
