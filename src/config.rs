use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".parleyrc.json";

pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.tsx",
    "**/*.test.ts",
    "**/*.test.jsx",
    "**/*.test.js",
    "**/*.spec.tsx",
    "**/*.spec.ts",
    "**/*.spec.jsx",
    "**/*.spec.js",
    "**/__tests__/**",
];

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_ignore_test_files")]
    pub ignore_test_files: bool,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_breakpoints")]
    pub breakpoints: Vec<String>,
    /// Directory holding the localized route segment, relative to the source root.
    #[serde(default = "default_pages_root")]
    pub pages_root: String,
    #[serde(default = "default_messages_root")]
    pub messages_root: String,
    #[serde(default = "default_baseline_locale")]
    pub baseline_locale: String,
    /// Target locales. Empty means every locale file found in `messagesRoot`.
    #[serde(default)]
    pub locales: Vec<String>,
    #[serde(default = "default_dictionaries_root")]
    pub dictionaries_root: String,
    #[serde(default = "default_overrides_root")]
    pub overrides_root: String,
    /// Dotted key paths removed from every target locale before syncing.
    #[serde(default)]
    pub deprecated_keys: Vec<String>,
    #[serde(default)]
    pub skip: SkipConfig,
    #[serde(default)]
    pub machine_translation: MachineTranslationConfig,
    #[serde(default = "default_env_file")]
    pub env_file: String,
    #[serde(default = "default_required_env")]
    pub required_env: Vec<String>,
    /// Also write the analyze report as JSON to this path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_file: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkipConfig {
    /// Substrings (brand names, legal entities) that keep a value as-is.
    #[serde(default)]
    pub keep_as_is: Vec<String>,
    /// Extra technical terms kept verbatim when they make up the whole value.
    #[serde(default)]
    pub technical_terms: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineTranslationConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
}

impl Default for MachineTranslationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            request_delay_ms: default_request_delay_ms(),
        }
    }
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_includes() -> Vec<String> {
    vec!["src".to_string()]
}

fn default_ignore_test_files() -> bool {
    true
}

fn default_extensions() -> Vec<String> {
    ["tsx", "ts"].map(String::from).to_vec()
}

fn default_breakpoints() -> Vec<String> {
    ["sm", "md", "lg", "xl", "2xl"].map(String::from).to_vec()
}

fn default_pages_root() -> String {
    "src/app/[locale]".to_string()
}

fn default_messages_root() -> String {
    "./messages".to_string()
}

fn default_baseline_locale() -> String {
    "en".to_string()
}

fn default_dictionaries_root() -> String {
    "./dictionaries".to_string()
}

fn default_overrides_root() -> String {
    "./overrides".to_string()
}

fn default_endpoint() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_request_delay_ms() -> u64 {
    50
}

fn default_env_file() -> String {
    ".env.local".to_string()
}

fn default_required_env() -> Vec<String> {
    vec!["NEXT_PUBLIC_API_URL".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            includes: default_includes(),
            ignores: Vec::new(),
            ignore_test_files: default_ignore_test_files(),
            extensions: default_extensions(),
            breakpoints: default_breakpoints(),
            pages_root: default_pages_root(),
            messages_root: default_messages_root(),
            baseline_locale: default_baseline_locale(),
            locales: Vec::new(),
            dictionaries_root: default_dictionaries_root(),
            overrides_root: default_overrides_root(),
            deprecated_keys: Vec::new(),
            skip: SkipConfig::default(),
            machine_translation: MachineTranslationConfig::default(),
            env_file: default_env_file(),
            required_env: default_required_env(),
            report_file: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `ignores` or `includes` are invalid,
    /// or if a locale code could not name a file.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Patterns without wildcards are literal directory paths, so
        // [locale] (Next.js dynamic route) is valid without escaping.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        for locale in std::iter::once(&self.baseline_locale).chain(&self.locales) {
            if locale.is_empty() || locale.contains(['/', '\\', '.']) {
                anyhow::bail!("Invalid locale code in config: \"{}\"", locale);
            }
        }

        Ok(())
    }
}

/// Resolve a configured path against the project root.
pub fn resolve_path(root: &Path, configured: &str) -> PathBuf {
    let p = Path::new(configured);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        root.join(p.strip_prefix(".").unwrap_or(p))
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, or `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
