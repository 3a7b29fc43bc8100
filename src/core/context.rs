use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config, resolve_path},
    core::locale::SkipPolicy,
};

/// Project being analyzed or synchronized.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--baseline en`)
/// 2. `.parleyrc.json` config file
/// 3. Built-in defaults
///
/// Paths from the config file are relative to the directory holding it;
/// paths given on the command line are relative to the working directory.
pub struct ProjectContext {
    pub config: Config,
    /// Config file in use, or `None` when running on defaults.
    pub config_path: Option<PathBuf>,
    /// Directory the configured paths are resolved against.
    pub root: PathBuf,
    messages_dir: PathBuf,
    pub verbose: bool,
}

impl ProjectContext {
    pub fn load(common: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to determine the working directory")?;
        let start_dir = match &common.root {
            Some(root) => cwd.join(root),
            None => cwd.clone(),
        };
        if !start_dir.is_dir() {
            anyhow::bail!("Project root is not a directory: {}", start_dir.display());
        }

        let loaded = load_config(&start_dir)?;
        let mut config = loaded.config;
        let root = loaded
            .path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or(start_dir);

        if let Some(baseline) = &common.baseline {
            config.baseline_locale = baseline.clone();
        }
        let messages_dir = match &common.messages_root {
            Some(dir) => cwd.join(dir),
            None => resolve_path(&root, &config.messages_root),
        };
        config.validate()?;

        match &loaded.path {
            Some(path) => tracing::debug!("using config {}", path.display()),
            None => tracing::debug!("no config file found, using defaults"),
        }

        Ok(Self {
            config,
            config_path: loaded.path,
            root,
            messages_dir,
            verbose: common.verbose,
        })
    }

    pub fn source_root(&self) -> PathBuf {
        resolve_path(&self.root, &self.config.source_root)
    }

    pub fn pages_root(&self) -> PathBuf {
        resolve_path(&self.root, &self.config.pages_root)
    }

    pub fn messages_dir(&self) -> &Path {
        &self.messages_dir
    }

    pub fn dictionaries_dir(&self) -> PathBuf {
        resolve_path(&self.root, &self.config.dictionaries_root)
    }

    pub fn overrides_dir(&self) -> PathBuf {
        resolve_path(&self.root, &self.config.overrides_root)
    }

    pub fn env_file(&self) -> PathBuf {
        resolve_path(&self.root, &self.config.env_file)
    }

    pub fn skip_policy(&self) -> SkipPolicy {
        SkipPolicy::from_config(&self.config.skip)
    }
}
