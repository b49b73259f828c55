use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{LinkSealError, Result};

/// Project-level configuration, loaded from `.linkseal.toml`.
///
/// Every field has a default so linkseal works without any config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Link manifest path, relative to the project root.
    #[serde(default = "default_links_file")]
    pub links_file: String,

    /// Minimum length for a password chosen at `seal` time.
    #[serde(default = "default_min_password_len")]
    pub min_password_len: usize,

    /// Command used to open unlocked links (e.g. "firefox").
    #[serde(default)]
    pub opener: Option<String>,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_links_file() -> String {
    "links.toml".to_string()
}

fn default_min_password_len() -> usize {
    8
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            links_file: default_links_file(),
            min_password_len: default_min_password_len(),
            opener: None,
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    const FILE_NAME: &'static str = ".linkseal.toml";

    /// Load settings from `<project_dir>/.linkseal.toml`.
    ///
    /// If the file does not exist, defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            LinkSealError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        log::debug!("loaded settings from {}", config_path.display());
        Ok(settings)
    }

    /// Full path to the link manifest.
    pub fn links_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.links_file)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
