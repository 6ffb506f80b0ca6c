//! Mad Libs configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Main configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory that relative template names are resolved against
    #[serde(rename = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Print the welcome banner at startup
    pub banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_dir: None,
            banner: true,
        }
    }
}

impl Config {
    /// Load configuration from `config_path`, or the first implicit file found
    ///
    /// An explicit path must load. Implicit files (`./.madlibs.yml`, then
    /// `{config_dir}/madlibs/madlibs.yml`) are skipped with a warning if broken.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        for candidate in Self::implicit_paths().into_iter().filter(|p| p.exists()) {
            match Self::load_from_file(&candidate) {
                Ok(config) => return Ok(config),
                Err(e) => warn!(path = %candidate.display(), "Skipping config: {:#}", e),
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Let a command-line template directory win over the file setting
    pub fn with_template_dir(mut self, template_dir: Option<PathBuf>) -> Self {
        if template_dir.is_some() {
            self.template_dir = template_dir;
        }
        self
    }

    fn implicit_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(".madlibs.yml")];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("madlibs").join("madlibs.yml"));
        }
        paths
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        info!(path = %path.display(), template_dir = ?config.template_dir, banner = config.banner, "Loaded config");
        Ok(config)
    }
}
