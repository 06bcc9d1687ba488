//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::factory::ConfigError;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default posts directory
    pub posts_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/post-fixtures/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("post-fixtures")
            .join("config.toml")
    }

    /// Resolve the posts directory.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument
    /// 2. `$posts_path` environment variable
    /// 3. Config file `posts_path` setting
    ///
    /// Empty values are treated as unset.
    pub fn posts_dir(
        &self,
        cli_dir: Option<&PathBuf>,
        env_value: Option<OsString>,
    ) -> Result<PathBuf, ConfigError> {
        cli_dir
            .filter(|dir| !dir.as_os_str().is_empty())
            .cloned()
            .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
            .or_else(|| {
                self.posts_path
                    .clone()
                    .filter(|dir| !dir.as_os_str().is_empty())
            })
            .ok_or(ConfigError::MissingPostsPath)
    }
}
