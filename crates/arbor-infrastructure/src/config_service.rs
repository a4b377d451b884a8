//! Configuration service.
//!
//! Resolves the effective [`ArborConfig`] from, in decreasing precedence:
//! the command-line flag, the `ARBOR_API_BASE_URL` environment variable,
//! `~/.config/arbor/config.toml`, and the built-in defaults.

use std::fs;
use std::path::PathBuf;

use arbor_core::config::ArborConfig;
use arbor_core::error::Result;

use crate::paths::ArborPaths;

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "ARBOR_API_BASE_URL";

/// Loads the configuration file and applies overrides.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Creates a service reading the default `config.toml`.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(ArborPaths::config_file()?))
    }

    /// Creates a service reading a specific file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the configuration file. A missing file yields the defaults.
    pub fn load_file(&self) -> Result<ArborConfig> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "config file not found, using defaults");
            return Ok(ArborConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let config: ArborConfig = toml::from_str(&content)?;
        // Normalize the same way an override would be.
        let base_url = config.api_base_url.clone();
        Ok(config.with_api_base_url(base_url))
    }

    /// Loads the file and applies the environment and command-line overrides.
    pub fn resolve(&self, cli_base_url: Option<&str>) -> Result<ArborConfig> {
        let env_base_url = std::env::var(BASE_URL_ENV).ok();
        let config = Self::apply_overrides(self.load_file()?, env_base_url.as_deref(), cli_base_url);
        tracing::debug!(api_base_url = %config.api_base_url, "configuration resolved");
        Ok(config)
    }

    /// Applies overrides to a loaded configuration. Blank values are ignored.
    pub fn apply_overrides(
        config: ArborConfig,
        env_base_url: Option<&str>,
        cli_base_url: Option<&str>,
    ) -> ArborConfig {
        match cli_base_url
            .into_iter()
            .chain(env_base_url)
            .find(|url| !url.trim().is_empty())
        {
            Some(url) => config.with_api_base_url(url),
            None => config,
        }
    }
}
