use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, MAX_PER_PAGE};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/ghfollowers/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("ghfollowers").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML.
    ///
    /// Validation is left to the caller so overrides can be applied first.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file missing, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The account name is not empty and has no '/' or whitespace
    /// - `per_page` is within 1..=100
    /// - The API base URL is http(s)
    pub fn validate(&self) -> Result<(), ConfigError> {
        let account = self.github.account.as_str();
        if account.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "GitHub account must not be empty".to_string(),
            });
        }
        if account.contains('/') || account.contains(char::is_whitespace) {
            return Err(ConfigError::ValidationError {
                message: format!("Invalid GitHub account '{}'", account),
            });
        }

        let per_page = self.github.per_page;
        if per_page == 0 || per_page > MAX_PER_PAGE {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "per_page must be between 1 and {}, got {}",
                    MAX_PER_PAGE, per_page
                ),
            });
        }

        let base_url = &self.github.api_base_url;
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(ConfigError::ValidationError {
                message: format!("api_base_url must be an http(s) URL, got '{}'", base_url),
            });
        }

        Ok(())
    }

    /// Applies a command-line account override, trimmed.
    pub fn with_account(mut self, account: Option<String>) -> Self {
        if let Some(account) = account {
            self.github.account = account.trim().to_string();
        }
        self
    }
}
