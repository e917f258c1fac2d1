use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{ApiConfig, Config};

/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "PASSCARD_API_URL";

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

    #[error(
        "Profile service URL is not configured (set api.base_url, {env} or --api-url)",
        env = API_URL_ENV
    )]
    MissingBaseUrl,

    #[error("Invalid profile service URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },

    #[error("Failed to build HTTP client: {source}")]
    HttpClient {
        #[source]
        source: reqwest::Error,
    },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/passcard/config.toml` on Unix/macOS, or the platform
    /// equivalent via `dirs::config_dir()`.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("passcard").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// A missing file yields `Config::default()`, which still has no base URL.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
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

    /// Builds the effective configuration for this process.
    ///
    /// An explicit `config_path` must exist; the default path may be absent.
    pub fn resolve(config_path: Option<&Path>, api_url: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
                });
            }
            Some(path) => Self::load_from(path)?,
            None => Self::load_from(&Self::config_path())?,
        };

        config.apply_overrides(std::env::var(API_URL_ENV).ok(), api_url);
        config.validate()?;
        Ok(config)
    }

    /// Applies env and CLI overrides; the CLI value wins.
    pub fn apply_overrides(&mut self, env_url: Option<String>, cli_url: Option<&str>) {
        if let Some(url) = env_url.filter(|url| !url.trim().is_empty()) {
            self.api.base_url = Some(url);
        }
        if let Some(url) = cli_url {
            self.api.base_url = Some(url.to_string());
        }
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The base URL is present and is an http(s) URL
    /// - Timeouts and the tick rate are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.base_url()?;

        if self.api.timeout_seconds == 0 || self.api.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "API timeouts must be greater than zero".to_string(),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

impl ApiConfig {
    /// The validated base URL without a trailing slash.
    pub fn base_url(&self) -> Result<String, ConfigError> {
        let raw = self
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::MissingBaseUrl)?;

        let parsed = reqwest::Url::parse(raw).map_err(|e| ConfigError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: raw.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(raw.trim_end_matches('/').to_string())
    }
}
