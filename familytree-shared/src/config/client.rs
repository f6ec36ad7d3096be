use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use thiserror::Error;
use url::Url;

use crate::client::DEFAULT_BASE_URL;

pub const BASE_URL_ENV: &str = "FAMILYTREE_BASE_URL";
pub const LOG_LEVEL_ENV: &str = "FAMILYTREE_LOG_LEVEL";

/// Errors raised while resolving a [`ClientConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported configuration format. Use 'yaml' or 'json'.")]
    UnsupportedFormat,

    #[error("malformed YAML configuration: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("malformed JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid base URL '{value}': {source}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

/// Client settings resolved from defaults, a file, the environment and flags.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Root URL of the family-tree API
    pub base_url: String,

    /// Logging level, in `tracing` filter syntax
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ClientConfig {
    /// Generates a default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            log_level: "warn".to_string(),
        }
    }

    /// Default location of the configuration file, if the platform has one.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "familytree").map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Loads the configuration from a file, environment variables, or defaults.
    ///
    /// Precedence, lowest first: defaults, the file (`config_path`, or the
    /// default path when it exists), `FAMILYTREE_*` variables for values the
    /// file left at their defaults, then `base_url_override`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or the resolved
    /// base URL is not an absolute URL.
    pub fn load_config(
        config_path: Option<PathBuf>,
        base_url_override: Option<String>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::with_defaults();
        let path = config_path.or_else(|| Self::default_path().filter(|path| path.exists()));

        let mut config = match path {
            Some(path) => Self::from_file(&path)?,
            None => defaults.clone(),
        };

        if config.base_url == defaults.base_url {
            if let Ok(base_url) = env::var(BASE_URL_ENV) {
                config.base_url = base_url;
            }
        }
        if config.log_level == defaults.log_level {
            if let Ok(log_level) = env::var(LOG_LEVEL_ENV) {
                config.log_level = log_level;
            }
        }

        if let Some(base_url) = base_url_override {
            config.base_url = base_url;
        }

        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Ok(serde_yml::from_str(&content)?),
            Some("json") => Ok(serde_json::from_str(&content)?),
            _ => Err(ConfigError::UnsupportedFormat),
        }
    }

    /// Check that the base URL is absolute.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidBaseUrl`] otherwise.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Url::parse(&self.base_url)
            .map(|_| ())
            .map_err(|source| ConfigError::InvalidBaseUrl {
                value: self.base_url.clone(),
                source,
            })
    }

    /// Serialize in `format` (`yaml` or `json`).
    ///
    /// # Errors
    /// Returns an error for any other format or if serialization fails.
    pub fn render(&self, format: &str) -> Result<String, ConfigError> {
        match format {
            "yaml" => Ok(serde_yml::to_string(self)?),
            "json" => Ok(serde_json::to_string_pretty(self)?),
            _ => Err(ConfigError::UnsupportedFormat),
        }
    }
}
