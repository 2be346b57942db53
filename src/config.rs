//! Configuration Management
//!
//! Immutable client configuration handed to [`Session`](crate::session::Session).
//! Can be loaded from a JSON or YAML file; missing keys take their defaults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// User agent sent when the configuration does not override it
pub const DEFAULT_USER_AGENT: &str = concat!("edgegrid-sdk/", env!("CARGO_PKG_VERSION"));

/// Errors raised while loading configuration or building a session from it
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported config format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),

    #[error("invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid default header {0:?}")]
    InvalidHeader(String),

    #[error("failed to create HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Root of the API, e.g. `https://akab-xxxx.luna.example.net`; a path here prefixes every request
    pub base_url: String,
    pub user_agent: String,
    /// Whole-request timeout; no timeout when unset
    pub timeout_secs: Option<u64>,
    /// Headers sent with every request
    pub default_headers: BTreeMap<String, String>,
    /// Appended as `accountSwitchKey` to every request when set
    pub account_switch_key: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: None,
            default_headers: BTreeMap::new(),
            account_switch_key: None,
        }
    }
}

impl ClientConfig {
    /// Configuration pointing at `base_url` with every other field defaulted
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Get the default config file path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("edgegrid").join("config.json"))
    }

    /// Load configuration from a `.json`, `.yaml` or `.yml` file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(serde_json::from_str(&content)?),
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&content)?),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Load the default config file, if there is one
    pub fn load_default() -> Result<Option<Self>, ConfigError> {
        let Some(path) = Self::default_path() else {
            return Ok(None);
        };

        if !path.exists() {
            return Ok(None);
        }

        Self::load(&path).map(Some)
    }

    /// Save configuration to disk as JSON
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        // Create parent directory
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(io_error)?;

        Ok(())
    }
}
