//! Configuration for the reSearch client
//!
//! Loaded from `<config_dir>/research/config.toml`. Every field has a
//! default, so a partial file (or none at all) is fine:
//!
//! ```toml
//! [api]
//! base_url = "http://127.0.0.1:5000"
//! timeout_secs = 30
//!
//! [search]
//! page_size = 10
//!
//! [autocomplete]
//! debounce_ms = 300
//! min_token_chars = 2
//!
//! [display]
//! abstract_word_limit = 100
//!
//! [storage]
//! data_dir = "/home/me/.local/share/research"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;
use crate::normalize::DEFAULT_ABSTRACT_WORD_LIMIT;

/// Environment variable overriding `api.base_url`
pub const API_URL_ENV: &str = "RESEARCH_API_URL";

/// Client-wide configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub search: SearchConfig,
    pub autocomplete: AutocompleteConfig,
    pub display: DisplayConfig,
    pub storage: StorageConfig,
}

/// Remote API settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Request timeout; unset means no client-side timeout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            timeout_secs: None,
            user_agent: format!("research/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Search paging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub page_size: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { page_size: 10 }
    }
}

/// Autocomplete timing settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutocompleteConfig {
    pub debounce_ms: u64,
    /// Shortest last token that triggers a request
    pub min_token_chars: usize,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            min_token_chars: 2,
        }
    }
}

impl AutocompleteConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Result card settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub abstract_word_limit: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            abstract_word_limit: DEFAULT_ABSTRACT_WORD_LIMIT,
        }
    }
}

/// Local persistence settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for bookmarks and logs; defaults to the platform data dir
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    /// The configured directory, or `<data_dir>/research`.
    pub fn resolve_data_dir(&self) -> Option<PathBuf> {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|d| d.join("research")))
    }
}

impl ClientConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location: `<config_dir>/research/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("research").join("config.toml"))
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from a file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&contents)
    }

    /// Load from `path`, or the default location when it exists, then apply
    /// environment overrides and validate.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(default_path) => Self::from_file(&default_path)?,
                None => Self::default(),
            },
        };

        if let Ok(base_url) = std::env::var(API_URL_ENV) {
            tracing::info!("Using API base URL from {}", API_URL_ENV);
            config.api.base_url = base_url;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if Url::parse(&self.api.base_url).is_err() {
            return Err(ConfigError::Invalid(format!(
                "api.base_url is not a valid URL: {}",
                self.api.base_url
            )));
        }

        if self.search.page_size == 0 {
            return Err(ConfigError::Invalid(
                "search.page_size must be positive".to_string(),
            ));
        }

        if self.autocomplete.min_token_chars == 0 {
            return Err(ConfigError::Invalid(
                "autocomplete.min_token_chars must be positive".to_string(),
            ));
        }

        if self.display.abstract_word_limit == 0 {
            return Err(ConfigError::Invalid(
                "display.abstract_word_limit must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
