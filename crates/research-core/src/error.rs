//! Error types for research-core

use thiserror::Error;

/// Result type alias for research operations
pub type Result<T> = std::result::Result<T, ResearchError>;

/// Main error type for research operations
#[derive(Error, Debug)]
pub enum ResearchError {
    /// Remote API errors
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Local persistence errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Add-article form errors
    #[error("Draft error: {0}")]
    Draft(#[from] DraftError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors talking to the search API
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure (connection refused, reset, timeout)
    #[error("Request failed: {0}")]
    Request(String),

    /// The server answered with a non-2xx status
    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON
    #[error("Could not decode response: {0}")]
    Decode(String),

    /// The configured base URL cannot be joined with an endpoint path
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Errors reading or writing the local key/value store
#[derive(Error, Debug)]
pub enum StorageError {
    /// IO error
    #[error("IO error: {0}")]
    Io(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Add-article form errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// A required field is blank
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A numeric field does not hold a number
    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    /// An uploaded document is not valid JSON
    #[error("Invalid JSON file format: {0}")]
    InvalidJson(String),

    /// An uploaded document could not be read
    #[error("IO error: {0}")]
    Io(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("IO error: {0}")]
    Io(String),

    /// The config file is not valid TOML for this schema
    #[error("TOML parse error: {0}")]
    Parse(String),

    /// A value is out of its valid range
    #[error("Invalid value: {0}")]
    Invalid(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Request(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}
