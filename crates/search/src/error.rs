//! Error types for search and configuration

use thiserror::Error;

/// Errors from talking to the joke search endpoint
#[derive(Debug, Error)]
pub enum SearchError {
    /// Request could not be sent or the connection failed
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("search API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Body was not the expected JSON shape
    #[error("failed to decode search response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Endpoint URL could not be built
    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

/// Errors from configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be between {min} and {max}, got {value}")]
    OutOfRange {
        key: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },

    #[error("{key} must not be empty")]
    Empty { key: &'static str },

    #[error("endpoint must start with http:// or https://, got '{0}'")]
    BadScheme(String),
}
