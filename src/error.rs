//! Error types for vinyl_only_finder

use thiserror::Error;

/// Unified error type for finder operations
#[derive(Debug, Error)]
pub enum FinderError {
    /// Input is not a Discogs seller URL
    #[error("Invalid seller URL: {0}")]
    InvalidUrl(String),
    /// HTTP error status code
    #[error("HTTP error {status} for {url}")]
    HttpStatus {
        status: reqwest::StatusCode,
        url: String,
    },
    /// Response body is not JSON or lacks expected fields
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// HTTP request failed (connection refused, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Unusable configuration value
    #[error("Configuration error: {0}")]
    Config(String),
    /// Writing the report failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<url::ParseError> for FinderError {
    fn from(err: url::ParseError) -> Self {
        FinderError::InvalidUrl(err.to_string())
    }
}

/// Result alias for finder operations
pub type Result<T> = std::result::Result<T, FinderError>;
