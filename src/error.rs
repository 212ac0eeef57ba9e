/// Error types for the nomads library
use thiserror::Error;

/// Main error type for plan generation and retrieval
#[derive(Error, Debug)]
pub enum Error {
    /// Date string did not parse as `YYYY-MM-DD`
    #[error("failed to parse date: {0}")]
    DateParse(#[from] chrono::ParseError),

    /// Request configuration document could not be deserialized
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// Missing or unrecognized configuration value
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Request rejected at plan-generation time
    #[error("{0}")]
    Validation(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Filesystem operation failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using Error
pub type Result<T> = std::result::Result<T, Error>;
