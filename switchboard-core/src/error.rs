//! Error types for the switchboard core.

use thiserror::Error;

/// Main error type for the switchboard core.
#[derive(Error, Debug)]
pub enum Error {
    /// A required parameter was not present in the store
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// A parameter value could not be coerced to its declared type
    #[error("Invalid value for parameter {0}: {1}")]
    InvalidValue(String, String),

    /// The assembled values could not be deserialized onto the options type
    #[error("Binding error: {0}")]
    Bind(String),

    /// Serialization or deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with custom message
    #[error("{0}")]
    Other(String),
}

/// Result type alias for switchboard operations
pub type Result<T> = std::result::Result<T, Error>;
