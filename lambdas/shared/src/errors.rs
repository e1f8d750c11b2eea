//! Error types for TableScan

use thiserror::Error;

/// Result type alias using TableScan Error
pub type Result<T> = std::result::Result<T, Error>;

/// TableScan error types
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid or missing configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error response returned by the DynamoDB service (throttling, internal
    /// failure, validation, ...). These are the only retryable errors.
    #[error("Database error: {0}")]
    Database(String),

    /// Any failure that did not come back as a service error response
    #[error("Unexpected error: {0}")]
    Unexpected(String),

    /// DynamoDB item could not be converted into a record
    #[error("DynamoDB serialization error: {0}")]
    DynamoSerialization(String),
}

impl Error {
    /// Returns the error code used in log lines
    pub fn code(&self) -> &'static str {
        match self {
            Error::Config(_) => "config_error",
            Error::Database(_) => "database_error",
            Error::Unexpected(_) => "unexpected_error",
            Error::DynamoSerialization(_) => "serialization_error",
        }
    }

    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        500
    }

    /// Whether a page fetch that failed with this error may be attempted again
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Database(_))
    }
}
