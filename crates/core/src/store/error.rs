use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while talking to the remote blob service.
///
/// Every call either succeeds or fails outright; no retries happen at this
/// layer. Absence of a record is never an error, only transport and decode
/// failures are.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
    #[error("Remote returned {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Failed to decode document: {0}")]
    Parse(String),
    #[error("Failed to encode document: {0}")]
    Serialize(String),
    #[error("Connection failed: {0}")]
    Connection(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
