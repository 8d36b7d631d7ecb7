//! NetBox client errors

use thiserror::Error;

/// Errors that can occur when talking to the NetBox API
#[derive(Debug, Error)]
pub enum NetBoxError {
    /// Transport-level failure (connect, TLS, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// NetBox answered with a non-success status
    #[error("NetBox API error: {0}")]
    Api(String),

    /// Request or response body could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Token rejected (401/403)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Lookup returned nothing
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request rejected before it was sent
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}
