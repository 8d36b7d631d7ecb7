//! Device tagger error types.
//!
//! Errors that abort the run. Per-device write failures are tallied by the
//! worker pool instead and only surface here as `PartialFailure`.

use device_naming::NamingError;
use netbox_client::NetBoxError;
use thiserror::Error;

/// Errors that can occur in the device tagger.
#[derive(Debug, Error)]
pub enum TaggerError {
    /// NetBox API error
    #[error("NetBox error: {0}")]
    NetBox(#[from] NetBoxError),

    /// Hostname could not be decoded
    #[error("Hostname error: {0}")]
    Naming(#[from] NamingError),

    /// Report could not be rendered
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// One or more per-device updates failed
    #[error("{failed} device update(s) failed")]
    PartialFailure { failed: usize },
}
