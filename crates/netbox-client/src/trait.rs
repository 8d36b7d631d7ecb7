//! NetBoxClient trait for mocking
//!
//! This trait abstracts the NetBoxClient so reconciliation code can run
//! against the in-memory mock in unit tests.

use crate::error::NetBoxError;
use crate::models::*;

/// Trait for NetBox API client operations
///
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait NetBoxClientTrait: Send + Sync {
    /// Get the base URL
    fn base_url(&self) -> &str;

    /// Validate the API token
    async fn validate_token(&self) -> Result<(), NetBoxError>;

    // DCIM Operations
    async fn query_platforms(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Platform>, NetBoxError>;
    async fn query_devices(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Device>, NetBoxError>;
    async fn get_device_by_name(&self, name: &str) -> Result<Device, NetBoxError>;

    /// Update a device by ID
    ///
    /// Device names are only unique per site, so writes never go through a
    /// name lookup.
    async fn update_device(&self, id: u64, update: &DeviceUpdate) -> Result<Device, NetBoxError>;
}
