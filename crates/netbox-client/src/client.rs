//! NetBox API client
//!
//! Implements the NetBox REST API client for DCIM device reconciliation.
//! Based on NetBox API structure: /api/dcim/devices/ and /api/dcim/platforms/

use crate::common::query::query_resources;
use crate::common::HttpClient;
use crate::error::NetBoxError;
use crate::models::*;
use crate::netbox_trait::NetBoxClientTrait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// NetBox API client
#[derive(Debug, Clone)]
pub struct NetBoxClient {
    http: HttpClient,
}

impl NetBoxClient {
    /// Create a new NetBox client
    ///
    /// # Arguments
    /// * `base_url` - NetBox base URL (e.g., "http://netbox:80")
    /// * `token` - API token for authentication
    pub fn new(base_url: String, token: String) -> Result<Self, NetBoxError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http: HttpClient::new(client, base_url, token),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Validate the API token by making a simple authenticated request.
    ///
    /// Uses the status endpoint as it is lightweight and requires authentication.
    ///
    /// # Returns
    /// * `Ok(())` - Token is valid and NetBox is reachable
    /// * `Err(NetBoxError)` - Token is invalid or NetBox is unreachable
    pub async fn validate_token(&self) -> Result<(), NetBoxError> {
        debug!("Validating NetBox token and connectivity");
        let _: serde_json::Value = self.http.get("/api/status/").await?;
        debug!("Token validated successfully");
        Ok(())
    }

    // ============================================================================
    // DCIM API Methods - Platforms
    // ============================================================================

    /// Query platforms by filters
    pub async fn query_platforms(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Platform>, NetBoxError> {
        debug!("Querying platforms with filters: {:?}", filters);
        query_resources(&self.http, "dcim/platforms", filters, fetch_all).await
    }

    // ============================================================================
    // DCIM API Methods - Devices
    // ============================================================================

    /// Query devices by filters
    ///
    /// # Arguments
    /// * `filters` - Query parameters (e.g., [("has_primary_ip", "true"), ("site", "FUL")])
    /// * `fetch_all` - If true, fetch all pages, otherwise the first page only
    pub async fn query_devices(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Device>, NetBoxError> {
        debug!("Querying devices with filters: {:?}", filters);
        query_resources(&self.http, "dcim/devices", filters, fetch_all).await
    }

    /// Get a device by its exact name
    ///
    /// # Returns
    /// * `Ok(Device)` - The first device with that name
    /// * `Err(NetBoxError::NotFound)` - No device has that name
    pub async fn get_device_by_name(&self, name: &str) -> Result<Device, NetBoxError> {
        if name.is_empty() {
            return Err(NetBoxError::InvalidRequest("Device name must not be empty".to_string()));
        }

        let devices = self.query_devices(&[("name", name)], false).await?;
        devices
            .into_iter()
            .next()
            .ok_or_else(|| NetBoxError::NotFound(format!("Device {} not found", name)))
    }

    /// Update a device
    ///
    /// Only the fields set in `update` are sent.
    pub async fn update_device(&self, id: u64, update: &DeviceUpdate) -> Result<Device, NetBoxError> {
        if update.is_empty() {
            return Err(NetBoxError::InvalidRequest(format!("Empty update for device {}", id)));
        }

        debug!("Updating device {} in NetBox", id);
        let body = serde_json::to_value(update)?;
        self.http.patch(&format!("/api/dcim/devices/{}/", id), &body).await
    }
}

#[async_trait::async_trait]
impl NetBoxClientTrait for NetBoxClient {
    fn base_url(&self) -> &str {
        self.base_url()
    }

    async fn validate_token(&self) -> Result<(), NetBoxError> {
        self.validate_token().await
    }

    // DCIM Operations
    async fn query_platforms(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Platform>, NetBoxError> {
        self.query_platforms(filters, fetch_all).await
    }

    async fn query_devices(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Device>, NetBoxError> {
        self.query_devices(filters, fetch_all).await
    }

    async fn get_device_by_name(&self, name: &str) -> Result<Device, NetBoxError> {
        self.get_device_by_name(name).await
    }

    async fn update_device(&self, id: u64, update: &DeviceUpdate) -> Result<Device, NetBoxError> {
        self.update_device(id, update).await
    }
}
