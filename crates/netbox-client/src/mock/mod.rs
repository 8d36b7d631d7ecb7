//! Mock NetBoxClient for unit testing
//!
//! This module provides a mock implementation of NetBoxClientTrait that can be used
//! in unit tests without requiring a running NetBox instance.
//!
//! The mock is organized into:
//! - `dcim.rs` - DCIM operations (platforms, devices)
//! - `helpers.rs` - Helper functions for creating NetBox models

mod dcim;
mod helpers;

pub use helpers::Helpers;

use crate::error::NetBoxError;
use crate::models::*;
use crate::netbox_trait::NetBoxClientTrait;
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex};

/// Mock NetBoxClient for testing
///
/// Stores devices and platforms in memory, applies updates the way NetBox
/// does (the tag list is replaced wholesale), records every update it
/// accepts, and can be told to fail writes for specific device IDs.
#[derive(Debug, Clone)]
pub struct MockNetBoxClient {
    pub(crate) base_url: String,
    // In-memory storage for resources
    pub(crate) devices: Arc<Mutex<BTreeMap<u64, Device>>>,
    pub(crate) platforms: Arc<Mutex<BTreeMap<u64, Platform>>>,
    // Accepted updates, in call order
    pub(crate) updates: Arc<Mutex<Vec<(u64, DeviceUpdate)>>>,
    pub(crate) failing_devices: Arc<Mutex<HashSet<u64>>>,
    // Counter for generating tag IDs
    pub(crate) next_id: Arc<Mutex<u64>>,
}

impl MockNetBoxClient {
    /// Create a new mock client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            devices: Arc::new(Mutex::new(BTreeMap::new())),
            platforms: Arc::new(Mutex::new(BTreeMap::new())),
            updates: Arc::new(Mutex::new(Vec::new())),
            failing_devices: Arc::new(Mutex::new(HashSet::new())),
            next_id: Arc::new(Mutex::new(1000)),
        }
    }

    /// Add a device to the mock store (for test setup)
    pub fn add_device(&self, device: Device) {
        self.devices.lock().unwrap().insert(device.id, device);
    }

    /// Add a platform to the mock store (for test setup)
    pub fn add_platform(&self, platform: Platform) {
        self.platforms.lock().unwrap().insert(platform.id, platform);
    }

    /// Make every update of `device_id` fail with an API error
    pub fn fail_updates_for(&self, device_id: u64) {
        self.failing_devices.lock().unwrap().insert(device_id);
    }

    /// Current state of a stored device
    pub fn device(&self, id: u64) -> Option<Device> {
        self.devices.lock().unwrap().get(&id).cloned()
    }

    /// Updates accepted so far, in call order
    pub fn updates(&self) -> Vec<(u64, DeviceUpdate)> {
        self.updates.lock().unwrap().clone()
    }

    /// Generate next ID
    pub(crate) fn next_id(&self) -> u64 {
        let mut id = self.next_id.lock().unwrap();
        let current = *id;
        *id += 1;
        current
    }

    /// Get helpers instance
    pub fn helpers(&self) -> Helpers {
        Helpers::new(self.base_url.clone())
    }
}

#[async_trait::async_trait]
impl NetBoxClientTrait for MockNetBoxClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn validate_token(&self) -> Result<(), NetBoxError> {
        Ok(())
    }

    // DCIM Operations - delegated to dcim module
    async fn query_platforms(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Platform>, NetBoxError> {
        dcim::query_platforms(self, filters, fetch_all).await
    }

    async fn query_devices(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Device>, NetBoxError> {
        dcim::query_devices(self, filters, fetch_all).await
    }

    async fn get_device_by_name(&self, name: &str) -> Result<Device, NetBoxError> {
        dcim::get_device_by_name(self, name).await
    }

    async fn update_device(&self, id: u64, update: &DeviceUpdate) -> Result<Device, NetBoxError> {
        dcim::update_device(self, id, update).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock() -> MockNetBoxClient {
        let mock = MockNetBoxClient::new("http://test-netbox");
        let helpers = mock.helpers();
        mock.add_platform(helpers.platform(1, "ios"));
        mock.add_platform(helpers.platform(2, "eos"));
        mock.add_device(helpers.device(10, "SFUL01DS01", "N9K", Some("FUL"), &["Network-NXOS"]));
        mock.add_device(helpers.device(11, "RFUL01CR01", "ISR4451", Some("FUL"), &[]));
        mock.add_device(helpers.device(12, "SNYC01AC01", "WS-C2960X", Some("NYC"), &[]));
        let mut unaddressed = helpers.device(13, "SFUL01AC09", "WS-C2960X", Some("FUL"), &[]);
        unaddressed.primary_ip = None;
        mock.add_device(unaddressed);
        mock
    }

    #[tokio::test]
    async fn test_query_devices_filters_site_and_primary_ip() {
        let mock = mock();
        let devices = mock
            .query_devices(&[("has_primary_ip", "true"), ("site", "FUL")], true)
            .await
            .unwrap();
        let names: Vec<&str> = devices.iter().map(Device::name).collect();
        assert_eq!(names, vec!["SFUL01DS01", "RFUL01CR01"]);
    }

    #[tokio::test]
    async fn test_query_platforms_by_slug() {
        let mock = mock();
        let platforms = mock.query_platforms(&[("slug", "eos")], false).await.unwrap();
        assert_eq!(platforms.len(), 1);
        assert_eq!(platforms[0].id, 2);
        assert_eq!(mock.query_platforms(&[], true).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_device_platform() {
        let mock = mock();
        let device = mock.update_device(11, &DeviceUpdate::platform(1)).await.unwrap();
        assert_eq!(device.platform.map(|p| p.slug), Some("ios".to_string()));
        assert_eq!(mock.updates(), vec![(11, DeviceUpdate::platform(1))]);
    }

    #[tokio::test]
    async fn test_update_device_unknown_platform() {
        let mock = mock();
        let result = mock.update_device(11, &DeviceUpdate::platform(99)).await;
        assert!(matches!(result, Err(NetBoxError::Api(_))));
        assert!(mock.updates().is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_tags() {
        let mock = mock();
        mock.update_device(10, &DeviceUpdate::tags(["primary"])).await.unwrap();
        let device = mock.device(10).unwrap();
        assert_eq!(device.tag_names(), vec!["primary"]);
    }

    #[tokio::test]
    async fn test_update_resolves_known_tag_slugs() {
        let mock = mock();
        mock.update_device(11, &DeviceUpdate::tags(["network-nxos", "core-router"]))
            .await
            .unwrap();
        let device = mock.device(11).unwrap();
        // Existing tag keeps its display name, unknown slug becomes a new tag
        assert_eq!(device.tag_names(), vec!["Network-NXOS", "core-router"]);
        assert_eq!(device.tag_slugs(), vec!["network-nxos", "core-router"]);
    }

    #[tokio::test]
    async fn test_get_device_by_name() {
        let mock = mock();
        assert_eq!(mock.get_device_by_name("RFUL01CR01").await.unwrap().id, 11);
        let missing = mock.get_device_by_name("RFUL09CR01").await;
        assert!(matches!(missing, Err(NetBoxError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_failing_device() {
        let mock = mock();
        mock.fail_updates_for(10);
        let result = mock.update_device(10, &DeviceUpdate::platform(1)).await;
        assert!(matches!(result, Err(NetBoxError::Api(_))));
        assert!(mock.device(10).unwrap().platform.is_none());
    }
}
