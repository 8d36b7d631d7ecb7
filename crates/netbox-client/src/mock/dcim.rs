//! DCIM operations for MockNetBoxClient
//!
//! Handles platforms and devices. Only the filters the reconciler sends are
//! honoured; unknown filters are ignored.

use super::MockNetBoxClient;
use crate::error::NetBoxError;
use crate::models::*;

fn filter<'a>(filters: &[(&str, &'a str)], key: &str) -> Option<&'a str> {
    filters.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

pub async fn query_platforms(client: &MockNetBoxClient, filters: &[(&str, &str)], _fetch_all: bool) -> Result<Vec<Platform>, NetBoxError> {
        let platforms = client.platforms.lock().unwrap();
        let slug = filter(filters, "slug");
        let name = filter(filters, "name");
        Ok(platforms
            .values()
            .filter(|p| slug.is_none_or(|s| p.slug == s))
            .filter(|p| name.is_none_or(|n| p.name == n))
            .cloned()
            .collect())
}

pub async fn query_devices(client: &MockNetBoxClient, filters: &[(&str, &str)], _fetch_all: bool) -> Result<Vec<Device>, NetBoxError> {
        let devices = client.devices.lock().unwrap();
        let name = filter(filters, "name");
        let site = filter(filters, "site");
        let has_primary_ip = filter(filters, "has_primary_ip").map(|v| v == "true");
        Ok(devices
            .values()
            .filter(|d| name.is_none_or(|n| d.name() == n))
            .filter(|d| site.is_none_or(|s| d.site.as_ref().is_some_and(|site| site.slug == s)))
            .filter(|d| has_primary_ip.is_none_or(|wanted| d.primary_ip.is_some() == wanted))
            .cloned()
            .collect())
}

pub async fn get_device_by_name(client: &MockNetBoxClient, name: &str) -> Result<Device, NetBoxError> {
        client.devices
            .lock()
            .unwrap()
            .values()
            .find(|d| d.name() == name)
            .cloned()
            .ok_or_else(|| NetBoxError::NotFound(format!("Device {} not found", name)))
}

pub async fn update_device(client: &MockNetBoxClient, id: u64, update: &DeviceUpdate) -> Result<Device, NetBoxError> {
        if client.failing_devices.lock().unwrap().contains(&id) {
            return Err(NetBoxError::Api(format!("Failed to update device {}: 500 Internal Server Error", id)));
        }

        let platform = match update.platform {
            Some(platform_id) => {
                let platforms = client.platforms.lock().unwrap();
                let platform = platforms.get(&platform_id).ok_or_else(|| {
                    NetBoxError::Api(format!("Failed to update device {}: unknown platform {}", id, platform_id))
                })?;
                Some(client.helpers().nested_platform(platform))
            }
            None => None,
        };

        let mut devices = client.devices.lock().unwrap();

        // Slugs resolve to tags already known anywhere in the store; unknown
        // slugs become new tags named after the slug
        let tags = update.tags.as_ref().map(|refs| {
            refs.iter()
                .map(|tag| {
                    devices
                        .values()
                        .flat_map(|d| d.tags.iter())
                        .find(|known| known.slug == tag.slug)
                        .cloned()
                        .unwrap_or_else(|| client.helpers().nested_tag(client.next_id(), &tag.slug))
                })
                .collect::<Vec<_>>()
        });

        let device = devices
            .get_mut(&id)
            .ok_or_else(|| NetBoxError::NotFound(format!("Device {} not found", id)))?;

        if platform.is_some() {
            device.platform = platform;
        }
        if let Some(tags) = tags {
            device.tags = tags;
        }

        client.updates.lock().unwrap().push((id, update.clone()));
        Ok(device.clone())
}
