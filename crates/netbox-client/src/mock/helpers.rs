//! Helper functions for creating NetBox model types in mocks and tests

use crate::models::*;

/// Builds models with URLs consistent with the mock's base URL
#[derive(Debug, Clone)]
pub struct Helpers {
    base_url: String,
}

impl Helpers {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    fn slugify(name: &str) -> String {
        name.to_lowercase().replace(' ', "-")
    }

    /// Helper to create Platform
    pub fn platform(&self, id: u64, slug: &str) -> Platform {
        Platform {
            id,
            url: format!("{}/api/dcim/platforms/{}/", self.base_url, id),
            display: slug.to_string(),
            name: slug.to_string(),
            slug: slug.to_string(),
        }
    }

    /// Helper to create NestedPlatform from a Platform
    pub fn nested_platform(&self, platform: &Platform) -> NestedPlatform {
        NestedPlatform {
            id: platform.id,
            url: platform.url.clone(),
            display: platform.display.clone(),
            name: platform.name.clone(),
            slug: platform.slug.clone(),
        }
    }

    /// Helper to create NestedTag
    pub fn nested_tag(&self, id: u64, name: &str) -> NestedTag {
        NestedTag {
            id,
            url: format!("{}/api/extras/tags/{}/", self.base_url, id),
            display: name.to_string(),
            name: name.to_string(),
            slug: Self::slugify(name),
        }
    }

    /// Helper to create NestedSite; the slug is kept as given
    pub fn nested_site(&self, id: u64, slug: &str) -> NestedSite {
        NestedSite {
            id,
            url: format!("{}/api/dcim/sites/{}/", self.base_url, id),
            display: slug.to_string(),
            name: slug.to_string(),
            slug: slug.to_string(),
        }
    }

    /// Helper to create NestedDeviceType
    pub fn nested_device_type(&self, id: u64, model: &str) -> NestedDeviceType {
        NestedDeviceType {
            id,
            url: format!("{}/api/dcim/device-types/{}/", self.base_url, id),
            display: model.to_string(),
            model: model.to_string(),
            manufacturer: None,
        }
    }

    /// Helper to create a Device with a primary IP, no platform and the given tags
    ///
    /// Tag IDs are derived from the device ID so they stay unique per device.
    pub fn device(
        &self,
        id: u64,
        name: &str,
        model: &str,
        site: Option<&str>,
        tags: &[&str],
    ) -> Device {
        Device {
            id,
            url: format!("{}/api/dcim/devices/{}/", self.base_url, id),
            display: name.to_string(),
            name: Some(name.to_string()),
            device_type: self.nested_device_type(id, model),
            platform: None,
            site: site.map(|slug| self.nested_site(id, slug)),
            primary_ip: Some(NestedIPAddress {
                id,
                url: format!("{}/api/ipam/ip-addresses/{}/", self.base_url, id),
                display: format!("10.0.0.{}/24", id % 250),
                address: format!("10.0.0.{}/24", id % 250),
            }),
            tags: tags
                .iter()
                .zip(0u64..)
                .map(|(tag, n)| self.nested_tag(id * 100 + n, tag))
                .collect(),
        }
    }
}
