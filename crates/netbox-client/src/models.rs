//! NetBox API models
//!
//! These models match the NetBox DCIM REST API serializers, reduced to the
//! fields device reconciliation reads. Fields the API may omit or null are
//! optional so older and newer NetBox releases both deserialize.

use serde::{Deserialize, Serialize};

/// Device model (from DCIM API)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Device {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    /// NetBox allows unnamed devices
    #[serde(default)]
    pub name: Option<String>,
    pub device_type: NestedDeviceType,
    #[serde(default)]
    pub platform: Option<NestedPlatform>,
    #[serde(default)]
    pub site: Option<NestedSite>,
    #[serde(default)]
    pub primary_ip: Option<NestedIPAddress>,
    #[serde(default)]
    pub tags: Vec<NestedTag>,
}

impl Device {
    /// Device name, or an empty string for unnamed devices
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Device model string from its device type
    pub fn model(&self) -> &str {
        &self.device_type.model
    }

    /// True if the device carries a tag whose name or slug equals `tag`
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.name == tag || t.slug == tag)
    }

    /// Names of all tags on the device, in API order
    pub fn tag_names(&self) -> Vec<&str> {
        self.tags.iter().map(|t| t.name.as_str()).collect()
    }

    /// Slugs of all tags on the device, in API order
    pub fn tag_slugs(&self) -> Vec<&str> {
        self.tags.iter().map(|t| t.slug.as_str()).collect()
    }
}

/// Platform model (from DCIM API)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Platform {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    pub slug: String,
}

// Nested serializers (simplified versions for references)

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NestedDeviceType {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub model: String,
    #[serde(default)]
    pub manufacturer: Option<NestedManufacturer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NestedManufacturer {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NestedPlatform {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NestedSite {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NestedIPAddress {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NestedTag {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    pub slug: String,
}

/// Tag reference in a write body, resolved by NetBox by slug
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRef {
    pub slug: String,
}

/// Partial device update sent as a PATCH body
///
/// NetBox replaces the whole tag list on PATCH, so `tags` must carry every
/// tag the device should end up with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagRef>>,
}

impl DeviceUpdate {
    /// Update that sets the device platform
    pub fn platform(platform_id: u64) -> Self {
        Self {
            platform: Some(platform_id),
            ..Default::default()
        }
    }

    /// Update that sets the device tag list, given tag slugs
    pub fn tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: Some(tags.into_iter().map(|slug| TagRef { slug: slug.into() }).collect()),
            ..Default::default()
        }
    }

    /// True when the update would not change anything
    pub fn is_empty(&self) -> bool {
        self.platform.is_none() && self.tags.is_none()
    }
}
