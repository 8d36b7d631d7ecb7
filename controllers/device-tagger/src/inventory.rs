//! Device snapshot with parsed hostnames.
//!
//! Devices are fetched once per run and never re-read; every pass works on
//! this in-memory snapshot.

use crate::error::TaggerError;
use device_naming::{parse_hostname, ParsedHostname};
use netbox_client::{Device, NetBoxClientTrait};
use tracing::debug;

/// A NetBox device paired with its decoded hostname
#[derive(Debug, Clone)]
pub struct ParsedDevice {
    pub device: Device,
    pub hostname: ParsedHostname,
}

impl ParsedDevice {
    /// Decode the device's hostname
    pub fn parse(device: Device) -> Result<Self, TaggerError> {
        let hostname = parse_hostname(device.name())?;
        Ok(Self { device, hostname })
    }

    pub fn name(&self) -> &str {
        self.device.name()
    }

    /// Every name and slug of the tags the device currently carries
    pub fn current_tag_labels(&self) -> Vec<&str> {
        self.device
            .tags
            .iter()
            .flat_map(|tag| [tag.name.as_str(), tag.slug.as_str()])
            .collect()
    }
}

impl AsRef<ParsedHostname> for ParsedDevice {
    fn as_ref(&self) -> &ParsedHostname {
        &self.hostname
    }
}

/// Fetch all devices with a primary IP at `site` and parse their hostnames
pub async fn fetch_site_devices(
    client: &dyn NetBoxClientTrait,
    site: &str,
) -> Result<Vec<ParsedDevice>, TaggerError> {
    let devices = client
        .query_devices(&[("has_primary_ip", "true"), ("site", site)], true)
        .await?;
    debug!("Received {} devices from NetBox", devices.len());

    let devices = devices
        .into_iter()
        .map(ParsedDevice::parse)
        .collect::<Result<Vec<_>, _>>()?;
    debug!(
        "Parsed hostnames into properties ({} of {} follow the naming convention)",
        devices.iter().filter(|d| d.hostname.is_matched()).count(),
        devices.len()
    );

    Ok(devices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use netbox_client::MockNetBoxClient;

    #[tokio::test]
    async fn test_fetch_site_devices() {
        let mock = MockNetBoxClient::new("http://test-netbox");
        let helpers = mock.helpers();
        mock.add_device(helpers.device(1, "SFUL01DS01", "N9K", Some("FUL"), &[]));
        mock.add_device(helpers.device(2, "lab-switch", "N9K", Some("FUL"), &[]));
        mock.add_device(helpers.device(3, "SNYC01DS01", "N9K", Some("NYC"), &[]));

        let devices = fetch_site_devices(&mock, "FUL").await.unwrap();
        assert_eq!(devices.len(), 2);
        assert!(devices[0].hostname.is_matched());
        assert_eq!(devices[1].hostname, ParsedHostname::Unmatched);
    }

    #[test]
    fn test_current_tag_labels_include_names_and_slugs() {
        let mock = MockNetBoxClient::new("http://test-netbox");
        let device = mock.helpers().device(1, "SFUL01DS01", "N9K", None, &["Core Router"]);
        let parsed = ParsedDevice::parse(device).unwrap();
        assert_eq!(parsed.current_tag_labels(), vec!["Core Router", "core-router"]);
    }
}
