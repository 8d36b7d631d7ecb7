//! Hostname-derived tags
//!
//! Tags are only ever added. The PATCH carries the device's existing tags
//! plus the additions because NetBox replaces the tag list wholesale. Tags
//! are referenced by slug and the device by ID, never by name.

use super::Reconciler;
use crate::error::TaggerError;
use crate::inventory::ParsedDevice;
use crate::pool::Outcome;
use device_naming::{derive_tags, tags_to_add};
use netbox_client::DeviceUpdate;
use tracing::{debug, info};

impl Reconciler {
    /// Updates a device with tags it should have based on hostname
    pub async fn update_device_tags(&self, parsed: &ParsedDevice) -> Result<Outcome, TaggerError> {
        let name = parsed.name();
        let device = &parsed.device;

        let derived = derive_tags(device.model(), &parsed.hostname);
        debug!("{}: Tags has: {:?}", name, device.tag_names());
        debug!("{}: Tags should have: {:?}", name, derived);

        if derived.is_empty() {
            info!("{}: Found no tags in NETBOX_TAGS to apply", name);
            return Ok(Outcome::Unchanged);
        }
        if self.dry_run() {
            info!("{}: Parsed tags from hostname: {:?}", name, derived);
        }

        let additions = tags_to_add(&derived, &parsed.current_tag_labels());
        if additions.is_empty() {
            debug!("{}: Already has all parsed tags", name);
            return Ok(Outcome::Unchanged);
        }

        if self.dry_run() {
            for tag in &additions {
                info!("{}: Would add tag \"{}\"", name, tag);
            }
            return Ok(Outcome::Proposed);
        }

        for tag in &additions {
            info!("{}: Adding tag \"{}\"", name, tag);
        }

        let tags = device
            .tag_slugs()
            .into_iter()
            .chain(additions.iter().copied());
        self.netbox_client
            .update_device(device.id, &DeviceUpdate::tags(tags))
            .await?;
        Ok(Outcome::Updated)
    }
}
