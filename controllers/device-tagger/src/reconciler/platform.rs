//! Platform verification
//!
//! Devices without a platform get one from the platform-tag table, keyed by
//! the device's first tag. Devices that already have a platform are never
//! touched.

use super::Reconciler;
use crate::error::TaggerError;
use crate::inventory::ParsedDevice;
use crate::pool::Outcome;
use device_naming::PLATFORM_TAGS;
use netbox_client::DeviceUpdate;
use tracing::{debug, info, warn};

impl Reconciler {
    pub async fn verify_platform(&self, parsed: &ParsedDevice) -> Result<Outcome, TaggerError> {
        let name = parsed.name();
        let device = &parsed.device;

        if let Some(platform) = &device.platform {
            info!("{}: Platform already set to \"{}\", doing nothing", name, platform.slug);
            return Ok(Outcome::Unchanged);
        }

        let Some(tag) = device.tags.first() else {
            info!("{}: No tags to map a platform from, doing nothing", name);
            return Ok(Outcome::Skipped);
        };
        debug!("{}: Tag: \"{}\"", name, tag.name);

        let Some(platform_slug) = PLATFORM_TAGS.name_for(&tag.name) else {
            info!("{}: No platform mapped for tag {}, doing nothing", name, tag.name);
            return Ok(Outcome::Skipped);
        };
        debug!("{}: Platform slug: \"{}\"", name, platform_slug);

        let Some(platform_id) = self.platform_id(platform_slug) else {
            warn!("{}: Platform \"{}\" does not exist in NetBox, doing nothing", name, platform_slug);
            return Ok(Outcome::Skipped);
        };
        debug!("{}: Platform ID: \"{}\"", name, platform_id);

        if self.dry_run() {
            info!("{}: Would update platform to \"{}\"", name, platform_slug);
            return Ok(Outcome::Proposed);
        }

        self.netbox_client
            .update_device(device.id, &DeviceUpdate::platform(platform_id))
            .await?;
        info!("{}: Updated platform to \"{}\"", name, platform_slug);
        Ok(Outcome::Updated)
    }
}
