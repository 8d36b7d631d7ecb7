//! Per-device reconcilers
//!
//! Handles: platform verification, hostname-derived tags

pub mod platform;
pub mod tags;
#[cfg(test)]
mod tags_test;

use netbox_client::{NetBoxClientTrait, Platform};
use std::sync::Arc;

/// Applies platform and tag changes to single devices
///
/// Holds the NetBox client and the platform list fetched at startup. In dry-run
/// mode every change is computed and logged but nothing is written.
pub struct Reconciler {
    netbox_client: Arc<dyn NetBoxClientTrait>,
    platforms: Vec<Platform>,
    dry_run: bool,
}

impl std::fmt::Debug for Reconciler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reconciler")
            .field("netbox_url", &self.netbox_client.base_url())
            .field("platforms", &self.platforms.len())
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

impl Reconciler {
    pub fn new(netbox_client: Arc<dyn NetBoxClientTrait>, platforms: Vec<Platform>, dry_run: bool) -> Self {
        Self {
            netbox_client,
            platforms,
            dry_run,
        }
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// NetBox ID of the platform with `slug`
    fn platform_id(&self, slug: &str) -> Option<u64> {
        self.platforms.iter().find(|p| p.slug == slug).map(|p| p.id)
    }
}
