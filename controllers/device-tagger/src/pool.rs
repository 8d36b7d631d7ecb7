//! Bounded fan-out of per-device work.
//!
//! Each unit of work touches exactly one device and shares nothing with the
//! others, so completion order is irrelevant. A failing device is logged and
//! counted; it never stops the rest of the pass.

use crate::error::TaggerError;
use crate::inventory::ParsedDevice;
use futures::stream::{self, StreamExt};
use std::fmt;
use std::future::Future;
use tracing::{error, info};

/// Result of a successful per-device operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Change written to NetBox
    Updated,
    /// Change computed but not written (dry run)
    Proposed,
    /// Device already in the desired state
    Unchanged,
    /// Device could not be handled (no tags, no platform mapping)
    Skipped,
}

/// Per-pass tally of device outcomes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassSummary {
    pub updated: usize,
    pub proposed: usize,
    pub unchanged: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl PassSummary {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Updated => self.updated += 1,
            Outcome::Proposed => self.proposed += 1,
            Outcome::Unchanged => self.unchanged += 1,
            Outcome::Skipped => self.skipped += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.updated + self.proposed + self.unchanged + self.skipped + self.failed
    }
}

impl fmt::Display for PassSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} devices: {} updated, {} proposed, {} unchanged, {} skipped, {} failed",
            self.total(),
            self.updated,
            self.proposed,
            self.unchanged,
            self.skipped,
            self.failed
        )
    }
}

/// Run `worker` over every device with at most `max_workers` in flight
pub async fn map_devices<'a, F, Fut>(
    pass: &str,
    devices: &'a [ParsedDevice],
    max_workers: usize,
    worker: F,
) -> PassSummary
where
    F: Fn(&'a ParsedDevice) -> Fut,
    Fut: Future<Output = Result<Outcome, TaggerError>>,
{
    let worker = &worker;
    let results: Vec<(&ParsedDevice, Result<Outcome, TaggerError>)> = stream::iter(devices)
        .map(|device| async move { (device, worker(device).await) })
        .buffer_unordered(max_workers.max(1))
        .collect()
        .await;

    let mut summary = PassSummary::default();
    for (device, result) in results {
        match result {
            Ok(outcome) => summary.record(outcome),
            Err(e) => {
                error!("{}: {} failed: {}", device.name(), pass, e);
                summary.failed += 1;
            }
        }
    }

    info!("{} pass finished, {}", pass, summary);
    summary
}
