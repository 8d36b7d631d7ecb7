//! Spanning-tree root bridge selection
//!
//! Distribution switches are preferred as root bridges. Core routers are only
//! considered when a site has no distribution switches at all.

use crate::codes::{CORE_ROUTER, DISTRIBUTION_SWITCH};
use crate::hostname::ParsedHostname;

/// Preferred root and backup root among a site's devices
#[derive(Debug, PartialEq, Eq)]
pub struct StpRoots<'a, T> {
    pub primary: Option<&'a T>,
    pub secondary: Option<&'a T>,
}

impl<T> Default for StpRoots<'_, T> {
    fn default() -> Self {
        Self {
            primary: None,
            secondary: None,
        }
    }
}

/// Determines which devices of a given list should be STP root
///
/// Index 1 becomes primary and index 2 secondary. When several devices share
/// an index, the last one in iteration order wins.
pub fn select_stp_roots<T: AsRef<ParsedHostname>>(devices: &[T]) -> StpRoots<'_, T> {
    let distribution_switches = with_subrole(devices, DISTRIBUTION_SWITCH);
    if distribution_switches.is_empty() {
        scan_indexes(&with_subrole(devices, CORE_ROUTER))
    } else {
        scan_indexes(&distribution_switches)
    }
}

fn with_subrole<'a, T: AsRef<ParsedHostname>>(devices: &'a [T], subrole: &str) -> Vec<&'a T> {
    devices
        .iter()
        .filter(|device| hostname(*device).subrole() == Some(subrole))
        .collect()
}

fn scan_indexes<'a, T: AsRef<ParsedHostname>>(group: &[&'a T]) -> StpRoots<'a, T> {
    let mut roots = StpRoots::default();
    for &device in group {
        match hostname(device).index() {
            Some(1) => roots.primary = Some(device),
            Some(2) => roots.secondary = Some(device),
            _ => {}
        }
    }
    roots
}

fn hostname<T: AsRef<ParsedHostname>>(device: &T) -> &ParsedHostname {
    AsRef::<ParsedHostname>::as_ref(device)
}
