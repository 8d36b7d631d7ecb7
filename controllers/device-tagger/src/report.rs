//! STP root bridge report printed at the end of every run.

use crate::inventory::ParsedDevice;
use device_naming::select_stp_roots;
use serde::Serialize;

/// Names of the devices that should be STP root and backup root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StpReport<'a> {
    pub primary: Option<&'a str>,
    pub secondary: Option<&'a str>,
}

impl<'a> StpReport<'a> {
    pub fn from_devices(devices: &'a [ParsedDevice]) -> Self {
        let roots = select_stp_roots(devices);
        Self {
            primary: roots.primary.map(ParsedDevice::name),
            secondary: roots.secondary.map(ParsedDevice::name),
        }
    }
}
