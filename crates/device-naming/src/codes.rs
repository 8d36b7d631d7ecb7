//! Static lookup tables for the hostname naming convention
//!
//! Each table maps the short code embedded in a hostname to the long-form
//! label used as a NetBox tag or slug. Tables are process-wide constants.

use std::fmt;

/// A fixed mapping of short codes to long-form labels
#[derive(Debug, Clone, Copy)]
pub struct CodeTable {
    entries: &'static [(&'static str, &'static str)],
}

impl CodeTable {
    const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Long-form label for a short code
    pub fn name_for(&self, code: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, name)| *name)
    }

    /// Short code for a long-form label (first entry wins when labels repeat)
    pub fn code_for(&self, name: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(code, _)| *code)
    }

    /// All `(code, label)` pairs in declaration order
    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }
}

/// Primary production role. A device is a router if it runs a routing protocol.
pub const ROLES: CodeTable = CodeTable::new(&[
    ("O", "wan-accelerator"),
    ("R", "router"),
    ("S", "switch"),
    ("V", "voice-gateway"),
    ("W", "wireless-controller"),
]);

/// Fine-grained function of a device within its role
pub const SUBROLES: CodeTable = CodeTable::new(&[
    ("AC", "access-switch"),
    ("CR", "core-router"),
    ("DS", "distribution-switch"),
    ("ER", "edge-router"),
    ("LB", "load-balancer"),
    ("SS", "server-switch"),
    ("TS", "console-server"),
    ("VG", "voice-gateway"),
    // Legacy
    ("WA", "wan-router"),
    ("WC", "wireless-controller"),
    ("WO", "wan-accelerator"),
]);

/// Lifecycle status suffix
pub const STATUSES: CodeTable = CodeTable::new(&[
    ("ACT", "active"),
    ("STB", "standby"),
    ("OLD", "legacy"),
]);

/// NetBox tag name -> platform slug
pub const PLATFORM_TAGS: CodeTable = CodeTable::new(&[
    ("Network-Arista", "eos"),
    ("Network-IOS", "ios"),
    ("Network-IOS-XE", "ios"),
    ("Network-Juniper", "junos"),
    ("Network-NXOS", "nxos"),
    ("Network-Riverbed", "rios"),
    ("Network-WLC", "aireos"),
]);

pub const ACCESS_SWITCH: &str = "access-switch";
pub const CORE_ROUTER: &str = "core-router";
pub const DISTRIBUTION_SWITCH: &str = "distribution-switch";
pub const EDGE_ROUTER: &str = "edge-router";
pub const PRIMARY: &str = "primary";
pub const SECONDARY: &str = "secondary";
pub const ACTIVE: &str = "active";
pub const STANDBY: &str = "standby";

/// Tags this tool is allowed to apply. Subroles and role properties only.
pub const NETBOX_TAGS: [&str; 8] = [
    ACCESS_SWITCH,
    CORE_ROUTER,
    DISTRIBUTION_SWITCH,
    EDGE_ROUTER,
    PRIMARY,
    SECONDARY,
    ACTIVE,
    STANDBY,
];

/// Returns the allow-listed tag equal to `label`, if any
pub fn allowed_tag(label: &str) -> Option<&'static str> {
    NETBOX_TAGS.iter().copied().find(|tag| *tag == label)
}

/// A hostname code after table lookup
///
/// Codes missing from their table are kept verbatim as `Raw` rather than
/// rejected, so new codes in the field degrade gracefully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeLabel {
    /// Code translated through its lookup table
    Known {
        code: &'static str,
        name: &'static str,
    },
    /// Code not present in the table
    Raw(String),
}

impl CodeLabel {
    /// Translate `code` through `table`
    pub fn resolve(table: &CodeTable, code: &str) -> Self {
        table
            .entries
            .iter()
            .find(|(c, _)| *c == code)
            .map_or_else(
                || CodeLabel::Raw(code.to_string()),
                |&(code, name)| CodeLabel::Known { code, name },
            )
    }

    /// Short code as it appeared in the hostname
    pub fn code(&self) -> &str {
        match self {
            CodeLabel::Known { code, .. } => code,
            CodeLabel::Raw(code) => code,
        }
    }

    /// Long-form label, or the raw code when untranslated
    pub fn name(&self) -> &str {
        match self {
            CodeLabel::Known { name, .. } => name,
            CodeLabel::Raw(code) => code,
        }
    }

    /// Long-form label, only when the code was translated
    pub fn known_name(&self) -> Option<&'static str> {
        match self {
            CodeLabel::Known { name, .. } => Some(*name),
            CodeLabel::Raw(_) => None,
        }
    }
}

impl fmt::Display for CodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
