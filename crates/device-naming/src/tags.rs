//! Tag derivation from parsed hostnames
//!
//! Tags are derived purely from the hostname and the device model. The
//! result only ever contains entries of [`NETBOX_TAGS`](crate::codes::NETBOX_TAGS).

use crate::codes::{
    allowed_tag, ACCESS_SWITCH, CORE_ROUTER, DISTRIBUTION_SWITCH, PRIMARY, SECONDARY,
};
use crate::hostname::ParsedHostname;
use std::collections::BTreeSet;

/// Models that often double as access stacks when deployed as core routers
const DUAL_ROLE_MODELS: [&str; 2] = ["3850", "3750"];

/// Returns all tags a device should have based on its hostname and model
pub fn derive_tags(model: &str, hostname: &ParsedHostname) -> BTreeSet<&'static str> {
    let mut tags = BTreeSet::new();

    let Some(props) = hostname.props() else {
        return tags;
    };

    // Only translated labels count; raw codes never become tags
    let labels = [Some(&props.role), Some(&props.subrole), props.status.as_ref()];
    tags.extend(
        labels
            .into_iter()
            .flatten()
            .filter_map(|label| label.known_name())
            .filter_map(allowed_tag),
    );

    if tags.contains(DISTRIBUTION_SWITCH) || tags.contains(CORE_ROUTER) {
        match props.index {
            1 => {
                tags.insert(PRIMARY);
            }
            2 => {
                tags.insert(SECONDARY);
            }
            _ => {}
        }
    }

    if tags.contains(CORE_ROUTER) && DUAL_ROLE_MODELS.iter().any(|m| model.contains(m)) {
        tags.insert(ACCESS_SWITCH);
    }

    tags
}

/// Tags from `derived` that the device does not carry yet
///
/// Reconciliation is additive: existing tags are never reported for removal,
/// whether or not they are still derived.
pub fn tags_to_add<S: AsRef<str>>(
    derived: &BTreeSet<&'static str>,
    current: &[S],
) -> BTreeSet<&'static str> {
    derived
        .iter()
        .copied()
        .filter(|tag| !current.iter().any(|existing| existing.as_ref() == *tag))
        .collect()
}

#[cfg(test)]
#[path = "tags_test.rs"]
mod tags_test;
