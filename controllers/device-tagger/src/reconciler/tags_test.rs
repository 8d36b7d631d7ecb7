//! Unit tests for hostname-derived tag updates

use super::Reconciler;
use crate::inventory::ParsedDevice;
use crate::pool::{map_devices, Outcome};
use netbox_client::{Device, DeviceUpdate, MockNetBoxClient};
use std::sync::Arc;

fn setup(dry_run: bool) -> (MockNetBoxClient, Reconciler) {
    let mock = MockNetBoxClient::new("http://test-netbox");
    let reconciler = Reconciler::new(Arc::new(mock.clone()), Vec::new(), dry_run);
    (mock, reconciler)
}

fn parsed(mock: &MockNetBoxClient, device: Device) -> ParsedDevice {
    mock.add_device(device.clone());
    ParsedDevice::parse(device).unwrap()
}

#[tokio::test]
async fn test_adds_derived_tags_and_keeps_existing() {
    let (mock, reconciler) = setup(false);
    let helpers = mock.helpers();
    let device = parsed(&mock, helpers.device(10, "SFUL01DS01", "N9K", Some("FUL"), &["Network-NXOS"]));

    let outcome = reconciler.update_device_tags(&device).await.unwrap();
    assert_eq!(outcome, Outcome::Updated);
    assert_eq!(
        mock.updates(),
        vec![(10, DeviceUpdate::tags(["network-nxos", "distribution-switch", "primary"]))]
    );

    let stored = mock.device(10).unwrap();
    assert!(stored.has_tag("Network-NXOS"));
    assert!(stored.has_tag("distribution-switch"));
    assert!(stored.has_tag("primary"));
}

#[tokio::test]
async fn test_second_run_is_unchanged() {
    let (mock, reconciler) = setup(false);
    let helpers = mock.helpers();
    let device = parsed(&mock, helpers.device(10, "RFUL01CR02", "ISR4451", None, &[]));

    assert_eq!(reconciler.update_device_tags(&device).await.unwrap(), Outcome::Updated);

    let refreshed = ParsedDevice::parse(mock.device(10).unwrap()).unwrap();
    assert_eq!(reconciler.update_device_tags(&refreshed).await.unwrap(), Outcome::Unchanged);
    assert_eq!(mock.updates().len(), 1);
}

#[tokio::test]
async fn test_existing_tag_matched_by_slug() {
    let (mock, reconciler) = setup(false);
    let helpers = mock.helpers();
    // "Access Switch" slugifies to "access-switch"
    let device = parsed(&mock, helpers.device(10, "SFUL01AC03", "WS-C2960X", None, &["Access Switch"]));

    let outcome = reconciler.update_device_tags(&device).await.unwrap();
    assert_eq!(outcome, Outcome::Unchanged);
    assert!(mock.updates().is_empty());
}

#[tokio::test]
async fn test_unmatched_hostname_gets_no_tags() {
    let (mock, reconciler) = setup(false);
    let helpers = mock.helpers();
    let device = parsed(&mock, helpers.device(10, "lab-switch-1", "N9K", None, &["legacy"]));

    assert_eq!(reconciler.update_device_tags(&device).await.unwrap(), Outcome::Unchanged);
    assert!(mock.updates().is_empty());
}

#[tokio::test]
async fn test_unnamed_device_derives_nothing() {
    let (mock, reconciler) = setup(false);
    let helpers = mock.helpers();
    let mut device = helpers.device(10, "SFUL01DS01", "N9K", None, &[]);
    device.name = None;
    let device = parsed(&mock, device);

    assert_eq!(reconciler.update_device_tags(&device).await.unwrap(), Outcome::Unchanged);
    assert!(mock.updates().is_empty());
}

#[tokio::test]
async fn test_same_name_at_other_site_is_untouched() {
    let (mock, reconciler) = setup(false);
    let helpers = mock.helpers();
    mock.add_device(helpers.device(5, "SFUL01DS01", "N9K", Some("NYC"), &["Network-IOS", "keep-me"]));
    let device = parsed(&mock, helpers.device(10, "SFUL01DS01", "N9K", Some("FUL"), &["Network-NXOS"]));

    assert_eq!(reconciler.update_device_tags(&device).await.unwrap(), Outcome::Updated);

    let updated_ids: Vec<u64> = mock.updates().iter().map(|(id, _)| *id).collect();
    assert_eq!(updated_ids, vec![10]);
    assert_eq!(mock.device(5).unwrap().tag_names(), vec!["Network-IOS", "keep-me"]);
    assert_eq!(
        mock.device(10).unwrap().tag_names(),
        vec!["Network-NXOS", "distribution-switch", "primary"]
    );
}

#[tokio::test]
async fn test_additions_reference_existing_tags_by_slug() {
    let (mock, reconciler) = setup(false);
    let helpers = mock.helpers();
    // "Core Router" exists in NetBox with slug "core-router" but not on this device
    mock.add_device(helpers.device(5, "RNYC01CR01", "ISR4451", Some("NYC"), &["Core Router"]));
    let device = parsed(&mock, helpers.device(10, "RFUL01CR03", "ISR4451", Some("FUL"), &[]));

    assert_eq!(reconciler.update_device_tags(&device).await.unwrap(), Outcome::Updated);
    assert_eq!(mock.updates(), vec![(10, DeviceUpdate::tags(["core-router"]))]);
    assert_eq!(mock.device(10).unwrap().tag_names(), vec!["Core Router"]);
}

#[tokio::test]
async fn test_dry_run_writes_nothing() {
    let (mock, reconciler) = setup(true);
    let helpers = mock.helpers();
    let device = parsed(&mock, helpers.device(10, "SFUL01DS02-STB", "N9K", None, &[]));

    assert_eq!(reconciler.update_device_tags(&device).await.unwrap(), Outcome::Proposed);
    assert!(mock.updates().is_empty());
    assert!(mock.device(10).unwrap().tags.is_empty());
}

#[tokio::test]
async fn test_failures_are_tallied_per_device() {
    let (mock, reconciler) = setup(false);
    let helpers = mock.helpers();
    let devices = vec![
        parsed(&mock, helpers.device(10, "SFUL01DS01", "N9K", None, &[])),
        parsed(&mock, helpers.device(11, "SFUL01DS02", "N9K", None, &[])),
        parsed(&mock, helpers.device(12, "lab", "N9K", None, &[])),
    ];
    mock.fail_updates_for(10);

    let summary = map_devices("tag", &devices, 4, |device| reconciler.update_device_tags(device)).await;
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.updated, 1);
    assert_eq!(summary.unchanged, 1);
    assert!(mock.device(11).unwrap().has_tag("secondary"));
}
