//! Device Tagger
//!
//! One-shot reconciler that keeps NetBox device metadata in line with the
//! hostname naming convention:
//! - Platform pass: sets missing platforms from each device's first tag
//! - Tag pass: adds tags derived from the hostname (never removes any)
//! - STP report: prints the preferred root bridges of the site as JSON
//!
//! Devices are read once per run; each pass fans out over that snapshot.

mod cli;
mod error;
mod inventory;
mod pool;
mod reconciler;
mod report;

use crate::cli::Cli;
use crate::error::TaggerError;
use crate::pool::map_devices;
use crate::reconciler::Reconciler;
use crate::report::StpReport;
use clap::Parser;
use netbox_client::{NetBoxClient, NetBoxClientTrait};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), TaggerError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli.validate()?;
    let site = cli.site_filter();

    info!("Starting Device Tagger");
    info!("Configuration:");
    info!("  NetBox URL: {}", cli.netbox_url);
    info!("  Site: {}", site);
    info!("  Max workers: {}", cli.max_workers);
    if cli.dry_run {
        info!("  Dry run: no changes will be written");
    }

    let client = NetBoxClient::new(cli.netbox_url.clone(), cli.netbox_token.clone())?;
    client.validate_token().await?;
    let client: Arc<dyn NetBoxClientTrait> = Arc::new(client);

    let devices = inventory::fetch_site_devices(client.as_ref(), &site).await?;
    info!("Found {} devices at site {}", devices.len(), site);

    let platforms = if cli.platforms {
        client.query_platforms(&[], true).await?
    } else {
        Vec::new()
    };
    let reconciler = Reconciler::new(client, platforms, cli.dry_run);

    let mut failed = 0;
    if cli.platforms {
        let summary = map_devices("platform", &devices, cli.max_workers, |device| {
            reconciler.verify_platform(device)
        })
        .await;
        failed += summary.failed;
    }
    if cli.tag_pass() {
        let summary = map_devices("tag", &devices, cli.max_workers, |device| {
            reconciler.update_device_tags(device)
        })
        .await;
        failed += summary.failed;
    }

    let report = StpReport::from_devices(&devices);
    println!("{}", serde_json::to_string_pretty(&report)?);

    if failed > 0 {
        return Err(TaggerError::PartialFailure { failed });
    }
    Ok(())
}
