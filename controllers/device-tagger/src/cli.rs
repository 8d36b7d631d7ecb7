//! Command line and environment configuration.

use crate::error::TaggerError;
use clap::Parser;

/// Derive NetBox platforms and tags from device hostnames
#[derive(Debug, Clone, Parser)]
#[command(name = "device-tagger", version, about)]
pub struct Cli {
    /// Site to query devices from
    #[arg(short, long)]
    pub site: String,

    /// Update device tags based on parsed hostname
    #[arg(short, long)]
    pub tags: bool,

    /// Set missing device platforms based on the device's first tag
    #[arg(short, long)]
    pub platforms: bool,

    /// Print summary of proposed changes without applying them (implies --tags)
    #[arg(short, long)]
    pub dry_run: bool,

    /// NetBox base URL
    #[arg(long, env = "NETBOX_URL", default_value = "http://netbox.netbox:80")]
    pub netbox_url: String,

    /// NetBox API token
    #[arg(long, env = "NETBOX_TOKEN", hide_env_values = true)]
    pub netbox_token: String,

    /// Maximum number of concurrent device updates
    #[arg(long, env = "MAX_WORKERS", default_value_t = 8)]
    pub max_workers: usize,
}

impl Cli {
    /// Reject values clap cannot express as constraints
    pub fn validate(&self) -> Result<(), TaggerError> {
        if self.site.trim().is_empty() {
            return Err(TaggerError::InvalidConfig("--site must not be empty".to_string()));
        }
        if self.netbox_token.is_empty() {
            return Err(TaggerError::InvalidConfig(
                "NETBOX_TOKEN environment variable is required".to_string(),
            ));
        }
        if self.max_workers == 0 {
            return Err(TaggerError::InvalidConfig("MAX_WORKERS must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Whether the tag pass runs; a dry run always proposes tags
    pub fn tag_pass(&self) -> bool {
        self.tags || self.dry_run
    }

    /// Site filter as NetBox expects it
    pub fn site_filter(&self) -> String {
        self.site.trim().to_uppercase()
    }
}
