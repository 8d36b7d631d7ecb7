//! NetBox REST API Client
//!
//! A Rust client library for the parts of the NetBox REST API used to
//! reconcile device platforms and tags.
//!
//! # Example
//!
//! ```no_run
//! use netbox_client::{DeviceUpdate, NetBoxClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a client
//! let client = NetBoxClient::new(
//!     "http://netbox:80".to_string(),
//!     "your-api-token".to_string(),
//! )?;
//!
//! // Query devices with a primary IP at a site
//! let devices = client
//!     .query_devices(&[("has_primary_ip", "true"), ("site", "FUL")], true)
//!     .await?;
//!
//! // Set the platform of the first one
//! if let Some(device) = devices.first() {
//!     client.update_device(device.id, &DeviceUpdate::platform(3)).await?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **DCIM Operations**: Query platforms and devices, update devices by ID
//! - **Pagination**: Support for fetching all pages of large result sets
//! - **Mocking**: `MockNetBoxClient` behind the `test-util` feature

pub mod client;
pub mod common;
pub mod error;
pub mod models;
#[path = "trait.rs"]
pub mod netbox_trait;
#[cfg(any(test, feature = "test-util"))]
pub mod mock;

pub use client::NetBoxClient;
pub use common::{HttpClient, PaginatedResponse};
pub use error::NetBoxError;
pub use models::*;
pub use netbox_trait::NetBoxClientTrait;
#[cfg(any(test, feature = "test-util"))]
pub use mock::MockNetBoxClient;
