//! Query utilities for NetBox API
//!
//! Provides helpers for building list queries and handling pagination.

use crate::common::{HttpClient, PaginatedResponse};
use crate::error::NetBoxError;
use serde::de::DeserializeOwned;

/// Query a list endpoint (e.g. `dcim/devices`) with optional filtering
///
/// With `fetch_all` every page is followed; otherwise only the first page is
/// returned.
pub async fn query_resources<T: DeserializeOwned>(
    http: &HttpClient,
    endpoint: &str,
    filters: &[(&str, &str)],
    fetch_all: bool,
) -> Result<Vec<T>, NetBoxError> {
    let mut url = format!("/api/{}/", endpoint);

    if !filters.is_empty() {
        url = format!("{}?{}", url, http.build_query_string(filters));
    }

    if fetch_all {
        http.fetch_all_pages(http.build_url(&url)).await
    } else {
        let response: PaginatedResponse<T> = http.get(&url).await?;
        Ok(response.results)
    }
}
