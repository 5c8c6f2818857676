//! Listing resolution: series → item identifiers, item → section identifiers.
//!
//! Each resolver fetches one listing page and extracts child identifiers
//! from its markup via [`crate::scrape`]. Output preserves document order
//! and keeps duplicates; order determines page numbering downstream.
//!
//! A non-success listing status is an error here; the traversal driver
//! reports it and continues with the remaining selectors, so a dead branch
//! never aborts the run.

mod endpoints;
mod error;

pub use endpoints::Endpoints;
pub use error::ResolveError;

use tracing::{info, instrument};

use crate::download::HttpClient;
use crate::scrape::{self, LinkPattern};

/// Resolves a series identifier into the ordered item identifiers it contains.
///
/// # Errors
///
/// Returns `ResolveError` if the listing fetch fails at the transport level
/// or the endpoint returns a non-success status.
#[instrument(skip(client, endpoints))]
pub async fn series_items(
    client: &HttpClient,
    endpoints: &Endpoints,
    series_id: &str,
) -> Result<Vec<String>, ResolveError> {
    let url = endpoints.series_listing_url(series_id);
    info!(series = %series_id, url = %url, "fetching series listing");
    let items = resolve_listing(client, &url, scrape::item_link_pattern()).await?;
    info!(series = %series_id, items = items.len(), "found items");
    Ok(items)
}

/// Resolves an item identifier into the ordered section identifiers it contains.
///
/// The identifier's shape (dotted vs. purely numeric) selects the listing
/// endpoint; see [`Endpoints::item_listing_url`].
///
/// # Errors
///
/// Returns `ResolveError` if the listing fetch fails at the transport level
/// or the endpoint returns a non-success status.
#[instrument(skip(client, endpoints))]
pub async fn item_sections(
    client: &HttpClient,
    endpoints: &Endpoints,
    item_id: &str,
) -> Result<Vec<String>, ResolveError> {
    let url = endpoints.item_listing_url(item_id);
    info!(item = %item_id, url = %url, "fetching item listing");
    let sections = resolve_listing(client, &url, scrape::section_link_pattern()).await?;
    info!(item = %item_id, sections = sections.len(), "found sections");
    Ok(sections)
}

/// Shared fetch-and-extract step for both listing kinds.
async fn resolve_listing(
    client: &HttpClient,
    url: &str,
    pattern: &LinkPattern,
) -> Result<Vec<String>, ResolveError> {
    let (status, body) = client.get_text(url).await?;
    if !status.is_success() {
        return Err(ResolveError::listing_status(url, status.as_u16()));
    }
    Ok(pattern.captures_in(&body))
}
