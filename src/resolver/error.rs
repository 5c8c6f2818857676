//! Error types for listing resolution.

use thiserror::Error;

use crate::download::DownloadError;

/// Errors that can occur while resolving a listing page.
///
/// A resolution failure aborts traversal of that branch only; sibling
/// selectors and listings continue independently.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The listing endpoint returned a non-success status.
    #[error("unexpected status {status} fetching listing {url}")]
    ListingStatus {
        /// The listing URL that was fetched.
        url: String,
        /// The HTTP status code returned.
        status: u16,
    },

    /// Transport-level failure while fetching the listing.
    #[error(transparent)]
    Transport(#[from] DownloadError),
}

impl ResolveError {
    /// Creates a listing status error.
    pub fn listing_status(url: impl Into<String>, status: u16) -> Self {
        Self::ListingStatus {
            url: url.into(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_status_display() {
        let error = ResolveError::listing_status("http://example.com/listing", 503);
        assert_eq!(
            error.to_string(),
            "unexpected status 503 fetching listing http://example.com/listing"
        );
    }
}
