//! Listing and image endpoint templates for the archive services.
//!
//! Two separate hosts serve the hierarchy: the Vakka browsing service
//! (series listings) and the digitized-material service (item listings and
//! page images). URLs are formed by appending the identifier verbatim as
//! the final query parameter value; dotted identifiers are never altered
//! here (dots are only stripped when identifiers become path components,
//! see [`crate::download::paths`]).

/// Series listing endpoint on the Vakka browsing service.
const SERIES_LISTING_PREFIX: &str =
    "http://www.narc.fi:8080/VakkaWWW/Selaus.action?kuvailuTaso=SARJA&avain=";

/// Item listing endpoint for dotted identifiers discovered via a series listing.
const SERIES_ITEM_LISTING_PREFIX: &str = "http://digi.narc.fi/digi/hae_ay.ka?ay=";

/// Item listing endpoint for purely numeric identifiers supplied directly.
const DIRECT_ITEM_LISTING_PREFIX: &str = "http://digi.narc.fi/digi/slistaus.ka?ay=";

/// High-quality JPEG endpoint for a single section (page) image.
const IMAGE_PREFIX: &str = "http://digi.narc.fi/digi/fetch_hqjpg.ka?kuid=";

/// URL templates for the archive's listing and image endpoints.
///
/// The default set points at the production services; [`rooted_at`]
/// rebuilds all templates under a single base URL for tests and mirrors.
///
/// [`rooted_at`]: Self::rooted_at
#[derive(Debug, Clone)]
pub struct Endpoints {
    series_listing_prefix: String,
    series_item_listing_prefix: String,
    direct_item_listing_prefix: String,
    image_prefix: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            series_listing_prefix: SERIES_LISTING_PREFIX.to_string(),
            series_item_listing_prefix: SERIES_ITEM_LISTING_PREFIX.to_string(),
            direct_item_listing_prefix: DIRECT_ITEM_LISTING_PREFIX.to_string(),
            image_prefix: IMAGE_PREFIX.to_string(),
        }
    }
}

impl Endpoints {
    /// Builds all endpoint templates under a single base URL.
    ///
    /// Path shapes match the production services so link patterns and
    /// request routing behave identically against a mock or mirror.
    #[must_use]
    pub fn rooted_at(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            series_listing_prefix: format!("{base}/VakkaWWW/Selaus.action?kuvailuTaso=SARJA&avain="),
            series_item_listing_prefix: format!("{base}/digi/hae_ay.ka?ay="),
            direct_item_listing_prefix: format!("{base}/digi/slistaus.ka?ay="),
            image_prefix: format!("{base}/digi/fetch_hqjpg.ka?kuid="),
        }
    }

    /// Listing URL for a series identifier.
    #[must_use]
    pub fn series_listing_url(&self, series_id: &str) -> String {
        format!("{}{series_id}", self.series_listing_prefix)
    }

    /// Listing URL for an item identifier.
    ///
    /// The identifier's shape selects the endpoint: a dotted identifier
    /// (discovered via a series listing) resolves through the series-item
    /// endpoint, a purely numeric one through the direct-item endpoint.
    #[must_use]
    pub fn item_listing_url(&self, item_id: &str) -> String {
        if item_id.contains('.') {
            format!("{}{item_id}", self.series_item_listing_prefix)
        } else {
            format!("{}{item_id}", self.direct_item_listing_prefix)
        }
    }

    /// Image URL for a section identifier.
    #[must_use]
    pub fn image_url(&self, section_id: &str) -> String {
        format!("{}{section_id}", self.image_prefix)
    }
}
