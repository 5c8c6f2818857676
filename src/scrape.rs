//! Link extraction from server-rendered listing markup.
//!
//! The archive's listing pages are plain server-rendered HTML. Child
//! identifiers are recovered by scanning the markup for href targets that
//! match a known pattern; the first capture group of each pattern is the
//! identifier. The patterns are server-specific and fragile, so they live
//! here behind [`LinkPattern`] and can be swapped without touching the
//! traversal logic.
//!
//! Matches are returned in document order and duplicates are preserved:
//! order determines page numbering downstream.

use std::sync::LazyLock;

use regex::Regex;

/// Matches item links on a series listing page.
///
/// The href carries an opaque `jsessionid` path parameter; the captured
/// `avain` value (word characters and dots) is the item identifier.
/// `&` may appear entity-encoded in raw markup, so both forms are accepted.
#[allow(clippy::expect_used)]
static ITEM_LINK_PATTERN: LazyLock<LinkPattern> = LazyLock::new(|| {
    LinkPattern::new(r"Selaus\.action;jsessionid=\w+\?kuvailuTaso=AY&(?:amp;)?avain=([\w.]+)")
        .expect("item link regex is valid") // Static pattern, safe to panic
});

/// Matches section (page image) links on an item listing page.
/// The captured `kuid` value (digits) is the section identifier.
#[allow(clippy::expect_used)]
static SECTION_LINK_PATTERN: LazyLock<LinkPattern> = LazyLock::new(|| {
    LinkPattern::new(r"view\.ka\?kuid=(\d+)")
        .expect("section link regex is valid") // Static pattern, safe to panic
});

/// A compiled href pattern whose first capture group is a child identifier.
#[derive(Debug)]
pub struct LinkPattern {
    regex: Regex,
}

impl LinkPattern {
    /// Compiles a new link pattern.
    ///
    /// The pattern must contain at least one capture group; group 1 is
    /// extracted by [`captures_in`](Self::captures_in).
    ///
    /// # Errors
    ///
    /// Returns `regex::Error` if the pattern does not compile.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(|regex| Self { regex })
    }

    /// Returns every group-1 capture in `markup`, in document order.
    ///
    /// Duplicates pass through unmodified; no deduplication is applied.
    #[must_use]
    pub fn captures_in(&self, markup: &str) -> Vec<String> {
        self.regex
            .captures_iter(markup)
            .filter_map(|captures| captures.get(1))
            .map(|group| group.as_str().to_string())
            .collect()
    }
}

/// Pattern for item links on series listing pages.
#[must_use]
pub fn item_link_pattern() -> &'static LinkPattern {
    &ITEM_LINK_PATTERN
}

/// Pattern for section links on item listing pages.
#[must_use]
pub fn section_link_pattern() -> &'static LinkPattern {
    &SECTION_LINK_PATTERN
}
