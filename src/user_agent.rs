//! Shared User-Agent string for archive HTTP traffic.
//!
//! Single source for project URL and UA format so listing and image traffic
//! stay consistent and easy to update (good citizenship; RFC 9308).

/// Project URL for User-Agent identification (good citizenship; RFC 9308).
const PROJECT_UA_URL: &str = "https://github.com/narc-tools/narc-fetch";

/// Default User-Agent sent with every request (identifies the tool).
#[must_use]
pub(crate) fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("narc-fetch/{version} (archive-download-tool; +{PROJECT_UA_URL})")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_ua_contains_project_url_and_version() {
        let ua = default_user_agent();
        assert!(ua.contains(PROJECT_UA_URL), "UA must contain project URL");
        assert_eq!(
            env!("CARGO_PKG_VERSION"),
            ua.strip_prefix("narc-fetch/")
                .and_then(|s| s.split(' ').next())
                .unwrap(),
            "UA must contain crate version"
        );
    }
}
