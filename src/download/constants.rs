//! Constants for the download module (timeouts, pacing).

use std::time::Duration;

/// Default HTTP connect timeout (30 seconds).
pub const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Default HTTP read timeout (2 minutes; covers listing pages and page scans).
pub const READ_TIMEOUT_SECS: u64 = 120;

/// Default pause between consecutive page downloads (0.5 seconds).
pub const DEFAULT_WAIT: Duration = Duration::from_millis(500);
