//! Fixed inter-download pacing.
//!
//! The archive is a shared service with no published rate limits; a fixed
//! wall-clock gap between consecutive page downloads keeps request rates
//! modest. The gap applies strictly after operations that performed an
//! actual network fetch: skipped (already-existing) files incur no delay,
//! and nothing is paced before the first fetch.

use std::time::Duration;

use tracing::{debug, instrument};

/// Enforces a fixed minimum gap between consecutive downloads.
#[derive(Debug, Clone)]
pub struct Pacer {
    delay: Duration,
}

impl Pacer {
    /// Creates a pacer with the given inter-download delay.
    #[must_use]
    #[instrument(fields(delay_ms = delay.as_millis()))]
    pub fn new(delay: Duration) -> Self {
        debug!("creating pacer");
        Self { delay }
    }

    /// Creates a pacer that applies no delay (`--wait 0`).
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }

    /// Returns whether pacing is disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.delay.is_zero()
    }

    /// Returns the configured delay.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Sleeps for the configured gap.
    ///
    /// Call once after each operation that performed a network fetch;
    /// never call for skipped files.
    pub async fn pause(&self) {
        if self.delay.is_zero() {
            return;
        }
        debug!(delay_ms = self.delay.as_millis(), "pacing before next download");
        tokio::time::sleep(self.delay).await;
    }
}
