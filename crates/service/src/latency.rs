//! Simulated network latency configuration.

use std::time::Duration;

/// Per-operation artificial delay, standing in for real network time.
///
/// Injected into [`crate::CatalogService`] rather than hard-coded so tests
/// can run against [`LatencyProfile::instant`] or a paused clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub list: Duration,
    pub get: Duration,
    pub search: Duration,
    pub categories: Duration,
}

impl Default for LatencyProfile {
    /// The delays the mock API has always shipped with.
    fn default() -> Self {
        Self {
            list: Duration::from_millis(800),
            get: Duration::from_millis(600),
            search: Duration::from_millis(500),
            categories: Duration::from_millis(300),
        }
    }
}

impl LatencyProfile {
    /// No delay at all; answers resolve on the first poll.
    pub const fn instant() -> Self {
        Self {
            list: Duration::ZERO,
            get: Duration::ZERO,
            search: Duration::ZERO,
            categories: Duration::ZERO,
        }
    }
}
