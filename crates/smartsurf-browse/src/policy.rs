//! Thresholds and delays gating side effects during a search scan.

use std::time::Duration;

/// Injected policy for the gate and the collector. Tests supply their own;
/// the CLI builds one from the application config.
#[derive(Debug, Clone)]
pub struct BrowsePolicy {
    /// Minimum parsed mutual-connection count required before the inline
    /// connect flow is attempted (inclusive floor).
    pub min_mutual_connections: u64,

    /// How long to let a search page render after navigation before cards
    /// are enumerated.
    pub settle_delay: Duration,
}

impl Default for BrowsePolicy {
    fn default() -> Self {
        Self {
            min_mutual_connections: 10,
            settle_delay: Duration::from_secs(5),
        }
    }
}
