use std::path::PathBuf;
use std::time::Duration;

/// Application configuration, assembled from environment variables.
///
/// Every knob except the search URL has a default, so a run needs exactly
/// one variable set. Delay knobs are stored in seconds and exposed as
/// [`Duration`] accessors.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// People-search URL the scan starts from.
    pub search_url: String,

    /// Minimum mutual-connection count before an inline connect is sent.
    pub min_mutual_connections: u64,

    /// Settle period after navigating to a search page.
    pub settle_delay_secs: u64,

    /// Settle period after navigating to a profile page.
    pub profile_settle_secs: u64,

    /// Pause between processed profiles.
    pub inter_profile_delay_secs: u64,

    /// Chromium user-data directory; keeping it persistent preserves the
    /// operator's login across runs.
    pub user_data_dir: PathBuf,

    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl AppConfig {
    #[must_use]
    pub fn settle_delay(&self) -> Duration {
        Duration::from_secs(self.settle_delay_secs)
    }

    #[must_use]
    pub fn profile_settle(&self) -> Duration {
        Duration::from_secs(self.profile_settle_secs)
    }

    #[must_use]
    pub fn inter_profile_delay(&self) -> Duration {
        Duration::from_secs(self.inter_profile_delay_secs)
    }
}
