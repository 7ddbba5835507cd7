use serde::Deserialize;

/// Cache TTL and refresh cadence.
///
/// The eviction sweep runs on its own fixed 5-minute cadence and is
/// deliberately not configurable here.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Lifetime of every cache entry, in seconds. A single TTL governs
    /// all entries; upstream record TTLs are ignored.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// Interval between full refresh cycles, in seconds.
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
}

fn default_ttl_secs() -> u64 {
    900
}

fn default_refresh_interval_secs() -> u64 {
    600
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            refresh_interval_secs: default_refresh_interval_secs(),
        }
    }
}
