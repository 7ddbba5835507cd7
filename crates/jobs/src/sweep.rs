use ipgroups_infrastructure::dns::ResolutionCache;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Fixed sweep cadence, independent of both the TTL and the refresh
/// interval. Not surfaced in configuration.
const SWEEP_INTERVAL_SECS: u64 = 300;

/// Periodic eviction of expired cache entries.
///
/// Reads never delete; every expired slot stays in the table until this
/// job reaps it, along with any group left without slots.
pub struct CacheSweepJob {
    cache: Arc<ResolutionCache>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CacheSweepJob {
    pub fn new(cache: Arc<ResolutionCache>) -> Self {
        Self {
            cache,
            interval_secs: SWEEP_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(interval_secs = self.interval_secs, "Starting cache sweep job");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CacheSweepJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let removed = self.cache.sweep_expired().await;
                        if removed > 0 {
                            info!(removed, "Sweep evicted expired entries");
                        } else {
                            debug!("Sweep found nothing to evict");
                        }
                    }
                }
            }
        })
    }
}
