use ipgroups_domain::GroupSet;
use ipgroups_infrastructure::dns::ResolutionCache;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Periodic full refresh of the resolution cache.
///
/// The first tick fires immediately, so starting the job also performs
/// the cold fill. Each cycle re-resolves every group for every address
/// family in one atomic cache update; this is the sole proactive writer.
pub struct CacheRefreshJob {
    cache: Arc<ResolutionCache>,
    groups: Arc<GroupSet>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CacheRefreshJob {
    pub fn new(cache: Arc<ResolutionCache>, groups: Arc<GroupSet>, interval_secs: u64) -> Self {
        Self {
            cache,
            groups,
            interval_secs,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(
            interval_secs = self.interval_secs,
            groups = self.groups.len(),
            "Starting cache refresh job"
        );

        if self.groups.is_empty() {
            warn!("No groups configured; refresh cycles will be no-ops");
        }

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CacheRefreshJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let started = Instant::now();
                        self.cache.update_all_groups(&self.groups).await;
                        info!(
                            groups = self.groups.len(),
                            elapsed_ms = started.elapsed().as_millis() as u64,
                            "Cache refresh cycle completed"
                        );
                    }
                }
            }
        })
    }
}
