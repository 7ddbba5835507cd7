use crate::{CacheRefreshJob, CacheSweepJob};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// Central orchestrator for all background jobs.
///
/// Use the builder pattern to register jobs, then call `.start()` once.
/// The returned handles let the entry point join both loops on shutdown.
///
/// # Example
///
/// ```rust,ignore
/// let handles = JobRunner::new()
///     .with_refresh(CacheRefreshJob::new(cache, groups, 600))
///     .with_sweep(CacheSweepJob::new(cache))
///     .start();
/// ```
pub struct JobRunner {
    refresh: Option<CacheRefreshJob>,
    sweep: Option<CacheSweepJob>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            refresh: None,
            sweep: None,
        }
    }

    pub fn with_refresh(mut self, job: CacheRefreshJob) -> Self {
        self.refresh = Some(job);
        self
    }

    pub fn with_sweep(mut self, job: CacheSweepJob) -> Self {
        self.sweep = Some(job);
        self
    }

    /// Start all registered background jobs.
    pub fn start(self) -> Vec<JoinHandle<()>> {
        info!("Starting background job runner");

        let mut handles = Vec::new();

        if let Some(job) = self.refresh {
            handles.push(Arc::new(job).start());
        }

        if let Some(job) = self.sweep {
            handles.push(Arc::new(job).start());
        }

        info!(jobs = handles.len(), "All background jobs started");
        handles
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
