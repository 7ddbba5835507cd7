use ipgroups_domain::Resolution;
use std::sync::Arc;
use std::time::Instant;

/// One (group, family) slot: the resolved list plus its absolute expiry.
///
/// Slots are always replaced whole; there is no partial update.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub results: Arc<[Resolution]>,
    pub expires_at: Instant,
}

impl CacheEntry {
    pub fn new(results: Arc<[Resolution]>, expires_at: Instant) -> Self {
        Self {
            results,
            expires_at,
        }
    }

    /// An entry whose expiry is at-or-before `now` is stale. `get`
    /// treats stale entries as absent; only the sweep deletes them.
    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at <= now
    }
}
