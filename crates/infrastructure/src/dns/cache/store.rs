use super::entry::CacheEntry;
use ipgroups_application::ports::IpResolver;
use ipgroups_domain::{AddressFamily, CacheStats, GroupSet, Resolution};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, info};

type FamilyEntries = HashMap<AddressFamily, CacheEntry>;

/// TTL-based resolution cache keyed by (group, address-family).
///
/// The table lives behind a single reader/writer lock: `get`, `stats` and
/// `expires_in` share read access; every write path excludes everything
/// for its duration. The refresh paths (`update_group`,
/// `update_all_groups`) deliberately hold the write guard across the
/// upstream lookups so that a refresh cycle is one atomic critical
/// section — readers block for the whole cycle. That is the only place
/// the lock is held across anything but in-memory mutation.
pub struct ResolutionCache {
    entries: RwLock<HashMap<Arc<str>, FamilyEntries>>,
    ttl: Duration,
    resolver: Arc<dyn IpResolver>,
}

impl ResolutionCache {
    pub fn new(resolver: Arc<dyn IpResolver>, ttl: Duration) -> Self {
        info!(ttl_secs = ttl.as_secs(), "Initializing resolution cache");
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            resolver,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Look up a slot. `None` covers both "never cached" and "expired":
    /// an expired entry is treated as absent but left in place for the
    /// sweep to reap.
    pub async fn get(&self, group: &str, family: AddressFamily) -> Option<Arc<[Resolution]>> {
        let entries = self.entries.read().await;
        let entry = entries.get(group)?.get(&family)?;

        if entry.is_expired(Instant::now()) {
            return None;
        }

        Some(Arc::clone(&entry.results))
    }

    /// Overwrite a slot with a fresh expiry of now + TTL. Last writer
    /// wins; there are no merge semantics.
    pub async fn insert(&self, group: &str, family: AddressFamily, results: Arc<[Resolution]>) {
        let entry = CacheEntry::new(results, Instant::now() + self.ttl);

        let mut entries = self.entries.write().await;
        entries
            .entry(Arc::from(group))
            .or_default()
            .insert(family, entry);

        debug!(group = %group, family = %family, "Cache slot updated");
    }

    /// Re-resolve one group for every address family and overwrite its
    /// three slots, all under a single write-lock acquisition with one
    /// common expiry stamp.
    pub async fn update_group(&self, group: &str, domains: &[Arc<str>]) {
        let mut entries = self.entries.write().await;
        self.refresh_group(&mut entries, group, domains).await;
    }

    /// Re-resolve every group for every address family under one
    /// write-lock acquisition. The whole refresh cycle is atomic with
    /// respect to readers and other writers, at the cost of blocking
    /// them while the lookups run.
    pub async fn update_all_groups(&self, groups: &GroupSet) {
        let mut entries = self.entries.write().await;
        for (group, domains) in groups.iter() {
            self.refresh_group(&mut entries, group, domains).await;
        }
    }

    async fn refresh_group(
        &self,
        entries: &mut HashMap<Arc<str>, FamilyEntries>,
        group: &str,
        domains: &[Arc<str>],
    ) {
        let mut resolved = Vec::with_capacity(AddressFamily::ALL.len());
        for family in AddressFamily::ALL {
            let results: Arc<[Resolution]> = self
                .resolver
                .resolve_many_with_filter(domains, family)
                .await
                .into();
            resolved.push((family, results));
        }

        // One expiry stamp for all three families of the group
        let expires_at = Instant::now() + self.ttl;
        let slot = entries.entry(Arc::from(group)).or_default();
        for (family, results) in resolved {
            slot.insert(family, CacheEntry::new(results, expires_at));
        }

        debug!(group = %group, domains = domains.len(), "Group refreshed");
    }

    /// Delete every expired slot and every group left without slots.
    /// Returns the number of entries removed.
    pub async fn sweep_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        let now = Instant::now();
        let mut removed = 0;

        entries.retain(|_, families| {
            families.retain(|_, entry| {
                if entry.is_expired(now) {
                    removed += 1;
                    false
                } else {
                    true
                }
            });
            !families.is_empty()
        });

        removed
    }

    /// Counts reflect the table as stored: entries that have expired but
    /// not yet been swept are still included.
    pub async fn stats(&self) -> CacheStats {
        let entries = self.entries.read().await;

        let mut stats = CacheStats {
            groups_count: entries.len(),
            ..Default::default()
        };

        for (group, families) in entries.iter() {
            stats.groups.insert(group.to_string(), families.len());
            stats.total_entries += families.len();
        }

        stats
    }

    /// Remaining lifetime of a slot; `None` once expired or absent.
    pub async fn expires_in(&self, group: &str, family: AddressFamily) -> Option<Duration> {
        let entries = self.entries.read().await;
        let entry = entries.get(group)?.get(&family)?;

        let now = Instant::now();
        if entry.is_expired(now) {
            None
        } else {
            Some(entry.expires_at - now)
        }
    }
}
