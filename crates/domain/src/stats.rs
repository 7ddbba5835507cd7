use serde::Serialize;
use std::collections::BTreeMap;

/// Point-in-time view of the resolution cache.
///
/// `total_entries` counts every (group, family) slot still present in the
/// table, including entries that have expired but not yet been swept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub groups_count: usize,
    pub total_entries: usize,
    pub groups: BTreeMap<String, usize>,
}
