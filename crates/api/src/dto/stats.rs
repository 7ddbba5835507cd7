use ipgroups_domain::CacheStats;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsResponse {
    pub groups_count: usize,
    pub total_entries: usize,
    pub groups: BTreeMap<String, usize>,
}

impl From<CacheStats> for CacheStatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            groups_count: stats.groups_count,
            total_entries: stats.total_entries,
            groups: stats.groups,
        }
    }
}
