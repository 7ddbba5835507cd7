pub mod flat;
pub mod groups;
pub mod health;
pub mod resolve;
pub mod stats;

pub use flat::{resolve_flat, resolve_flat_all, resolve_flat_all_ipv4, resolve_flat_all_ipv6};
pub use groups::list_groups;
pub use health::health_check;
pub use resolve::{resolve_all, resolve_group};
pub use stats::get_cache_stats;

use crate::state::AppState;
use axum::http::StatusCode;
use ipgroups_domain::{AddressFamily, Resolution};
use std::sync::Arc;
use tracing::debug;

/// Parse the `type` query parameter into an address family.
pub(crate) fn parse_family(
    value: Option<&str>,
) -> Result<AddressFamily, (StatusCode, String)> {
    AddressFamily::from_query(value).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            "type parameter must be 'ipv4' or 'ipv6'".to_string(),
        )
    })
}

/// Serve a group from the cache, resolving and filling the slot on a miss.
///
/// The refresh job is the only proactive writer; this path only runs the
/// resolver when a reader arrives before the slot exists (or after it
/// expired).
pub(crate) async fn fetch_group(
    state: &AppState,
    group: &str,
    domains: &[Arc<str>],
    family: AddressFamily,
) -> Arc<[Resolution]> {
    if let Some(results) = state.cache.get(group, family).await {
        debug!(group = %group, family = %family, "Cache hit");
        return results;
    }

    debug!(group = %group, family = %family, "Cache miss, resolving");
    let results: Arc<[Resolution]> = state.resolve_group.execute(domains, family).await.into();
    state
        .cache
        .insert(group, family, Arc::clone(&results))
        .await;
    results
}
