use crate::{dto::CacheStatsResponse, state::AppState};
use axum::{extract::State, Json};
use tracing::debug;

pub async fn get_cache_stats(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    let stats = state.cache.stats().await;

    debug!(
        groups_count = stats.groups_count,
        total_entries = stats.total_entries,
        "Cache statistics retrieved"
    );

    Json(CacheStatsResponse::from(stats))
}
