use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/groups", get(handlers::list_groups))
        .route("/resolve", get(handlers::resolve_group))
        .route("/resolve-all", get(handlers::resolve_all))
        .route("/resolve-flat", get(handlers::resolve_flat))
        .route("/resolve-flat-all", get(handlers::resolve_flat_all))
        .route("/resolve-flat-all-ipv4", get(handlers::resolve_flat_all_ipv4))
        .route("/resolve-flat-all-ipv6", get(handlers::resolve_flat_all_ipv6))
        .route("/cache/stats", get(handlers::get_cache_stats))
        .with_state(state)
}
