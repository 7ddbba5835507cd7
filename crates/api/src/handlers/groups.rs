use crate::{dto::GroupListResponse, state::AppState};
use axum::{extract::State, Json};
use tracing::debug;

pub async fn list_groups(State(state): State<AppState>) -> Json<GroupListResponse> {
    let groups = state.list_groups.execute();
    debug!(count = groups.len(), "Groups listed");
    Json(GroupListResponse { groups })
}
