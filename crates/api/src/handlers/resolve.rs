use super::{fetch_group, parse_family};
use crate::{dto::ResolutionEntry, state::AppState};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct ResolveParams {
    pub group: Option<String>,
    #[serde(rename = "type")]
    pub family: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResolveAllParams {
    #[serde(rename = "type")]
    pub family: Option<String>,
}

pub async fn resolve_group(
    State(state): State<AppState>,
    Query(params): Query<ResolveParams>,
) -> Result<Json<Vec<ResolutionEntry>>, (StatusCode, String)> {
    let family = parse_family(params.family.as_deref())?;

    let group = params
        .group
        .as_deref()
        .filter(|g| !g.is_empty())
        .ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                "group parameter is required".to_string(),
            )
        })?;

    let domains = Arc::clone(state.groups.get(group).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            format!("group '{}' not found", group),
        )
    })?);

    let results = fetch_group(&state, group, &domains, family).await;
    Ok(Json(results.iter().map(ResolutionEntry::from).collect()))
}

pub async fn resolve_all(
    State(state): State<AppState>,
    Query(params): Query<ResolveAllParams>,
) -> Result<Json<BTreeMap<String, Vec<ResolutionEntry>>>, (StatusCode, String)> {
    let family = parse_family(params.family.as_deref())?;

    let mut all_results = BTreeMap::new();
    for (group, domains) in state.groups.iter() {
        let results = fetch_group(&state, group, domains, family).await;
        all_results.insert(
            group.to_string(),
            results.iter().map(ResolutionEntry::from).collect(),
        );
    }

    Ok(Json(all_results))
}
