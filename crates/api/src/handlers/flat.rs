use super::{fetch_group, parse_family};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
};
use ipgroups_domain::AddressFamily;
use std::fmt::Write;
use std::sync::Arc;

use super::resolve::{ResolveAllParams, ResolveParams};

/// One IP per line, in result order, for firewall/allowlist consumers.
pub async fn resolve_flat(
    State(state): State<AppState>,
    Query(params): Query<ResolveParams>,
) -> Result<String, (StatusCode, String)> {
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

    let mut body = String::new();
    for resolution in results.iter() {
        for ip in &resolution.ips {
            let _ = writeln!(body, "{}", ip);
        }
    }
    Ok(body)
}

pub async fn resolve_flat_all(
    State(state): State<AppState>,
    Query(params): Query<ResolveAllParams>,
) -> Result<String, (StatusCode, String)> {
    let family = parse_family(params.family.as_deref())?;
    Ok(flat_all(&state, family).await)
}

pub async fn resolve_flat_all_ipv4(State(state): State<AppState>) -> String {
    flat_all(&state, AddressFamily::Ipv4).await
}

pub async fn resolve_flat_all_ipv6(State(state): State<AppState>) -> String {
    flat_all(&state, AddressFamily::Ipv6).await
}

async fn flat_all(state: &AppState, family: AddressFamily) -> String {
    let mut body = String::new();
    for (group, domains) in state.groups.iter() {
        let results = fetch_group(state, group, domains, family).await;
        for resolution in results.iter() {
            for ip in &resolution.ips {
                let _ = writeln!(body, "{}", ip);
            }
        }
    }
    body
}
