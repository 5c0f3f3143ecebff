//! HTTP request handlers

use crate::api::{HealthResponse, HealthStatus, ListParams};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use pokedex_core::{valid_types, Pokemon};
use std::time::Instant;
use tracing::{debug, info};

/// List the fixed type enumeration.
pub async fn list_types() -> Json<&'static [&'static str]> {
    crate::metrics::record_request("types");
    Json(valid_types())
}

/// List catalog entries matching the supplied filters.
///
/// Filters are conjunctive; an empty result is a 200 with an empty array,
/// not an error.
pub async fn list_pokemon(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Pokemon>> {
    let start = Instant::now();

    debug!("catalog query: {:?}", params);

    let query = params.into_query();
    let results = state.catalog.query(&query);

    let elapsed = start.elapsed().as_secs_f64();
    crate::metrics::record_request("pokemon");
    crate::metrics::record_query(results.len(), elapsed);

    info!(
        "catalog query: name={:?} type={:?} -> {} of {} entries ({:.2}ms)",
        query.name,
        query.type_tag,
        results.len(),
        state.catalog.len(),
        elapsed * 1000.0
    );

    Json(results)
}

/// Health check - liveness probe
pub async fn health_live(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(health_body(&state, HealthStatus::Healthy))
}

/// Health check - readiness probe
///
/// An empty catalog still answers queries (with empty results), so it is
/// reported as degraded rather than refusing traffic.
pub async fn health_ready(State(state): State<AppState>) -> Json<HealthResponse> {
    let status = if state.catalog.is_empty() {
        HealthStatus::Degraded
    } else {
        HealthStatus::Healthy
    };
    Json(health_body(&state, status))
}

fn health_body(state: &AppState, status: HealthStatus) -> HealthResponse {
    HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        catalog_entries: state.catalog.len(),
        known_types: valid_types().len(),
    }
}

/// Prometheus metrics endpoint
pub async fn metrics() -> String {
    crate::metrics::get_prometheus_metrics()
}
