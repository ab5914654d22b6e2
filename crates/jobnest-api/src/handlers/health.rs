//! Liveness and readiness probes.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /
pub async fn root() -> &'static str {
    "JobNest Server is Running...!"
}

/// GET /health, GET /healthz
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// GET /ready
///
/// Round-trips a ping to the store, so deploys don't go live before the
/// database is reachable.
pub async fn ready(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    state.store.ping().await?;
    Ok(Json(HealthResponse { status: "ready" }))
}
