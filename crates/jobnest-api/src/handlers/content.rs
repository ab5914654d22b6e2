//! Promotional content handlers: sliders and feedback.

use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::error::ApiResult;
use crate::state::AppState;

/// GET /sliders
pub async fn list_sliders(State(state): State<AppState>) -> ApiResult<Json<Vec<Value>>> {
    Ok(Json(state.content.sliders().await?))
}

/// GET /feedback
pub async fn list_feedback(State(state): State<AppState>) -> ApiResult<Json<Vec<Value>>> {
    Ok(Json(state.content.feedback().await?))
}
