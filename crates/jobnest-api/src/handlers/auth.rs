//! Session endpoints: issue and clear the session cookie.

use axum::extract::State;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct SessionRequest {
    #[validate(email(message = "email must be a valid email"))]
    pub email: String,
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub success: bool,
}

/// POST /authentication
///
/// Issue a signed session token for the given email and set it as the
/// HTTP-only session cookie.
pub async fn create_session(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<SessionRequest>,
) -> ApiResult<(CookieJar, Json<SessionResponse>)> {
    request.validate()?;

    let token = state.sessions.issue(&request.email)?;
    let jar = jar.add(state.sessions.cookie(token));

    info!(email = %request.email, "Issued session");
    Ok((jar, Json(SessionResponse { success: true })))
}

/// POST /clear-cookie
///
/// Remove the session cookie. The response body is `{"success": false}`,
/// which is the contract the front ends rely on.
pub async fn clear_session(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<SessionResponse>) {
    let jar = jar.remove(state.sessions.clear_cookie());
    (jar, Json(SessionResponse { success: false }))
}
