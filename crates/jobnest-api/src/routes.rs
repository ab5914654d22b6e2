//! API routes.

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers::applications::{check_applied, create_application, list_applications};
use crate::handlers::auth::{clear_session, create_session};
use crate::handlers::content::{list_feedback, list_sliders};
use crate::handlers::health::{health, ready, root};
use crate::handlers::jobs::{
    create_job, delete_job, get_job, get_job_for_update, list_jobs, update_job,
};
use crate::middleware::{cors_layer, request_id, request_logging};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let session_routes = Router::new()
        .route("/authentication", post(create_session))
        .route("/clear-cookie", post(clear_session));

    let job_routes = Router::new()
        .route("/jobs", get(list_jobs).post(create_job))
        .route("/jobs/:id", get(get_job).put(update_job).delete(delete_job))
        // Unprojected read path for the edit form
        .route("/jobs/update/:id", get(get_job_for_update));

    let application_routes = Router::new()
        .route("/applied", get(list_applications).post(create_application))
        .route("/applied/:job_id/:email", get(check_applied));

    let content_routes = Router::new()
        .route("/sliders", get(list_sliders))
        .route("/feedback", get(list_feedback));

    let health_routes = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/healthz", get(health))
        .route("/ready", get(ready));

    Router::new()
        .merge(session_routes)
        .merge(job_routes)
        .merge(application_routes)
        .merge(content_routes)
        .merge(health_routes)
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(request_logging))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
