//! Job posting handlers.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::info;
use validator::Validate;

use jobnest_models::{Job, JobPayload, JobSummary};
use jobnest_store::{parse_object_id, DeleteAck, InsertAck, JobFilter, UpdateAck};

use crate::error::{ApiError, ApiResult};
use crate::session::SessionUser;
use crate::state::AppState;

/// Query parameters for the job list.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListQuery {
    /// Exact match on the poster's email.
    pub post_by_email: Option<String>,
    /// Case-insensitive substring match on the title.
    pub title: Option<String>,
}

/// GET /jobs
///
/// List jobs, optionally filtered. No filters returns every posting.
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
) -> ApiResult<Json<Vec<Job>>> {
    let filter = JobFilter {
        post_by_email: query.post_by_email,
        title: query.title,
    };
    let jobs = state.jobs.list(&filter).await?;
    Ok(Json(jobs))
}

/// GET /jobs/:id
///
/// Projected single-job read; the poster's name is never returned here.
/// Malformed ids are rejected before the store is consulted.
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
    _user: SessionUser,
) -> ApiResult<Json<JobSummary>> {
    let oid = parse_object_id(&id)?;
    let job = state
        .jobs
        .get_projected(oid)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("No job with id {}", id)))?;
    Ok(Json(job))
}

/// GET /jobs/update/:id
///
/// Full, unprojected record for populating an edit form. Ids get the same
/// validation as the projected read path.
pub async fn get_job_for_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Job>> {
    let oid = parse_object_id(&id)?;
    let job = state
        .jobs
        .get_raw(oid)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("No job with id {}", id)))?;
    Ok(Json(job))
}

/// POST /jobs
///
/// Create a posting. The applicant count is coerced to an integer by the
/// payload type; everything else must be present and valid.
pub async fn create_job(
    State(state): State<AppState>,
    Json(payload): Json<JobPayload>,
) -> ApiResult<Json<InsertAck>> {
    payload.validate()?;
    let ack = state.jobs.insert(&payload.into_job()).await?;
    Ok(Json(ack))
}

/// PUT /jobs/:id
///
/// Replace the writable fields of an existing posting. There is no upsert:
/// updating a missing id is a 404, never a silent create.
pub async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<JobPayload>,
) -> ApiResult<Json<UpdateAck>> {
    payload.validate()?;
    let oid = parse_object_id(&id)?;

    let ack = state.jobs.replace_fields(oid, &payload).await?;
    if ack.matched_count == 0 {
        return Err(ApiError::not_found(format!("No job with id {}", id)));
    }
    info!(id = %id, "Updated job");
    Ok(Json(ack))
}

/// DELETE /jobs/:id
///
/// Delete by id. A missing record is a zero-count acknowledgment, not an
/// error.
pub async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteAck>> {
    let oid = parse_object_id(&id)?;
    let ack = state.jobs.delete(oid).await?;
    Ok(Json(ack))
}
