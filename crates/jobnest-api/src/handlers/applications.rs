//! Job application handlers.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use validator::Validate;

use jobnest_models::{Application, ApplyRequest};
use jobnest_store::{parse_object_id, ApplicationFilter, InsertAck};

use crate::error::{ApiError, ApiResult};
use crate::session::SessionUser;
use crate::state::AppState;

#[derive(Serialize)]
pub struct AppliedResponse {
    pub applied: bool,
}

/// GET /applied/:jobId/:email
///
/// Whether an application exists for this exact (jobId, email) pair. The
/// path email must belong to the session.
pub async fn check_applied(
    State(state): State<AppState>,
    Path((job_id, email)): Path<(String, String)>,
    user: SessionUser,
) -> ApiResult<Json<AppliedResponse>> {
    if user.email != email {
        return Err(ApiError::Unauthorized);
    }

    let applied = state.applications.exists(&job_id, &email).await?;
    Ok(Json(AppliedResponse { applied }))
}

/// Query parameters for the application list. Both filters are independent
/// and AND-ed together when present.
#[derive(Debug, Deserialize)]
pub struct ApplicationListQuery {
    pub email: Option<String>,
    pub category: Option<String>,
}

/// GET /applied
///
/// List applications. A requested email must match the session email;
/// without one, the list is scoped to the session email rather than
/// exposing every applicant.
pub async fn list_applications(
    State(state): State<AppState>,
    Query(query): Query<ApplicationListQuery>,
    user: SessionUser,
) -> ApiResult<Json<Vec<Application>>> {
    if let Some(email) = &query.email {
        if email != &user.email {
            return Err(ApiError::Unauthorized);
        }
    }

    let filter = ApplicationFilter {
        email: Some(query.email.unwrap_or(user.email)),
        category: query.category,
    };
    let applications = state.applications.list(&filter).await?;
    Ok(Json(applications))
}

/// POST /applied
///
/// Record an application, then bump the parent job's applicant count by 1.
/// The two writes are not transactional; if the increment fails the
/// application record is rolled back and the failure surfaced, instead of
/// leaving a silently inconsistent count.
pub async fn create_application(
    State(state): State<AppState>,
    Json(request): Json<ApplyRequest>,
) -> ApiResult<Json<InsertAck>> {
    request.validate()?;

    // Reject a malformed job id before any write happens.
    let job_oid = parse_object_id(&request.job_id)?;

    let application = request.into_application();
    let ack = state.applications.insert(&application).await?;

    if let Err(err) = state.jobs.increment_applicants(job_oid, 1).await {
        warn!(job_id = %job_oid, error = %err, "Applicant-count increment failed, rolling back application");
        let rolled_back = match parse_object_id(&ack.inserted_id) {
            Ok(inserted) => match state.applications.delete(inserted).await {
                Ok(_) => true,
                Err(cleanup) => {
                    warn!(id = %ack.inserted_id, error = %cleanup, "Rollback delete failed; application is orphaned");
                    false
                }
            },
            Err(_) => {
                warn!(id = %ack.inserted_id, "Rollback skipped: inserted id is not an ObjectId");
                false
            }
        };
        return Err(partial_write_error(rolled_back));
    }

    info!(job_id = %job_oid, "Recorded application");
    Ok(Json(ack))
}

/// Error for a failed applicant-count increment. The message must not claim
/// a state the store may contradict: the application record only went away
/// if the compensating delete succeeded.
fn partial_write_error(rolled_back: bool) -> ApiError {
    if rolled_back {
        ApiError::PartialWrite(
            "application was not recorded because the applicant count could not be updated".into(),
        )
    } else {
        ApiError::PartialWrite(
            "applicant count could not be updated and the application record could not be \
             rolled back; the stored application may not be reflected in the count"
                .into(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rolled_back_error_reports_nothing_recorded() {
        let message = partial_write_error(true).to_string();
        assert!(message.contains("was not recorded"));
        assert!(!message.contains("rolled back"));
    }

    #[test]
    fn failed_rollback_error_admits_the_orphaned_record() {
        let message = partial_write_error(false).to_string();
        assert!(message.contains("could not be rolled back"));
        assert!(!message.contains("was not recorded"));
    }
}
