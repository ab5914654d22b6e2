//! Job application records.

use bson::oid::ObjectId;
use bson::Document;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::serde_util::serialize_opt_oid_hex;

/// One application event linking an applicant to a job.
///
/// `job_id` is kept as the string the client sent, not the store's native
/// identifier type; the link to the job is resolved by equality at query
/// time. Nothing prevents the same (jobId, email) pair from appearing twice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(
        rename = "_id",
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_opt_oid_hex"
    )]
    pub id: Option<ObjectId>,
    pub job_id: String,
    pub email: String,
    /// Denormalized copy of the job's category, used for filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Whatever else the applicant's form submitted, preserved verbatim.
    #[serde(flatten)]
    pub extra: Document,
}

/// Submission payload. `jobId` must parse as a store identifier before any
/// write happens; extra fields ride along untouched.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApplyRequest {
    #[validate(length(min = 1, message = "jobId must not be empty"))]
    pub job_id: String,
    #[validate(email(message = "email must be a valid email"))]
    pub email: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

impl ApplyRequest {
    /// Build the record to persist, with no identifier so the store assigns
    /// one on insert.
    pub fn into_application(self) -> Application {
        Application {
            id: None,
            job_id: self.job_id,
            email: self.email,
            category: self.category,
            extra: self.extra,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_fields_are_preserved() {
        let request: ApplyRequest = serde_json::from_value(serde_json::json!({
            "jobId": "665f1f77bcf86cd799439011",
            "email": "sam@example.com",
            "category": "Remote",
            "resumeUrl": "https://example.com/cv.pdf",
            "coverLetter": "Hello"
        }))
        .unwrap();

        assert!(request.validate().is_ok());
        let app = request.into_application();
        assert_eq!(app.extra.get_str("resumeUrl").unwrap(), "https://example.com/cv.pdf");

        let value = serde_json::to_value(&app).unwrap();
        assert_eq!(value["jobId"], serde_json::json!("665f1f77bcf86cd799439011"));
        assert_eq!(value["coverLetter"], serde_json::json!("Hello"));
        assert!(value.get("_id").is_none());
    }

    #[test]
    fn bad_email_fails_validation() {
        let request: ApplyRequest = serde_json::from_value(serde_json::json!({
            "jobId": "665f1f77bcf86cd799439011",
            "email": "nope"
        }))
        .unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn category_is_optional() {
        let request: ApplyRequest = serde_json::from_value(serde_json::json!({
            "jobId": "665f1f77bcf86cd799439011",
            "email": "sam@example.com"
        }))
        .unwrap();
        assert!(request.category.is_none());
    }
}
