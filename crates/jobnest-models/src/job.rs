//! Job posting records and payloads.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::serde_util::{
    deserialize_applicant_count, serialize_oid_hex, serialize_opt_oid_hex,
};

/// A stored job posting.
///
/// Date fields are opaque strings chosen by the poster's front end; the
/// server never interprets them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Store-generated identifier, immutable once created.
    #[serde(
        rename = "_id",
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_opt_oid_hex"
    )]
    pub id: Option<ObjectId>,
    pub title: String,
    pub picture_url: String,
    pub description: String,
    pub salary_range: String,
    pub category: String,
    #[serde(default, deserialize_with = "deserialize_applicant_count")]
    pub applicants_number: i64,
    pub posting_date: String,
    pub application_deadline: String,
    pub post_by: String,
    pub post_by_email: String,
}

/// The projected read form of a job: everything except the poster's name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    #[serde(rename = "_id", serialize_with = "serialize_oid_hex")]
    pub id: ObjectId,
    pub title: String,
    pub picture_url: String,
    pub description: String,
    pub salary_range: String,
    #[serde(default, deserialize_with = "deserialize_applicant_count")]
    pub applicants_number: i64,
    pub category: String,
    pub posting_date: String,
    pub application_deadline: String,
    pub post_by_email: String,
}

/// Create/update payload covering the nine writable fields plus the
/// applicant count. The count tolerates anything and coerces to an integer
/// (0 when absent or malformed); the rest are required.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JobPayload {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(url(message = "pictureUrl must be a valid URL"))]
    pub picture_url: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    pub salary_range: String,
    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: String,
    #[serde(default, deserialize_with = "deserialize_applicant_count")]
    pub applicants_number: i64,
    pub posting_date: String,
    pub application_deadline: String,
    pub post_by: String,
    #[validate(email(message = "postByEmail must be a valid email"))]
    pub post_by_email: String,
}

impl JobPayload {
    /// Materialize a full record from this payload, with no identifier so
    /// the store assigns one on insert.
    pub fn into_job(self) -> Job {
        Job {
            id: None,
            title: self.title,
            picture_url: self.picture_url,
            description: self.description,
            salary_range: self.salary_range,
            category: self.category,
            applicants_number: self.applicants_number,
            posting_date: self.posting_date,
            application_deadline: self.application_deadline,
            post_by: self.post_by,
            post_by_email: self.post_by_email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload_json() -> serde_json::Value {
        serde_json::json!({
            "title": "Backend Engineer",
            "pictureUrl": "https://example.com/logo.png",
            "description": "Build things",
            "salaryRange": "50k-70k",
            "category": "Remote",
            "applicantsNumber": "3",
            "postingDate": "2024-05-01",
            "applicationDeadline": "2024-06-01",
            "postBy": "Jane Doe",
            "postByEmail": "jane@example.com"
        })
    }

    #[test]
    fn payload_uses_camel_case_and_coerces_count() {
        let payload: JobPayload = serde_json::from_value(payload_json()).unwrap();
        assert_eq!(payload.picture_url, "https://example.com/logo.png");
        assert_eq!(payload.applicants_number, 3);
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn payload_missing_required_field_is_rejected() {
        let mut value = payload_json();
        value.as_object_mut().unwrap().remove("title");
        assert!(serde_json::from_value::<JobPayload>(value).is_err());
    }

    #[test]
    fn payload_bad_email_fails_validation() {
        let mut value = payload_json();
        value["postByEmail"] = serde_json::json!("not-an-email");
        let payload: JobPayload = serde_json::from_value(value).unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn job_serializes_id_as_hex() {
        let mut job = serde_json::from_value::<JobPayload>(payload_json())
            .unwrap()
            .into_job();
        let oid = ObjectId::new();
        job.id = Some(oid);

        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["_id"], serde_json::json!(oid.to_hex()));
        assert_eq!(value["salaryRange"], serde_json::json!("50k-70k"));
    }

    #[test]
    fn job_without_id_omits_the_field() {
        let job = serde_json::from_value::<JobPayload>(payload_json())
            .unwrap()
            .into_job();
        let value = serde_json::to_value(&job).unwrap();
        assert!(value.get("_id").is_none());
    }

    #[test]
    fn summary_excludes_poster_name() {
        let summary = JobSummary {
            id: ObjectId::new(),
            title: "Backend Engineer".into(),
            picture_url: "https://example.com/logo.png".into(),
            description: "Build things".into(),
            salary_range: "50k-70k".into(),
            applicants_number: 0,
            category: "Remote".into(),
            posting_date: "2024-05-01".into(),
            application_deadline: "2024-06-01".into(),
            post_by_email: "jane@example.com".into(),
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert!(value.get("postBy").is_none());
        assert_eq!(value["postByEmail"], serde_json::json!("jane@example.com"));
    }
}
