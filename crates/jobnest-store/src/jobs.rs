//! Typed repository for job postings.

use bson::oid::ObjectId;
use bson::{doc, Document};
use futures_util::TryStreamExt;
use mongodb::Collection;
use tracing::info;

use jobnest_models::{Job, JobPayload, JobSummary};

use crate::ack::{DeleteAck, InsertAck, UpdateAck};
use crate::client::StoreClient;
use crate::error::StoreResult;

/// Optional filters for listing jobs. Absent filters match everything.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    /// Exact match on the poster's email.
    pub post_by_email: Option<String>,
    /// Case-insensitive substring match on the title.
    pub title: Option<String>,
}

/// Repository for the jobs collection.
#[derive(Clone)]
pub struct JobRepository {
    collection: Collection<Job>,
}

impl JobRepository {
    pub fn new(client: &StoreClient) -> Self {
        Self {
            collection: client.jobs(),
        }
    }

    /// List jobs matching the filter, in store-default order.
    pub async fn list(&self, filter: &JobFilter) -> StoreResult<Vec<Job>> {
        let cursor = self.collection.find(build_job_filter(filter)).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Read one job in its projected form; the poster's name is excluded.
    pub async fn get_projected(&self, id: ObjectId) -> StoreResult<Option<JobSummary>> {
        let summary = self
            .collection
            .clone_with_type::<JobSummary>()
            .find_one(doc! { "_id": id })
            .projection(summary_projection())
            .await?;
        Ok(summary)
    }

    /// Read one full, unprojected record (edit-form path).
    pub async fn get_raw(&self, id: ObjectId) -> StoreResult<Option<Job>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// Insert a new posting; the store assigns the identifier.
    pub async fn insert(&self, job: &Job) -> StoreResult<InsertAck> {
        let result = self.collection.insert_one(job).await?;
        let inserted_id = result
            .inserted_id
            .as_object_id()
            .map(|oid| oid.to_hex())
            .unwrap_or_else(|| result.inserted_id.to_string());
        info!(id = %inserted_id, "Inserted job");
        Ok(InsertAck {
            acknowledged: true,
            inserted_id,
        })
    }

    /// Replace the writable fields of an existing posting.
    ///
    /// No upsert: a missing identifier yields `matched_count == 0` and never
    /// creates a record under a client-supplied id.
    pub async fn replace_fields(&self, id: ObjectId, payload: &JobPayload) -> StoreResult<UpdateAck> {
        let fields = bson::to_document(payload)?;
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": fields })
            .await?;
        Ok(UpdateAck {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    /// Delete by identifier. Deleting a missing record is a zero-count ack.
    pub async fn delete(&self, id: ObjectId) -> StoreResult<DeleteAck> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        info!(id = %id, deleted = result.deleted_count, "Deleted job");
        Ok(DeleteAck {
            acknowledged: true,
            deleted_count: result.deleted_count,
        })
    }

    /// Atomically bump the applicant count. This is the store's native
    /// single-field increment; concurrent submissions serialize on it.
    pub async fn increment_applicants(&self, id: ObjectId, delta: i64) -> StoreResult<u64> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": id },
                doc! { "$inc": { "applicantsNumber": delta } },
            )
            .await?;
        Ok(result.matched_count)
    }
}

/// Fixed projection for single-job reads: everything except `postBy`.
fn summary_projection() -> Document {
    doc! {
        "_id": 1,
        "title": 1,
        "pictureUrl": 1,
        "description": 1,
        "salaryRange": 1,
        "applicantsNumber": 1,
        "category": 1,
        "postingDate": 1,
        "applicationDeadline": 1,
        "postByEmail": 1,
    }
}

/// Build the list query from the optional filters.
fn build_job_filter(filter: &JobFilter) -> Document {
    let mut query = Document::new();
    if let Some(email) = &filter.post_by_email {
        query.insert("postByEmail", email);
    }
    if let Some(title) = &filter.title {
        // Substring match, so regex metacharacters in user input are literal.
        query.insert(
            "title",
            doc! { "$regex": escape_regex(title), "$options": "i" },
        );
    }
    query
}

/// Escape regex metacharacters so the pattern matches the input literally.
fn escape_regex(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(
            c,
            '.' | '^' | '$' | '*' | '+' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '\\' | '|' | '/'
        ) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_matches_everything() {
        assert!(build_job_filter(&JobFilter::default()).is_empty());
    }

    #[test]
    fn email_filter_is_exact() {
        let filter = JobFilter {
            post_by_email: Some("jane@example.com".into()),
            title: None,
        };
        assert_eq!(
            build_job_filter(&filter),
            doc! { "postByEmail": "jane@example.com" }
        );
    }

    #[test]
    fn title_filter_is_case_insensitive_regex() {
        let filter = JobFilter {
            post_by_email: None,
            title: Some("eng".into()),
        };
        assert_eq!(
            build_job_filter(&filter),
            doc! { "title": { "$regex": "eng", "$options": "i" } }
        );
    }

    #[test]
    fn both_filters_combine() {
        let filter = JobFilter {
            post_by_email: Some("jane@example.com".into()),
            title: Some("dev".into()),
        };
        let query = build_job_filter(&filter);
        assert!(query.contains_key("postByEmail"));
        assert!(query.contains_key("title"));
    }

    #[test]
    fn regex_metacharacters_are_escaped() {
        assert_eq!(escape_regex("c++ (senior)"), "c\\+\\+ \\(senior\\)");
        assert_eq!(escape_regex("plain"), "plain");
    }

    #[test]
    fn projection_excludes_poster_name() {
        let projection = summary_projection();
        assert!(!projection.contains_key("postBy"));
        assert!(projection.contains_key("postByEmail"));
    }
}
