//! Typed repository for job applications.

use bson::oid::ObjectId;
use bson::{doc, Document};
use futures_util::TryStreamExt;
use mongodb::Collection;
use tracing::info;

use jobnest_models::Application;

use crate::ack::InsertAck;
use crate::client::StoreClient;
use crate::error::StoreResult;

/// Optional filters for listing applications. Both are independent and
/// AND-ed together when present.
#[derive(Debug, Clone, Default)]
pub struct ApplicationFilter {
    pub email: Option<String>,
    pub category: Option<String>,
}

/// Repository for the applied-jobs collection.
#[derive(Clone)]
pub struct ApplicationRepository {
    collection: Collection<Application>,
}

impl ApplicationRepository {
    pub fn new(client: &StoreClient) -> Self {
        Self {
            collection: client.applications(),
        }
    }

    /// Insert an application record; the store assigns the identifier,
    /// which the caller needs for compensation if the follow-up increment
    /// fails.
    pub async fn insert(&self, application: &Application) -> StoreResult<InsertAck> {
        let result = self.collection.insert_one(application).await?;
        let inserted_id = result
            .inserted_id
            .as_object_id()
            .map(|oid| oid.to_hex())
            .unwrap_or_else(|| result.inserted_id.to_string());
        info!(id = %inserted_id, job_id = %application.job_id, "Inserted application");
        Ok(InsertAck {
            acknowledged: true,
            inserted_id,
        })
    }

    /// Compensating delete for a failed two-step write.
    pub async fn delete(&self, id: ObjectId) -> StoreResult<u64> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count)
    }

    /// Whether any application matches the exact (jobId, email) pair.
    pub async fn exists(&self, job_id: &str, email: &str) -> StoreResult<bool> {
        let found = self
            .collection
            .find_one(doc! { "jobId": job_id, "email": email })
            .await?;
        Ok(found.is_some())
    }

    /// List applications matching the filter, in store-default order.
    pub async fn list(&self, filter: &ApplicationFilter) -> StoreResult<Vec<Application>> {
        let cursor = self.collection.find(build_application_filter(filter)).await?;
        Ok(cursor.try_collect().await?)
    }
}

fn build_application_filter(filter: &ApplicationFilter) -> Document {
    let mut query = Document::new();
    if let Some(email) = &filter.email {
        query.insert("email", email);
    }
    if let Some(category) = &filter.category {
        query.insert("category", category);
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_are_anded_not_overwritten() {
        let filter = ApplicationFilter {
            email: Some("sam@example.com".into()),
            category: Some("Remote".into()),
        };
        assert_eq!(
            build_application_filter(&filter),
            doc! { "email": "sam@example.com", "category": "Remote" }
        );
    }

    #[test]
    fn absent_filters_match_everything() {
        assert!(build_application_filter(&ApplicationFilter::default()).is_empty());
    }

    #[test]
    fn single_filter_stands_alone() {
        let filter = ApplicationFilter {
            email: None,
            category: Some("Onsite".into()),
        };
        assert_eq!(
            build_application_filter(&filter),
            doc! { "category": "Onsite" }
        );
    }
}
