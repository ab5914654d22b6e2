//! Read-only repository for promotional content.

use bson::Document;
use futures_util::TryStreamExt;
use mongodb::Collection;
use serde_json::Value;

use crate::client::StoreClient;
use crate::error::StoreResult;
use crate::json::document_to_json;

/// Repository over the sliders and feedback collections. Both are opaque,
/// read-only, and returned whole in store-default order.
#[derive(Clone)]
pub struct ContentRepository {
    sliders: Collection<Document>,
    feedback: Collection<Document>,
}

impl ContentRepository {
    pub fn new(client: &StoreClient) -> Self {
        Self {
            sliders: client.sliders(),
            feedback: client.feedback(),
        }
    }

    /// All slider records.
    pub async fn sliders(&self) -> StoreResult<Vec<Value>> {
        collect_all(&self.sliders).await
    }

    /// All feedback records.
    pub async fn feedback(&self) -> StoreResult<Vec<Value>> {
        collect_all(&self.feedback).await
    }
}

async fn collect_all(collection: &Collection<Document>) -> StoreResult<Vec<Value>> {
    let docs: Vec<Document> = collection.find(Document::new()).await?.try_collect().await?;
    Ok(docs.into_iter().map(document_to_json).collect())
}
