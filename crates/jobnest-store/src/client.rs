//! Store client and configuration.

use std::time::Duration;

use bson::{doc, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use tracing::info;

use jobnest_models::{Application, Job};

use crate::error::{StoreError, StoreResult};

/// Collection names, fixed by the data contract.
pub const JOBS_COLLECTION: &str = "allJobs";
pub const APPLICATIONS_COLLECTION: &str = "appliedJobs";
pub const SLIDERS_COLLECTION: &str = "sliders";
pub const FEEDBACK_COLLECTION: &str = "feedBack";

/// Store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// MongoDB connection string
    pub uri: String,
    /// Logical database name
    pub database: String,
    /// Connect timeout
    pub connect_timeout: Duration,
}

impl StoreConfig {
    /// Create config from environment variables.
    pub fn from_env() -> StoreResult<Self> {
        let uri = std::env::var("MONGODB_URI")
            .map_err(|_| StoreError::connection("MONGODB_URI must be set"))?;
        if uri.is_empty() {
            return Err(StoreError::connection("MONGODB_URI cannot be empty"));
        }

        let connect_timeout_secs: u64 = std::env::var("MONGODB_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);

        Ok(Self {
            uri,
            database: std::env::var("MONGODB_DATABASE").unwrap_or_else(|_| "jobNest".to_string()),
            connect_timeout: Duration::from_secs(connect_timeout_secs),
        })
    }
}

/// Handle to the document database and its four collections.
///
/// Constructed once at startup and shared through application state; all
/// repositories borrow their collection handles from here.
#[derive(Clone)]
pub struct StoreClient {
    db: Database,
}

impl StoreClient {
    /// Connect with the given configuration.
    pub async fn connect(config: StoreConfig) -> StoreResult<Self> {
        let mut options = ClientOptions::parse(&config.uri).await?;
        options.app_name = Some("jobnest-server".to_string());
        options.connect_timeout = Some(config.connect_timeout);
        options.server_selection_timeout = Some(config.connect_timeout);

        let client = Client::with_options(options)?;
        let db = client.database(&config.database);

        info!(database = %config.database, "Connected to document store");
        Ok(Self { db })
    }

    /// Connect from environment variables.
    pub async fn from_env() -> StoreResult<Self> {
        let config = StoreConfig::from_env()?;
        Self::connect(config).await
    }

    /// Round-trip a ping, used by the readiness probe.
    pub async fn ping(&self) -> StoreResult<()> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    pub fn jobs(&self) -> Collection<Job> {
        self.db.collection(JOBS_COLLECTION)
    }

    pub fn applications(&self) -> Collection<Application> {
        self.db.collection(APPLICATIONS_COLLECTION)
    }

    pub fn sliders(&self) -> Collection<Document> {
        self.db.collection(SLIDERS_COLLECTION)
    }

    pub fn feedback(&self) -> Collection<Document> {
        self.db.collection(FEEDBACK_COLLECTION)
    }
}
