//! Application state.

use std::sync::Arc;

use jobnest_store::{ApplicationRepository, ContentRepository, JobRepository, StoreClient};

use crate::config::ApiConfig;
use crate::session::SessionAuth;

/// Shared application state.
///
/// The store client is constructed once here and injected into every
/// handler through the repositories; nothing reaches for ambient globals.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub store: Arc<StoreClient>,
    pub sessions: SessionAuth,
    pub jobs: JobRepository,
    pub applications: ApplicationRepository,
    pub content: ContentRepository,
}

impl AppState {
    /// Create new application state, connecting to the store.
    pub async fn new(config: ApiConfig) -> anyhow::Result<Self> {
        let store = StoreClient::from_env().await?;

        let sessions = SessionAuth::from_config(&config);
        let jobs = JobRepository::new(&store);
        let applications = ApplicationRepository::new(&store);
        let content = ContentRepository::new(&store);

        Ok(Self {
            config,
            store: Arc::new(store),
            sessions,
            jobs,
            applications,
            content,
        })
    }
}
