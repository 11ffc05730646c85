//! Application state for the API server

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use projtrack_core::application::{AnalyticsService, ProjectService};
use projtrack_core::config::Config;
use projtrack_core::domain::analytics::Summarizer;
use projtrack_core::llm::GeminiClient;
use projtrack_core::storage::{Database, SqliteProjectStore};

/// Application state shared across all API handlers
#[derive(Clone)]
pub struct AppState {
    pub projects: ProjectService,
    pub analytics: AnalyticsService,
    pub database: Database,
    /// Server start time for uptime calculation
    pub start_time: Instant,
}

impl AppState {
    /// Wire services over an open database
    pub fn new(database: Database, summarizer: Option<Arc<dyn Summarizer>>) -> Self {
        let store = Arc::new(SqliteProjectStore::new(database.clone()));
        Self {
            projects: ProjectService::new(store.clone()),
            analytics: AnalyticsService::new(store, summarizer),
            database,
            start_time: Instant::now(),
        }
    }

    /// Open the configured database and build the summarizer if a key is set
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let database = Database::new(config.database.to_database_config()).await?;

        let summarizer: Option<Arc<dyn Summarizer>> =
            match config.summarizer.resolved_api_key()? {
                Some(key) => {
                    let client = GeminiClient::new(config.summarizer.clone(), key)
                        .context("Failed to build summarizer client")?;
                    tracing::info!(model = client.model(), "Project summaries enabled");
                    Some(Arc::new(client) as Arc<dyn Summarizer>)
                }
                None => {
                    tracing::warn!("No summarizer API key set; project analysis is disabled");
                    None
                }
            };

        Ok(Self::new(database, summarizer))
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
