//! Analytics service
//!
//! Status statistics across all projects and AI-written summaries of a
//! single project.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::project_service::PROJECT_NOT_FOUND;
use crate::config::API_KEY_ENV;
use crate::domain::analytics::{GraphicsData, Summarizer, aggregate};
use crate::domain::projects::{Project, ProjectStore};
use crate::error::{Error, Result};

/// Result of analysing a single project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub summary: String,
    pub total_projects: usize,
    pub generated_at: DateTime<Utc>,
}

/// Build the summarization prompt for a project
pub fn analysis_prompt(project: &Project) -> String {
    format!(
        "Analyze the following project and write a short professional executive summary \
(at most 100 words) covering:\n\
- the scope and objectives of the project\n\
- key points and notable elements\n\
- an evaluation of its current status\n\
- observations or recommendations, if any\n\
\n\
Project: {}\n\
Status: {}\n\
Description: {}\n\
\n\
Answer with a single concise paragraph in English.",
        project.name, project.status, project.description
    )
}

/// Analytics operations
#[derive(Clone)]
pub struct AnalyticsService {
    store: Arc<dyn ProjectStore>,
    /// Present only when a summarizer credential is configured
    summarizer: Option<Arc<dyn Summarizer>>,
}

impl AnalyticsService {
    pub fn new(store: Arc<dyn ProjectStore>, summarizer: Option<Arc<dyn Summarizer>>) -> Self {
        Self { store, summarizer }
    }

    /// Whether per-project analysis is available
    pub fn has_summarizer(&self) -> bool {
        self.summarizer.is_some()
    }

    /// Aggregate statistics over every stored project
    pub async fn get_graphics_data(&self) -> Result<GraphicsData> {
        let projects = self.store.find_all().await?;
        debug!(count = projects.len(), "Aggregating project statistics");
        Ok(aggregate(&projects))
    }

    /// Generate a natural-language summary of one project
    pub async fn generate_analysis(&self, id: &str) -> Result<AnalysisResponse> {
        let Some(summarizer) = &self.summarizer else {
            warn!("Analysis requested without a summarizer API key");
            return Err(Error::configuration(format!(
                "API key not configured. Set {} in the environment.",
                API_KEY_ENV
            )));
        };

        let project = self.store.find_by_id(id).await?.ok_or_else(|| {
            warn!(project_id = %id, "Analysis requested for unknown project");
            Error::not_found(PROJECT_NOT_FOUND)
        })?;

        let summary = summarizer.summarize(&analysis_prompt(&project)).await?;
        info!(project_id = %id, chars = summary.len(), "Project analysis generated");

        Ok(AnalysisResponse {
            summary,
            total_projects: 1,
            generated_at: Utc::now(),
        })
    }
}
