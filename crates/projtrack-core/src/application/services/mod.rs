//! Application services
//!
//! Services that orchestrate domain operations and provide the public API.

pub mod analytics_service;
pub mod project_service;

#[cfg(test)]
pub(crate) mod fakes;

pub use analytics_service::{AnalysisResponse, AnalyticsService, analysis_prompt};
pub use project_service::ProjectService;
