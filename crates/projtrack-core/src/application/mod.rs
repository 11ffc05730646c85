//! Application service layer
//!
//! This layer validates incoming payloads, orchestrates domain operations,
//! and provides the public API for the core functionality.

pub mod services;
pub mod validators;

pub use services::{AnalysisResponse, AnalyticsService, ProjectService};
pub use validators::ProjectValidator;
