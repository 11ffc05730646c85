//! Projtrack Core Library
//!
//! This crate provides the core functionality for Projtrack, including:
//! - Domain model (projects, status/end-date rules, status statistics)
//! - Request validation
//! - Project and analytics services
//! - Storage (SQLite)
//! - LLM integration (Gemini API) for project summaries
//! - Configuration

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod llm;
pub mod storage;

pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::application::{AnalysisResponse, AnalyticsService, ProjectService, ProjectValidator};
    pub use crate::config::Config;
    pub use crate::domain::analytics::{GraphicsData, StatusSummary, Summarizer};
    pub use crate::domain::projects::{
        NewProject, Project, ProjectStatus, ProjectStore, UpdateProject,
    };
    pub use crate::error::{Error, ErrorKind, FieldError, Result};
    pub use crate::llm::GeminiClient;
    pub use crate::storage::{Database, SqliteProjectStore};
}
