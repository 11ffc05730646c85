//! Repository trait for project persistence
//!
//! The trait abstracts over storage backends so that services can be driven
//! by SQLite in production and by in-memory fakes in tests.

use async_trait::async_trait;

use crate::error::Result;

use super::entity::{NewProject, Project, ProjectChanges};

/// Persistence operations for projects
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// All projects in store order
    async fn find_all(&self) -> Result<Vec<Project>>;

    /// Get a project by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Project>>;

    /// Persist a new project, assigning its ID and timestamps
    async fn create(&self, project: &NewProject) -> Result<Project>;

    /// Apply changes to an existing project.
    ///
    /// Fails with a not-found error when no project has the given ID.
    async fn update(&self, id: &str, changes: &ProjectChanges) -> Result<Project>;

    /// Permanently delete a project
    async fn delete(&self, id: &str) -> Result<()>;
}
