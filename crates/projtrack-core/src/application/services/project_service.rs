//! Project service
//!
//! CRUD orchestration over a [`ProjectStore`], enforcing the end-date rule
//! before anything is written.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::projects::{
    NewProject, Project, ProjectChanges, ProjectStore, UpdateProject, check_end_date,
};
use crate::error::{Error, Result};

pub(crate) const PROJECT_NOT_FOUND: &str = "Project not found";

/// Project CRUD operations
#[derive(Clone)]
pub struct ProjectService {
    store: Arc<dyn ProjectStore>,
}

impl ProjectService {
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self { store }
    }

    /// List all projects in store order
    pub async fn list(&self) -> Result<Vec<Project>> {
        debug!("Listing projects");
        self.store.find_all().await
    }

    /// Get a project by ID
    pub async fn get_by_id(&self, id: &str) -> Result<Project> {
        debug!(project_id = %id, "Fetching project");
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found(PROJECT_NOT_FOUND))
    }

    /// Create a project after checking the end-date rule
    pub async fn create(&self, input: NewProject) -> Result<Project> {
        let end_date = check_end_date(input.status, input.end_date).inspect_err(|e| {
            warn!(status = %input.status, error = %e, "Rejected project create");
        })?;

        let project = self
            .store
            .create(&NewProject { end_date, ..input })
            .await?;

        info!(project_id = %project.id, status = %project.status, "Project created");
        Ok(project)
    }

    /// Update a project after checking the end-date rule.
    ///
    /// Existence is not checked here; the store reports a missing project.
    pub async fn update(&self, id: &str, input: UpdateProject) -> Result<Project> {
        let end_date = match (input.status, input.end_date) {
            (Some(status), end_date) => Some(check_end_date(status, end_date).inspect_err(|e| {
                warn!(project_id = %id, status = %status, error = %e, "Rejected project update");
            })?),
            (None, Some(_)) => {
                warn!(project_id = %id, "Rejected end date update without status");
                return Err(Error::validation(
                    "Status is required when end date is provided",
                ));
            }
            (None, None) => None,
        };

        let changes = ProjectChanges {
            name: input.name,
            description: input.description,
            status: input.status,
            start_date: input.start_date,
            end_date,
        };

        let project = self.store.update(id, &changes).await?;
        info!(project_id = %project.id, status = %project.status, "Project updated");
        Ok(project)
    }

    /// Delete a project, returning the record as it was before deletion
    pub async fn delete(&self, id: &str) -> Result<Project> {
        let project = self.get_by_id(id).await?;
        self.store.delete(id).await?;
        info!(project_id = %id, "Project deleted");
        Ok(project)
    }
}
