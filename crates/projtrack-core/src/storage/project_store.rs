//! SQLite-backed project store

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite};
use tracing::debug;
use uuid::Uuid;

use super::database::Database;
use crate::domain::projects::{NewProject, Project, ProjectChanges, ProjectStore};
use crate::error::{Error, Result};

const SELECT_COLUMNS: &str =
    "SELECT id, name, description, status, start_date, end_date, created_at, updated_at FROM projects";

/// Project repository over the `projects` table
#[derive(Debug, Clone)]
pub struct SqliteProjectStore {
    db: Database,
}

impl SqliteProjectStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    fn row_to_project(row: &SqliteRow) -> Result<Project> {
        Ok(Project {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            status: row.try_get("status")?,
            start_date: row.try_get("start_date")?,
            end_date: row.try_get("end_date")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl ProjectStore for SqliteProjectStore {
    async fn find_all(&self) -> Result<Vec<Project>> {
        let rows = sqlx::query(&format!("{} ORDER BY rowid", SELECT_COLUMNS))
            .fetch_all(self.db.pool())
            .await?;

        rows.iter().map(Self::row_to_project).collect()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Project>> {
        let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;

        row.as_ref().map(Self::row_to_project).transpose()
    }

    async fn create(&self, project: &NewProject) -> Result<Project> {
        let now = Utc::now();
        let created = Project {
            id: Uuid::new_v4().to_string(),
            name: project.name.clone(),
            description: project.description.clone(),
            status: project.status.as_str().to_string(),
            start_date: project.start_date,
            end_date: project.end_date,
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            r#"
            INSERT INTO projects (id, name, description, status, start_date, end_date, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&created.id)
        .bind(&created.name)
        .bind(&created.description)
        .bind(&created.status)
        .bind(created.start_date)
        .bind(created.end_date)
        .bind(created.created_at)
        .bind(created.updated_at)
        .execute(self.db.pool())
        .await?;

        debug!(project_id = %created.id, "Inserted project row");
        Ok(created)
    }

    async fn update(&self, id: &str, changes: &ProjectChanges) -> Result<Project> {
        let mut builder = QueryBuilder::<Sqlite>::new("UPDATE projects SET updated_at = ");
        builder.push_bind(Utc::now());

        if let Some(name) = &changes.name {
            builder.push(", name = ").push_bind(name.clone());
        }
        if let Some(description) = &changes.description {
            builder.push(", description = ").push_bind(description.clone());
        }
        if let Some(status) = changes.status {
            builder.push(", status = ").push_bind(status.as_str());
        }
        if let Some(start_date) = changes.start_date {
            builder.push(", start_date = ").push_bind(start_date);
        }
        if let Some(end_date) = changes.end_date {
            builder.push(", end_date = ").push_bind(end_date);
        }
        builder.push(" WHERE id = ").push_bind(id.to_string());

        let result = builder.build().execute(self.db.pool()).await?;
        if result.rows_affected() == 0 {
            return Err(Error::not_found("Project not found"));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found("Project not found"))
    }

    /// Deleting an unknown ID is a no-op
    async fn delete(&self, id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        debug!(project_id = %id, rows = result.rows_affected(), "Deleted project row");
        Ok(())
    }
}
