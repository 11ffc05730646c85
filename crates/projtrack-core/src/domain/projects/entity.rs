//! Project entity and status enumeration

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Canonical form of a status string: trimmed and lowercased.
///
/// Every comparison against a status value goes through this helper so that
/// validation, the end-date rule and aggregation agree on casing.
pub fn normalize_status(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Project status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[serde(rename = "in progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
}

impl ProjectStatus {
    /// All valid statuses
    pub const ALL: [ProjectStatus; 2] = [ProjectStatus::InProgress, ProjectStatus::Completed];

    /// Canonical lowercase form used for storage and comparisons
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "in progress",
            ProjectStatus::Completed => "completed",
        }
    }

    /// Title-cased form used in user-facing messages
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
        }
    }

    /// Parse a status case-insensitively
    pub fn parse(raw: &str) -> Result<Self> {
        let normalized = normalize_status(raw);
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| Error::validation("Invalid status"))
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A tracked project as held by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Store-assigned identifier
    pub id: String,
    pub name: String,
    pub description: String,
    /// Status string as stored. Writes always store the canonical form, but
    /// older rows may carry other casings or values.
    pub status: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Parsed status, if the stored value is one of the known statuses
    pub fn status_kind(&self) -> Option<ProjectStatus> {
        ProjectStatus::parse(&self.status).ok()
    }
}

/// Fields for creating a project
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
}

impl NewProject {
    pub fn new(
        name: impl Into<String>,
        status: ProjectStatus,
        start_date: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            status,
            start_date,
            end_date: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_end_date(mut self, end_date: DateTime<Utc>) -> Self {
        self.end_date = Some(end_date);
        self
    }
}

/// Partial update input; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

/// Column changes handed to the store on update
///
/// `end_date` is `None` when untouched and `Some(None)` when cleared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<Option<DateTime<Utc>>>,
}
