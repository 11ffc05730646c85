//! In-memory collaborators for service tests

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::analytics::Summarizer;
use crate::domain::projects::{NewProject, Project, ProjectChanges, ProjectStore};
use crate::error::{Error, Result};

/// Project store that keeps rows in a vector and records every call
#[derive(Default)]
pub struct FakeProjectStore {
    projects: Mutex<Vec<Project>>,
    calls: Mutex<Vec<&'static str>>,
    next_id: Mutex<u64>,
}

impl FakeProjectStore {
    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }

    fn allocate_id(&self) -> String {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        next.to_string()
    }

    /// Store operations invoked so far, in order
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    /// Insert a row directly, bypassing call recording
    pub fn seed(&self, name: &str, status: &str) -> String {
        self.insert(name, status, None)
    }

    pub fn seed_completed(&self, name: &str, end_date: DateTime<Utc>) -> String {
        self.insert(name, "completed", Some(end_date))
    }

    fn insert(&self, name: &str, status: &str, end_date: Option<DateTime<Utc>>) -> String {
        let id = self.allocate_id();
        let now = Utc::now();
        self.projects.lock().unwrap().push(Project {
            id: id.clone(),
            name: name.to_string(),
            description: format!("{} description", name),
            status: status.to_string(),
            start_date: now,
            end_date,
            created_at: now,
            updated_at: now,
        });
        id
    }
}

#[async_trait]
impl ProjectStore for FakeProjectStore {
    async fn find_all(&self) -> Result<Vec<Project>> {
        self.record("find_all");
        Ok(self.projects.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Project>> {
        self.record("find_by_id");
        Ok(self
            .projects
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn create(&self, project: &NewProject) -> Result<Project> {
        self.record("create");
        let now = Utc::now();
        let created = Project {
            id: self.allocate_id(),
            name: project.name.clone(),
            description: project.description.clone(),
            status: project.status.as_str().to_string(),
            start_date: project.start_date,
            end_date: project.end_date,
            created_at: now,
            updated_at: now,
        };
        self.projects.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &str, changes: &ProjectChanges) -> Result<Project> {
        self.record("update");
        let mut projects = self.projects.lock().unwrap();
        let project = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::not_found("Project not found"))?;

        if let Some(name) = &changes.name {
            project.name = name.clone();
        }
        if let Some(description) = &changes.description {
            project.description = description.clone();
        }
        if let Some(status) = changes.status {
            project.status = status.as_str().to_string();
        }
        if let Some(start_date) = changes.start_date {
            project.start_date = start_date;
        }
        if let Some(end_date) = changes.end_date {
            project.end_date = end_date;
        }
        project.updated_at = Utc::now();
        Ok(project.clone())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.record("delete");
        self.projects.lock().unwrap().retain(|p| p.id != id);
        Ok(())
    }
}

/// Summarizer returning a canned reply and remembering prompts
pub struct FakeSummarizer {
    reply: std::result::Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl FakeSummarizer {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Summarizer for FakeSummarizer {
    async fn summarize(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().map_err(Error::Summarizer)
    }
}
