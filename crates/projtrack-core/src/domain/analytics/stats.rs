//! Status aggregation over a project snapshot

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::projects::{Project, ProjectStatus, normalize_status};

/// Count and share of projects for one status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSummary {
    /// Canonical lowercase status
    pub status: String,
    pub count: usize,
    /// Share of all projects, rounded to two decimals
    pub percentage: f64,
}

/// Aggregate statistics used by the dashboard charts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphicsData {
    pub total_projects: usize,
    /// One entry per distinct status, in first-seen order
    pub projects_by_status: Vec<StatusSummary>,
    pub completed_projects: usize,
    pub in_progress_projects: usize,
}

impl GraphicsData {
    pub fn empty() -> Self {
        Self {
            total_projects: 0,
            projects_by_status: Vec::new(),
            completed_projects: 0,
            in_progress_projects: 0,
        }
    }

    /// Count for a status value, zero when absent
    pub fn count_for(&self, status: &str) -> usize {
        let status = normalize_status(status);
        self.projects_by_status
            .iter()
            .find(|summary| summary.status == status)
            .map_or(0, |summary| summary.count)
    }
}

/// Round a share to two decimal places, halves away from zero
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    ((count as f64 / total as f64) * 100.0 * 100.0).round() / 100.0
}

/// Group projects by normalized status and compute counts and percentages.
///
/// Status values outside the known set are reported as their own groups.
pub fn aggregate(projects: &[Project]) -> GraphicsData {
    let total = projects.len();
    if total == 0 {
        return GraphicsData::empty();
    }

    let mut order: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for project in projects {
        let status = normalize_status(&project.status);
        match index.get(&status) {
            Some(&slot) => order[slot].1 += 1,
            None => {
                index.insert(status.clone(), order.len());
                order.push((status, 1));
            }
        }
    }

    let projects_by_status: Vec<StatusSummary> = order
        .into_iter()
        .map(|(status, count)| StatusSummary {
            status,
            count,
            percentage: percentage(count, total),
        })
        .collect();

    let count_of = |status: ProjectStatus| {
        projects_by_status
            .iter()
            .find(|summary| summary.status == status.as_str())
            .map_or(0, |summary| summary.count)
    };

    GraphicsData {
        total_projects: total,
        completed_projects: count_of(ProjectStatus::Completed),
        in_progress_projects: count_of(ProjectStatus::InProgress),
        projects_by_status,
    }
}
