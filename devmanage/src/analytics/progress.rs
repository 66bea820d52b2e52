//! Per-project payment progress and project list statistics

use crate::database::{Client, Project, ProjectStatus};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentProgress {
    /// Unrounded share of the budget paid so far; 0 for a zero budget
    pub progress_percent: f64,
    /// Budget still owed, never negative
    pub remaining: f64,
    pub is_overdue: bool,
    /// Whole days until the deadline; negative once it has passed
    pub days_left: Option<i64>,
}

pub fn payment_progress(project: &Project) -> PaymentProgress {
    payment_progress_at(project, Local::now().date_naive())
}

/// Payment progress with `today` as the reference for deadline checks.
///
/// Unlike the task summary, a completed project can still be overdue here.
/// The deadline day itself counts as overdue.
pub fn payment_progress_at(project: &Project, today: NaiveDate) -> PaymentProgress {
    let progress_percent = if project.budget > 0.0 {
        project.total_paid / project.budget * 100.0
    } else {
        0.0
    };

    PaymentProgress {
        progress_percent,
        remaining: (project.budget - project.total_paid).max(0.0),
        is_overdue: project.deadline.is_some_and(|d| d <= today),
        days_left: project.deadline.map(|d| (d - today).num_days()),
    }
}

/// Header counts on the projects screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

pub fn project_stats(projects: &[Project]) -> ProjectStats {
    ProjectStats {
        total: projects.len(),
        active: projects.iter().filter(|p| p.status.is_active()).count(),
        completed: projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Completed)
            .count(),
    }
}

/// A client joined with its projects at read time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientOverview {
    pub client: Client,
    pub projects: Vec<Project>,
    pub total_budget: f64,
    pub active_projects: usize,
}

/// Join each client with the projects whose `client_id` matches.
///
/// Projects referencing an unknown client are left out.
pub fn client_overviews(clients: &[Client], projects: &[Project]) -> Vec<ClientOverview> {
    clients
        .iter()
        .map(|client| {
            let owned: Vec<Project> = projects
                .iter()
                .filter(|p| p.client_id == client.id)
                .cloned()
                .collect();

            ClientOverview {
                client: client.clone(),
                total_budget: owned.iter().map(|p| p.budget).sum(),
                active_projects: owned.iter().filter(|p| p.status.is_active()).count(),
                projects: owned,
            }
        })
        .collect()
}
