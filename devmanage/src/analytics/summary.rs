//! At-a-glance task summary
//!
//! Buckets projects into overdue, on-hold, active and completed counts.

use crate::database::{Employee, Project, ProjectStatus};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    /// Unfinished projects past their deadline
    pub critical: usize,
    /// Serialized as `weak` for the dashboard widgets
    #[serde(rename = "weak")]
    pub on_hold: usize,
    pub active: usize,
    pub completed: usize,
}

/// Compute the task summary against the local clock.
pub fn compute_task_summary(projects: &[Project], employees: &[Employee]) -> TaskSummary {
    compute_task_summary_at(projects, employees, Local::now().date_naive())
}

/// Compute the task summary with `today` as the overdue cut-off.
///
/// `employees` does not affect the current rules.
pub fn compute_task_summary_at(
    projects: &[Project],
    _employees: &[Employee],
    today: NaiveDate,
) -> TaskSummary {
    let mut summary = TaskSummary::default();

    for project in projects {
        if is_overdue_unfinished(project, today) {
            summary.critical += 1;
        }

        match project.status {
            ProjectStatus::OnHold => summary.on_hold += 1,
            ProjectStatus::Completed => summary.completed += 1,
            ProjectStatus::Active | ProjectStatus::Started => summary.active += 1,
        }
    }

    summary
}

/// A missing deadline is never overdue. The deadline day itself already
/// counts, since the deadline is taken as the start of that day.
fn is_overdue_unfinished(project: &Project, today: NaiveDate) -> bool {
    project.status != ProjectStatus::Completed
        && project.deadline.is_some_and(|deadline| deadline <= today)
}
