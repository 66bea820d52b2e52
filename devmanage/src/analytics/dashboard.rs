//! Dashboard aggregate metrics
//!
//! Counts, financial totals and percentages across all entities.

use crate::database::{Client, Employee, Project, ProjectStatus, WorkMode};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Project counts by status, as shown on the dashboard status card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStatusCounts {
    /// Projects with status "Started (In Progress)" only
    pub started: usize,
    pub on_hold: usize,
    pub completed: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_clients: usize,
    /// Active or Started projects
    pub active_projects: usize,
    pub completed_projects: usize,
    pub total_employees: usize,
    pub total_earnings: f64,
    pub monthly_revenue: f64,
    /// Total budget minus total earnings; negative when overpaid
    pub outstanding_balance: f64,
    pub external_employees: usize,
    /// Earnings as a rounded percentage of total budget; may exceed 100
    pub project_completion: i64,
    /// Rounded percentage of projects paid in full
    pub invoices_paid: i64,
    pub project_status_counts: ProjectStatusCounts,
}

/// Compute dashboard metrics against the local clock.
pub fn compute_dashboard_metrics(
    clients: &[Client],
    projects: &[Project],
    employees: &[Employee],
) -> DashboardMetrics {
    compute_dashboard_metrics_at(clients, projects, employees, Local::now().date_naive())
}

/// Compute dashboard metrics with `today` as the reference date for
/// the monthly revenue window.
pub fn compute_dashboard_metrics_at(
    clients: &[Client],
    projects: &[Project],
    employees: &[Employee],
    today: NaiveDate,
) -> DashboardMetrics {
    let count_status =
        |status: ProjectStatus| projects.iter().filter(|p| p.status == status).count();

    let active_projects = projects.iter().filter(|p| p.status.is_active()).count();
    let completed_projects = count_status(ProjectStatus::Completed);

    let total_earnings: f64 = projects.iter().map(|p| p.total_paid).sum();
    let total_budget: f64 = projects.iter().map(|p| p.budget).sum();

    let fully_paid = projects.iter().filter(|p| p.total_paid >= p.budget).count();

    let metrics = DashboardMetrics {
        total_clients: clients.len(),
        active_projects,
        completed_projects,
        total_employees: employees.len(),
        total_earnings,
        monthly_revenue: monthly_revenue(projects, today),
        outstanding_balance: total_budget - total_earnings,
        external_employees: employees
            .iter()
            .filter(|e| e.work_mode == WorkMode::Remote)
            .count(),
        project_completion: if total_budget > 0.0 {
            rounded_percent(total_earnings, total_budget)
        } else {
            0
        },
        invoices_paid: if projects.is_empty() {
            0
        } else {
            rounded_percent(fully_paid as f64, projects.len() as f64)
        },
        project_status_counts: ProjectStatusCounts {
            started: count_status(ProjectStatus::Started),
            on_hold: count_status(ProjectStatus::OnHold),
            completed: completed_projects,
            total: projects.len(),
        },
    };

    tracing::debug!(
        "Computed dashboard metrics over {} clients, {} projects, {} employees",
        clients.len(),
        projects.len(),
        employees.len()
    );

    metrics
}

/// Sum of payments dated in the same local calendar month and year as `today`.
pub fn monthly_revenue(projects: &[Project], today: NaiveDate) -> f64 {
    projects
        .iter()
        .flat_map(|p| p.payments.iter())
        .filter(|payment| {
            let date = payment.date.with_timezone(&Local).date_naive();
            date.year() == today.year() && date.month() == today.month()
        })
        .map(|payment| payment.amount)
        .sum()
}

/// `numerator / denominator * 100`, rounded half away from zero.
/// Callers guarantee a non-zero denominator.
fn rounded_percent(numerator: f64, denominator: f64) -> i64 {
    (numerator / denominator * 100.0).round() as i64
}
