//! Dashboard service
//!
//! Reads one snapshot of every store and runs the dashboard calculators
//! over it, so all three views agree on the same data.

use crate::analytics::{
    compute_dashboard_metrics_at, compute_task_summary_at, compute_weekly_task_data,
    compute_weekly_task_data_with, DashboardMetrics, TaskSummary, WeeklyTaskEntry,
};
use crate::database::{Client, ClientStore, Employee, EmployeeStore, Project, ProjectStore};
use crate::error::Result;
use chrono::{Local, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Everything the dashboard renders
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub metrics: DashboardMetrics,
    pub weekly: Vec<WeeklyTaskEntry>,
    pub task_summary: TaskSummary,
}

/// Service computing dashboard views from the stores
#[derive(Clone)]
pub struct DashboardService<S> {
    store: S,
}

struct Entities {
    clients: Vec<Client>,
    projects: Vec<Project>,
    employees: Vec<Employee>,
}

impl Entities {
    fn snapshot<R: Rng + ?Sized>(&self, today: NaiveDate, rng: &mut R) -> DashboardSnapshot {
        DashboardSnapshot {
            metrics: compute_dashboard_metrics_at(
                &self.clients,
                &self.projects,
                &self.employees,
                today,
            ),
            weekly: compute_weekly_task_data_with(&self.projects, rng),
            task_summary: compute_task_summary_at(&self.projects, &self.employees, today),
        }
    }
}

impl<S> DashboardService<S>
where
    S: ClientStore + ProjectStore + EmployeeStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    async fn load(&self) -> Result<Entities> {
        let clients = self.store.list_clients().await?;
        let projects = self.store.list_projects().await?;
        let employees = self.store.list_employees().await?;

        tracing::debug!(
            "Dashboard snapshot: {} clients, {} projects, {} employees",
            clients.len(),
            projects.len(),
            employees.len()
        );

        Ok(Entities {
            clients,
            projects,
            employees,
        })
    }

    /// Full dashboard against the local clock and the thread RNG
    pub async fn snapshot(&self) -> Result<DashboardSnapshot> {
        let entities = self.load().await?;
        Ok(entities.snapshot(Local::now().date_naive(), &mut rand::thread_rng()))
    }

    /// Full dashboard for a given reference date and randomness source
    pub async fn snapshot_with<R: Rng + ?Sized>(
        &self,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<DashboardSnapshot> {
        let entities = self.load().await?;
        Ok(entities.snapshot(today, rng))
    }

    pub async fn metrics(&self) -> Result<DashboardMetrics> {
        let entities = self.load().await?;

        Ok(compute_dashboard_metrics_at(
            &entities.clients,
            &entities.projects,
            &entities.employees,
            Local::now().date_naive(),
        ))
    }

    pub async fn weekly_task_data(&self) -> Result<Vec<WeeklyTaskEntry>> {
        let projects = self.store.list_projects().await?;
        Ok(compute_weekly_task_data(&projects))
    }

    pub async fn task_summary(&self) -> Result<TaskSummary> {
        let projects = self.store.list_projects().await?;
        let employees = self.store.list_employees().await?;

        Ok(compute_task_summary_at(
            &projects,
            &employees,
            Local::now().date_naive(),
        ))
    }
}
