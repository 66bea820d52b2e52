//! Derived metrics
//!
//! Pure, synchronous transforms from entity snapshots to display-ready
//! aggregates. Nothing in here performs I/O or mutates its inputs, and
//! every percentage guards its denominator.

pub mod dashboard;
pub mod employees;
pub mod filters;
pub mod format;
pub mod progress;
pub mod summary;
pub mod weekly;

pub use dashboard::{
    compute_dashboard_metrics, compute_dashboard_metrics_at, DashboardMetrics,
    ProjectStatusCounts,
};
pub use employees::{
    attendance_breakdown, check_in_minutes, distinct_roles, employee_stats, format_duration,
    latest_check_in, spread_evenly, AttendanceBreakdown, EmployeeStats,
};
pub use filters::{filter_employees, filter_projects, search_clients, ProjectFilter};
pub use format::{format_currency, percentage_change, status_css_class, status_label};
pub use progress::{
    client_overviews, payment_progress, payment_progress_at, project_stats, ClientOverview,
    PaymentProgress, ProjectStats,
};
pub use summary::{compute_task_summary, compute_task_summary_at, TaskSummary};
pub use weekly::{
    compute_weekly_task_data, compute_weekly_task_data_with, WeeklyMultipliers, WeeklyTaskEntry,
};

#[cfg(test)]
pub(crate) mod test_support {
    //! Entity builders for the calculator tests

    use crate::database::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    pub fn client(name: &str) -> Client {
        Client {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            company: None,
            email: None,
            phone: None,
            city: None,
            country: None,
            address: None,
            created_at: Utc::now(),
        }
    }

    pub fn project(budget: f64, total_paid: f64, status: ProjectStatus) -> Project {
        Project {
            id: Uuid::new_v4().to_string(),
            client_id: "client-1".to_string(),
            name: "Project".to_string(),
            description: None,
            budget,
            deadline: None,
            status,
            created_at: Utc::now(),
            payments: Vec::new(),
            updates: Vec::new(),
            invoice_file: None,
            total_paid,
        }
    }

    /// Prepend a payment dated at noon UTC and keep `total_paid` in step.
    pub fn add_payment(project: &mut Project, amount: f64, year: i32, month: u32, day: u32) {
        let payment = Payment {
            id: Uuid::new_v4().to_string(),
            project_id: project.id.clone(),
            amount,
            date: Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap(),
            method: PaymentMethod::BankTransfer,
        };
        project.payments.insert(0, payment);
        project.total_paid += amount;
    }

    pub fn employee(work_mode: WorkMode) -> Employee {
        let id = Uuid::new_v4().to_string();
        Employee {
            email: format!("{}@company.com", id),
            id,
            full_name: "Employee".to_string(),
            role_title: "Developer".to_string(),
            years_experience: 3,
            work_mode,
            status: EmployeeStatus::OnDuty,
            completed_this_month: 0,
            on_hold_this_month: 0,
            check_ins: Vec::new(),
            created_at: Utc::now(),
        }
    }
}
