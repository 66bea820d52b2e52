//! Database models
//!
//! Rust structs representing the business entities.
//! All models use serde for serialization to a presentation layer;
//! field names follow the camelCase shape the dashboard screens consume.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// Lifecycle status of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
pub enum ProjectStatus {
    Active,
    #[serde(rename = "On Hold")]
    #[sqlx(rename = "On Hold")]
    OnHold,
    Completed,
    #[serde(rename = "Started (In Progress)")]
    #[sqlx(rename = "Started (In Progress)")]
    Started,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::OnHold => "On Hold",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Started => "Started (In Progress)",
        }
    }

    /// Active and Started both count as work in progress
    pub fn is_active(&self) -> bool {
        matches!(self, ProjectStatus::Active | ProjectStatus::Started)
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum PaymentMethod {
    Cash,
    #[serde(rename = "Bank Transfer")]
    #[sqlx(rename = "Bank Transfer")]
    BankTransfer,
    Check,
    PayPal,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum WorkMode {
    Office,
    Remote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum EmployeeStatus {
    #[serde(rename = "On Duty")]
    #[sqlx(rename = "On Duty")]
    OnDuty,
    #[serde(rename = "On Leave")]
    #[sqlx(rename = "On Leave")]
    OnLeave,
    #[serde(rename = "Not Busy (At Work)")]
    #[sqlx(rename = "Not Busy (At Work)")]
    NotBusy,
    #[serde(rename = "Off From Work")]
    #[sqlx(rename = "Off From Work")]
    OffFromWork,
}

/// A client; its projects are looked up by `Project::client_id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A payment recorded against a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub project_id: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub method: PaymentMethod,
}

/// Free-text progress note on a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdate {
    pub id: String,
    pub project_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Project row as stored, without its payments and updates
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRecord {
    pub id: String,
    pub client_id: String,
    pub name: String,
    pub description: Option<String>,
    pub budget: f64,
    pub deadline: Option<NaiveDate>,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
    pub invoice_file: Option<String>,
    pub total_paid: f64,
}

/// A project with its payments and updates, newest first.
///
/// `total_paid` always equals the sum of `payments[].amount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub client_id: String,
    pub name: String,
    pub description: Option<String>,
    pub budget: f64,
    pub deadline: Option<NaiveDate>,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
    pub payments: Vec<Payment>,
    pub updates: Vec<ProjectUpdate>,
    pub invoice_file: Option<String>,
    pub total_paid: f64,
}

impl Project {
    /// Assemble a project from its stored row and child collections.
    ///
    /// The payment sum wins over a stale `total_paid` column.
    pub fn from_record(
        record: ProjectRecord,
        payments: Vec<Payment>,
        updates: Vec<ProjectUpdate>,
    ) -> Self {
        let payment_sum: f64 = payments.iter().map(|p| p.amount).sum();
        if (payment_sum - record.total_paid).abs() > 1e-6 {
            tracing::warn!(
                "Project {} stored total_paid {} disagrees with payment sum {}",
                record.id,
                record.total_paid,
                payment_sum
            );
        }

        Self {
            id: record.id,
            client_id: record.client_id,
            name: record.name,
            description: record.description,
            budget: record.budget,
            deadline: record.deadline,
            status: record.status,
            created_at: record.created_at,
            payments,
            updates,
            invoice_file: record.invoice_file,
            total_paid: payment_sum,
        }
    }
}

/// One attendance record for an employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    pub id: String,
    pub employee_id: String,
    pub date: NaiveDate,
    pub check_in: NaiveTime,
    pub check_out: NaiveTime,
}

/// Employee row as stored, without check-ins
#[derive(Debug, Clone, FromRow)]
pub struct EmployeeRecord {
    pub id: String,
    pub full_name: String,
    pub role_title: String,
    pub email: String,
    pub years_experience: i64,
    pub work_mode: WorkMode,
    pub status: EmployeeStatus,
    pub completed_this_month: i64,
    pub on_hold_this_month: i64,
    pub created_at: DateTime<Utc>,
}

/// An employee with check-ins in chronological order (latest last)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub full_name: String,
    pub role_title: String,
    pub email: String,
    pub years_experience: i64,
    pub work_mode: WorkMode,
    pub status: EmployeeStatus,
    pub completed_this_month: i64,
    pub on_hold_this_month: i64,
    pub check_ins: Vec<CheckIn>,
    pub created_at: DateTime<Utc>,
}

impl Employee {
    pub fn from_record(record: EmployeeRecord, check_ins: Vec<CheckIn>) -> Self {
        Self {
            id: record.id,
            full_name: record.full_name,
            role_title: record.role_title,
            email: record.email,
            years_experience: record.years_experience,
            work_mode: record.work_mode,
            status: record.status,
            completed_this_month: record.completed_this_month,
            on_hold_this_month: record.on_hold_this_month,
            check_ins,
            created_at: record.created_at,
        }
    }
}

/// Create client request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateClientRequest {
    pub name: String,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub address: Option<String>,
}

/// Update client request; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateClientRequest {
    pub id: String,
    pub name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub address: Option<String>,
}

/// Create project request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectRequest {
    pub client_id: String,
    pub name: String,
    pub description: Option<String>,
    pub budget: f64,
    pub deadline: Option<NaiveDate>,
    pub status: ProjectStatus,
    pub invoice_file: Option<String>,
}

/// Update project request; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProjectRequest {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub budget: Option<f64>,
    pub deadline: Option<NaiveDate>,
    pub status: Option<ProjectStatus>,
}

/// Record payment request
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePaymentRequest {
    pub project_id: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub method: PaymentMethod,
}

/// Create employee request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEmployeeRequest {
    pub full_name: String,
    pub role_title: String,
    pub email: String,
    pub years_experience: i64,
    pub work_mode: WorkMode,
    pub status: EmployeeStatus,
    pub completed_this_month: i64,
    pub on_hold_this_month: i64,
}

/// Update employee request; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEmployeeRequest {
    pub id: String,
    pub full_name: Option<String>,
    pub role_title: Option<String>,
    pub email: Option<String>,
    pub years_experience: Option<i64>,
    pub work_mode: Option<WorkMode>,
    pub status: Option<EmployeeStatus>,
    pub completed_this_month: Option<i64>,
    pub on_hold_this_month: Option<i64>,
}

/// Record check-in request
#[derive(Debug, Clone, Deserialize)]
pub struct CheckInRequest {
    pub employee_id: String,
    pub date: NaiveDate,
    pub check_in: NaiveTime,
    pub check_out: NaiveTime,
}
