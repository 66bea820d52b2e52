//! Repository layer for database operations
//!
//! SQLite-backed implementation of the client, project and employee stores.
//! Operations that touch more than one table run inside a transaction.

use super::models::*;
use super::store::{ClientStore, EmployeeStore, ProjectStore};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use std::collections::HashMap;
use uuid::Uuid;

const PROJECT_COLUMNS: &str = "id, client_id, name, description, budget, deadline, status, \
     created_at, invoice_file, total_paid";

const EMPLOYEE_COLUMNS: &str = "id, full_name, role_title, email, years_experience, work_mode, \
     status, completed_this_month, on_hold_this_month, created_at";

/// Repository for database operations
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Attach payments and updates to project rows.
    ///
    /// With `client_id` set only that client's children are loaded.
    async fn assemble_projects(
        &self,
        records: Vec<ProjectRecord>,
        client_id: Option<&str>,
    ) -> Result<Vec<Project>> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let payments = sqlx::query_as::<_, Payment>(
            r#"
            SELECT id, project_id, amount, date, method FROM payments
            WHERE ? IS NULL OR project_id IN (SELECT id FROM projects WHERE client_id = ?)
            ORDER BY date DESC, rowid DESC
            "#,
        )
        .bind(client_id)
        .bind(client_id)
        .fetch_all(&self.pool)
        .await?;

        let updates = sqlx::query_as::<_, ProjectUpdate>(
            r#"
            SELECT id, project_id, content, created_at FROM project_updates
            WHERE ? IS NULL OR project_id IN (SELECT id FROM projects WHERE client_id = ?)
            ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .bind(client_id)
        .bind(client_id)
        .fetch_all(&self.pool)
        .await?;

        let mut payments_by_project: HashMap<String, Vec<Payment>> = HashMap::new();
        for payment in payments {
            payments_by_project
                .entry(payment.project_id.clone())
                .or_default()
                .push(payment);
        }

        let mut updates_by_project: HashMap<String, Vec<ProjectUpdate>> = HashMap::new();
        for update in updates {
            updates_by_project
                .entry(update.project_id.clone())
                .or_default()
                .push(update);
        }

        let projects = records
            .into_iter()
            .map(|record| {
                let payments = payments_by_project.remove(&record.id).unwrap_or_default();
                let updates = updates_by_project.remove(&record.id).unwrap_or_default();
                Project::from_record(record, payments, updates)
            })
            .collect();

        Ok(projects)
    }

    async fn ensure_client_exists(&self, id: &str) -> Result<()> {
        let found: Option<String> = sqlx::query_scalar("SELECT id FROM clients WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        found
            .map(|_| ())
            .ok_or_else(|| AppError::ClientNotFound(id.to_string()))
    }
}

#[async_trait]
impl ClientStore for Repository {
    async fn create_client(&self, req: CreateClientRequest) -> Result<Client> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (id, name, company, email, phone, city, country, address, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&id)
        .bind(&req.name)
        .bind(&req.company)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(&req.city)
        .bind(&req.country)
        .bind(&req.address)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Created client: {}", id);
        Ok(client)
    }

    async fn get_client(&self, id: &str) -> Result<Client> {
        let client = sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::ClientNotFound(id.to_string()))?;

        Ok(client)
    }

    async fn list_clients(&self) -> Result<Vec<Client>> {
        let clients =
            sqlx::query_as::<_, Client>("SELECT * FROM clients ORDER BY created_at ASC, rowid ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(clients)
    }

    async fn update_client(&self, req: UpdateClientRequest) -> Result<Client> {
        let rows_affected = sqlx::query(
            r#"
            UPDATE clients SET
                name = COALESCE(?, name),
                company = COALESCE(?, company),
                email = COALESCE(?, email),
                phone = COALESCE(?, phone),
                city = COALESCE(?, city),
                country = COALESCE(?, country),
                address = COALESCE(?, address)
            WHERE id = ?
            "#,
        )
        .bind(&req.name)
        .bind(&req.company)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(&req.city)
        .bind(&req.country)
        .bind(&req.address)
        .bind(&req.id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if rows_affected == 0 {
            return Err(AppError::ClientNotFound(req.id));
        }

        self.get_client(&req.id).await
    }

    async fn delete_client(&self, id: &str) -> Result<()> {
        let rows = sqlx::query("DELETE FROM clients WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows == 0 {
            return Err(AppError::ClientNotFound(id.to_string()));
        }

        tracing::debug!("Deleted client: {}", id);
        Ok(())
    }
}

#[async_trait]
impl ProjectStore for Repository {
    async fn create_project(&self, req: CreateProjectRequest) -> Result<Project> {
        self.ensure_client_exists(&req.client_id).await?;

        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        let record = sqlx::query_as::<_, ProjectRecord>(&format!(
            r#"
            INSERT INTO projects
                (id, client_id, name, description, budget, deadline, status, created_at, invoice_file, total_paid)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, 0)
            RETURNING {PROJECT_COLUMNS}
            "#
        ))
        .bind(&id)
        .bind(&req.client_id)
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.budget)
        .bind(req.deadline)
        .bind(req.status)
        .bind(now)
        .bind(&req.invoice_file)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Created project: {} for client: {}", id, req.client_id);
        Ok(Project::from_record(record, Vec::new(), Vec::new()))
    }

    async fn get_project(&self, id: &str) -> Result<Project> {
        let record = sqlx::query_as::<_, ProjectRecord>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::ProjectNotFound(id.to_string()))?;

        let payments = sqlx::query_as::<_, Payment>(
            r#"
            SELECT id, project_id, amount, date, method FROM payments
            WHERE project_id = ?
            ORDER BY date DESC, rowid DESC
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        let updates = sqlx::query_as::<_, ProjectUpdate>(
            r#"
            SELECT id, project_id, content, created_at FROM project_updates
            WHERE project_id = ?
            ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Project::from_record(record, payments, updates))
    }

    async fn list_projects(&self) -> Result<Vec<Project>> {
        let records = sqlx::query_as::<_, ProjectRecord>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects ORDER BY created_at ASC, rowid ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        self.assemble_projects(records, None).await
    }

    async fn list_projects_for_client(&self, client_id: &str) -> Result<Vec<Project>> {
        let records = sqlx::query_as::<_, ProjectRecord>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE client_id = ? ORDER BY created_at ASC, rowid ASC"
        ))
        .bind(client_id)
        .fetch_all(&self.pool)
        .await?;

        self.assemble_projects(records, Some(client_id)).await
    }

    async fn update_project(&self, req: UpdateProjectRequest) -> Result<Project> {
        let rows_affected = sqlx::query(
            r#"
            UPDATE projects SET
                name = COALESCE(?, name),
                description = COALESCE(?, description),
                budget = COALESCE(?, budget),
                deadline = COALESCE(?, deadline),
                status = COALESCE(?, status)
            WHERE id = ?
            "#,
        )
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.budget)
        .bind(req.deadline)
        .bind(req.status)
        .bind(&req.id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if rows_affected == 0 {
            return Err(AppError::ProjectNotFound(req.id));
        }

        self.get_project(&req.id).await
    }

    async fn delete_project(&self, id: &str) -> Result<()> {
        let rows = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows == 0 {
            return Err(AppError::ProjectNotFound(id.to_string()));
        }

        tracing::debug!("Deleted project: {}", id);
        Ok(())
    }

    async fn add_payment(&self, req: CreatePaymentRequest) -> Result<Payment> {
        let id = Uuid::new_v4().to_string();

        let mut tx = self.pool.begin().await?;

        let rows = sqlx::query("UPDATE projects SET total_paid = total_paid + ? WHERE id = ?")
            .bind(req.amount)
            .bind(&req.project_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if rows == 0 {
            return Err(AppError::ProjectNotFound(req.project_id));
        }

        let payment = sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments (id, project_id, amount, date, method)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, project_id, amount, date, method
            "#,
        )
        .bind(&id)
        .bind(&req.project_id)
        .bind(req.amount)
        .bind(req.date)
        .bind(req.method)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(
            "Recorded payment: {} of {} for project: {}",
            id,
            req.amount,
            req.project_id
        );
        Ok(payment)
    }

    async fn remove_payment(&self, payment_id: &str) -> Result<Payment> {
        let mut tx = self.pool.begin().await?;

        let payment = sqlx::query_as::<_, Payment>(
            "SELECT id, project_id, amount, date, method FROM payments WHERE id = ?",
        )
        .bind(payment_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::PaymentNotFound(payment_id.to_string()))?;

        sqlx::query("DELETE FROM payments WHERE id = ?")
            .bind(payment_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE projects SET total_paid = total_paid - ? WHERE id = ?")
            .bind(payment.amount)
            .bind(&payment.project_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            "Removed payment: {} from project: {}",
            payment_id,
            payment.project_id
        );
        Ok(payment)
    }

    async fn add_update(&self, project_id: &str, content: &str) -> Result<ProjectUpdate> {
        let exists: Option<String> = sqlx::query_scalar("SELECT id FROM projects WHERE id = ?")
            .bind(project_id)
            .fetch_optional(&self.pool)
            .await?;

        if exists.is_none() {
            return Err(AppError::ProjectNotFound(project_id.to_string()));
        }

        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        let update = sqlx::query_as::<_, ProjectUpdate>(
            r#"
            INSERT INTO project_updates (id, project_id, content, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, project_id, content, created_at
            "#,
        )
        .bind(&id)
        .bind(project_id)
        .bind(content)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Added update: {} to project: {}", id, project_id);
        Ok(update)
    }
}

#[async_trait]
impl EmployeeStore for Repository {
    async fn create_employee(&self, req: CreateEmployeeRequest) -> Result<Employee> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        let record = sqlx::query_as::<_, EmployeeRecord>(&format!(
            r#"
            INSERT INTO employees
                (id, full_name, role_title, email, years_experience, work_mode, status,
                 completed_this_month, on_hold_this_month, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {EMPLOYEE_COLUMNS}
            "#
        ))
        .bind(&id)
        .bind(&req.full_name)
        .bind(&req.role_title)
        .bind(&req.email)
        .bind(req.years_experience)
        .bind(req.work_mode)
        .bind(req.status)
        .bind(req.completed_this_month)
        .bind(req.on_hold_this_month)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Created employee: {}", id);
        Ok(Employee::from_record(record, Vec::new()))
    }

    async fn get_employee(&self, id: &str) -> Result<Employee> {
        let record = sqlx::query_as::<_, EmployeeRecord>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::EmployeeNotFound(id.to_string()))?;

        let check_ins = sqlx::query_as::<_, CheckIn>(
            r#"
            SELECT id, employee_id, date, check_in, check_out FROM check_ins
            WHERE employee_id = ?
            ORDER BY date ASC, check_in ASC, rowid ASC
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Employee::from_record(record, check_ins))
    }

    async fn list_employees(&self) -> Result<Vec<Employee>> {
        let records = sqlx::query_as::<_, EmployeeRecord>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees ORDER BY created_at ASC, rowid ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        if records.is_empty() {
            return Ok(Vec::new());
        }

        let check_ins = sqlx::query_as::<_, CheckIn>(
            r#"
            SELECT id, employee_id, date, check_in, check_out FROM check_ins
            ORDER BY date ASC, check_in ASC, rowid ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut by_employee: HashMap<String, Vec<CheckIn>> = HashMap::new();
        for check_in in check_ins {
            by_employee
                .entry(check_in.employee_id.clone())
                .or_default()
                .push(check_in);
        }

        let employees = records
            .into_iter()
            .map(|record| {
                let check_ins = by_employee.remove(&record.id).unwrap_or_default();
                Employee::from_record(record, check_ins)
            })
            .collect();

        Ok(employees)
    }

    async fn update_employee(&self, req: UpdateEmployeeRequest) -> Result<Employee> {
        let rows_affected = sqlx::query(
            r#"
            UPDATE employees SET
                full_name = COALESCE(?, full_name),
                role_title = COALESCE(?, role_title),
                email = COALESCE(?, email),
                years_experience = COALESCE(?, years_experience),
                work_mode = COALESCE(?, work_mode),
                status = COALESCE(?, status),
                completed_this_month = COALESCE(?, completed_this_month),
                on_hold_this_month = COALESCE(?, on_hold_this_month)
            WHERE id = ?
            "#,
        )
        .bind(&req.full_name)
        .bind(&req.role_title)
        .bind(&req.email)
        .bind(req.years_experience)
        .bind(req.work_mode)
        .bind(req.status)
        .bind(req.completed_this_month)
        .bind(req.on_hold_this_month)
        .bind(&req.id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if rows_affected == 0 {
            return Err(AppError::EmployeeNotFound(req.id));
        }

        self.get_employee(&req.id).await
    }

    async fn delete_employee(&self, id: &str) -> Result<()> {
        let rows = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows == 0 {
            return Err(AppError::EmployeeNotFound(id.to_string()));
        }

        tracing::debug!("Deleted employee: {}", id);
        Ok(())
    }

    async fn record_check_in(&self, req: CheckInRequest) -> Result<CheckIn> {
        let exists: Option<String> = sqlx::query_scalar("SELECT id FROM employees WHERE id = ?")
            .bind(&req.employee_id)
            .fetch_optional(&self.pool)
            .await?;

        if exists.is_none() {
            return Err(AppError::EmployeeNotFound(req.employee_id));
        }

        let id = Uuid::new_v4().to_string();

        let check_in = sqlx::query_as::<_, CheckIn>(
            r#"
            INSERT INTO check_ins (id, employee_id, date, check_in, check_out)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, employee_id, date, check_in, check_out
            "#,
        )
        .bind(&id)
        .bind(&req.employee_id)
        .bind(req.date)
        .bind(req.check_in)
        .bind(req.check_out)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Recorded check-in: {} for employee: {}", id, req.employee_id);
        Ok(check_in)
    }
}
