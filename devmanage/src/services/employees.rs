//! Employees service
//!
//! Employee lifecycle, check-ins and the employee screen aggregates.

use super::required;
use crate::analytics::{self, AttendanceBreakdown, EmployeeStats};
use crate::config::MAX_YEARS_EXPERIENCE;
use crate::database::{
    CheckIn, CheckInRequest, CreateEmployeeRequest, Employee, EmployeeStore,
    UpdateEmployeeRequest,
};
use crate::error::{AppError, Result};

/// Service for managing employees
#[derive(Clone)]
pub struct EmployeesService<S> {
    store: S,
}

fn validate_counter(field: &str, value: i64) -> Result<i64> {
    if value < 0 {
        return Err(AppError::Validation(format!(
            "{} cannot be negative, got {}",
            field, value
        )));
    }
    Ok(value)
}

fn validate_experience(years: i64) -> Result<i64> {
    if !(0..=MAX_YEARS_EXPERIENCE).contains(&years) {
        return Err(AppError::Validation(format!(
            "Years of experience must be between 0 and {}, got {}",
            MAX_YEARS_EXPERIENCE, years
        )));
    }
    Ok(years)
}

impl<S> EmployeesService<S>
where
    S: EmployeeStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create a new employee
    pub async fn create_employee(&self, req: CreateEmployeeRequest) -> Result<Employee> {
        let req = CreateEmployeeRequest {
            years_experience: validate_experience(req.years_experience)?,
            full_name: required("Full name", &req.full_name)?,
            role_title: required("Role title", &req.role_title)?,
            email: required("Email", &req.email)?,
            completed_this_month: validate_counter(
                "Completed tasks",
                req.completed_this_month,
            )?,
            on_hold_this_month: validate_counter("On-hold tasks", req.on_hold_this_month)?,
            ..req
        };

        tracing::info!("Creating employee: {}", req.full_name);
        let employee = self.store.create_employee(req).await?;
        tracing::info!("Employee created successfully: {}", employee.id);

        Ok(employee)
    }

    pub async fn get_employee(&self, id: &str) -> Result<Employee> {
        self.store.get_employee(id).await
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>> {
        self.store.list_employees().await
    }

    /// Update an employee; `None` fields are left unchanged
    pub async fn update_employee(&self, req: UpdateEmployeeRequest) -> Result<Employee> {
        let full_name = req
            .full_name
            .map(|name| required("Full name", &name))
            .transpose()?;
        let role_title = req
            .role_title
            .map(|role| required("Role title", &role))
            .transpose()?;
        let email = req
            .email
            .map(|email| required("Email", &email))
            .transpose()?;
        let years_experience = req.years_experience.map(validate_experience).transpose()?;
        let completed_this_month = req
            .completed_this_month
            .map(|v| validate_counter("Completed tasks", v))
            .transpose()?;
        let on_hold_this_month = req
            .on_hold_this_month
            .map(|v| validate_counter("On-hold tasks", v))
            .transpose()?;

        let req = UpdateEmployeeRequest {
            full_name,
            role_title,
            email,
            years_experience,
            completed_this_month,
            on_hold_this_month,
            ..req
        };

        tracing::debug!("Updating employee: {}", req.id);
        self.store.update_employee(req).await
    }

    pub async fn delete_employee(&self, id: &str) -> Result<()> {
        tracing::info!("Deleting employee: {}", id);
        self.store.delete_employee(id).await?;
        tracing::info!("Employee deleted successfully: {}", id);
        Ok(())
    }

    /// Record a day's check-in and check-out
    pub async fn record_check_in(&self, req: CheckInRequest) -> Result<CheckIn> {
        if req.check_out < req.check_in {
            return Err(AppError::Validation(format!(
                "Check-out {} is before check-in {}",
                req.check_out, req.check_in
            )));
        }

        tracing::debug!("Recording check-in for employee: {} on {}", req.employee_id, req.date);
        self.store.record_check_in(req).await
    }

    /// Employees matching an optional role and a search query
    pub async fn filter_employees(&self, role: Option<&str>, query: &str) -> Result<Vec<Employee>> {
        let employees = self.store.list_employees().await?;

        Ok(analytics::filter_employees(&employees, role, query)
            .into_iter()
            .cloned()
            .collect())
    }

    pub async fn employee_stats(&self) -> Result<EmployeeStats> {
        let employees = self.store.list_employees().await?;
        Ok(analytics::employee_stats(&employees))
    }

    /// Distinct role titles, for the role filter
    pub async fn roles(&self) -> Result<Vec<String>> {
        let employees = self.store.list_employees().await?;
        Ok(analytics::distinct_roles(&employees))
    }

    pub async fn attendance(&self, employee_id: &str) -> Result<AttendanceBreakdown> {
        let employee = self.store.get_employee(employee_id).await?;
        Ok(analytics::attendance_breakdown(&employee))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{initialize_database, EmployeeStatus, Repository, WorkMode};
    use chrono::{NaiveDate, NaiveTime};
    use sqlx::sqlite::SqlitePoolOptions;

    async fn create_test_service() -> EmployeesService<Repository> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        initialize_database(&pool).await.unwrap();

        EmployeesService::new(Repository::new(pool))
    }

    fn new_employee(name: &str, role: &str, status: EmployeeStatus) -> CreateEmployeeRequest {
        CreateEmployeeRequest {
            full_name: name.to_string(),
            role_title: role.to_string(),
            email: format!("{}@company.com", name.to_lowercase().replace(' ', ".")),
            years_experience: 5,
            work_mode: WorkMode::Office,
            status,
            completed_this_month: 8,
            on_hold_this_month: 1,
        }
    }

    #[tokio::test]
    async fn test_create_employee_validates_experience() {
        let service = create_test_service().await;

        let mut req = new_employee("Alex Rodriguez", "Developer", EmployeeStatus::OnDuty);
        req.years_experience = MAX_YEARS_EXPERIENCE + 1;

        assert!(matches!(
            service.create_employee(req).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_update_employee_profile_fields() {
        let service = create_test_service().await;

        let employee = service
            .create_employee(new_employee("David Kim", "Project Manager", EmployeeStatus::OnDuty))
            .await
            .unwrap();

        for years in [-1, MAX_YEARS_EXPERIENCE + 1] {
            let result = service
                .update_employee(UpdateEmployeeRequest {
                    id: employee.id.clone(),
                    years_experience: Some(years),
                    ..Default::default()
                })
                .await;
            assert!(matches!(result, Err(AppError::Validation(_))));
        }

        let blank_name = service
            .update_employee(UpdateEmployeeRequest {
                id: employee.id.clone(),
                full_name: Some("  ".to_string()),
                ..Default::default()
            })
            .await;
        assert!(matches!(blank_name, Err(AppError::Validation(_))));

        let updated = service
            .update_employee(UpdateEmployeeRequest {
                id: employee.id.clone(),
                full_name: Some(" David J. Kim ".to_string()),
                email: Some("djkim@company.com".to_string()),
                years_experience: Some(MAX_YEARS_EXPERIENCE),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.full_name, "David J. Kim");
        assert_eq!(updated.email, "djkim@company.com");
        assert_eq!(updated.years_experience, MAX_YEARS_EXPERIENCE);
        assert_eq!(updated.role_title, "Project Manager");
    }

    #[tokio::test]
    async fn test_create_employee_rejects_negative_counters() {
        let service = create_test_service().await;

        let mut req = new_employee("Maria Garcia", "Designer", EmployeeStatus::OnDuty);
        req.on_hold_this_month = -1;

        assert!(matches!(
            service.create_employee(req).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_stats_and_roles() {
        let service = create_test_service().await;

        service
            .create_employee(new_employee("Alex Rodriguez", "Developer", EmployeeStatus::OnDuty))
            .await
            .unwrap();
        service
            .create_employee(new_employee("Maria Garcia", "Designer", EmployeeStatus::NotBusy))
            .await
            .unwrap();
        service
            .create_employee(new_employee("David Kim", "Developer", EmployeeStatus::OnLeave))
            .await
            .unwrap();

        let stats = service.employee_stats().await.unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.on_leave, 1);

        let roles = service.roles().await.unwrap();
        assert_eq!(roles.len(), 2);

        let developers = service
            .filter_employees(Some("developer"), "")
            .await
            .unwrap();
        assert_eq!(developers.len(), 2);

        let by_name = service.filter_employees(None, "maria").await.unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].full_name, "Maria Garcia");
    }

    #[tokio::test]
    async fn test_check_in_and_attendance() {
        let service = create_test_service().await;

        let employee = service
            .create_employee(new_employee("Alex Rodriguez", "Developer", EmployeeStatus::OnDuty))
            .await
            .unwrap();

        let date = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
        let backwards = CheckInRequest {
            employee_id: employee.id.clone(),
            date,
            check_in: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            check_out: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        };
        assert!(matches!(
            service.record_check_in(backwards).await,
            Err(AppError::Validation(_))
        ));

        service
            .record_check_in(CheckInRequest {
                employee_id: employee.id.clone(),
                date,
                check_in: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                check_out: NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
            })
            .await
            .unwrap();

        let attendance = service.attendance(&employee.id).await.unwrap();
        assert_eq!(attendance.busy, 1);
        assert_eq!(attendance.leave, 0);
        assert_eq!(attendance.idle, 21);
    }
}
