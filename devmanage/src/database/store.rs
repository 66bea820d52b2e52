//! Store traits
//!
//! Collaborator interfaces that supply entity snapshots to the services.
//! Reads return owned collections, so a caller's later mutations never
//! reach a snapshot that has already been handed out.

use super::models::*;
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ClientStore: Send + Sync {
    async fn create_client(&self, req: CreateClientRequest) -> Result<Client>;
    async fn get_client(&self, id: &str) -> Result<Client>;
    async fn list_clients(&self) -> Result<Vec<Client>>;
    async fn update_client(&self, req: UpdateClientRequest) -> Result<Client>;
    /// Deleting a client also deletes its projects
    async fn delete_client(&self, id: &str) -> Result<()>;
}

#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn create_project(&self, req: CreateProjectRequest) -> Result<Project>;
    async fn get_project(&self, id: &str) -> Result<Project>;
    async fn list_projects(&self) -> Result<Vec<Project>>;
    async fn list_projects_for_client(&self, client_id: &str) -> Result<Vec<Project>>;
    async fn update_project(&self, req: UpdateProjectRequest) -> Result<Project>;
    async fn delete_project(&self, id: &str) -> Result<()>;

    /// Record a payment and raise the project's `total_paid` atomically
    async fn add_payment(&self, req: CreatePaymentRequest) -> Result<Payment>;
    /// Remove a payment and lower the project's `total_paid` atomically
    async fn remove_payment(&self, payment_id: &str) -> Result<Payment>;

    async fn add_update(&self, project_id: &str, content: &str) -> Result<ProjectUpdate>;
}

#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn create_employee(&self, req: CreateEmployeeRequest) -> Result<Employee>;
    async fn get_employee(&self, id: &str) -> Result<Employee>;
    async fn list_employees(&self) -> Result<Vec<Employee>>;
    async fn update_employee(&self, req: UpdateEmployeeRequest) -> Result<Employee>;
    async fn delete_employee(&self, id: &str) -> Result<()>;
    async fn record_check_in(&self, req: CheckInRequest) -> Result<CheckIn>;
}
