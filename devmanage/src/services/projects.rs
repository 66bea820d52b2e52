//! Projects service
//!
//! Project lifecycle, payments and progress updates. Payments go through
//! the store's transactional operations so `total_paid` never drifts from
//! the payment list.

use super::{optional, required};
use crate::analytics::{self, PaymentProgress, ProjectFilter, ProjectStats};
use crate::database::{
    ClientStore, CreatePaymentRequest, CreateProjectRequest, Project, ProjectStore, ProjectUpdate,
    UpdateProjectRequest,
};
use crate::error::{AppError, Result};

/// Service for managing projects
#[derive(Clone)]
pub struct ProjectsService<S> {
    store: S,
}

fn validate_budget(budget: f64) -> Result<f64> {
    if !budget.is_finite() || budget < 0.0 {
        return Err(AppError::Validation(format!(
            "Budget must be a non-negative amount, got {}",
            budget
        )));
    }
    Ok(budget)
}

impl<S> ProjectsService<S>
where
    S: ProjectStore + ClientStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create a new project for an existing client
    pub async fn create_project(&self, req: CreateProjectRequest) -> Result<Project> {
        let req = CreateProjectRequest {
            name: required("Project name", &req.name)?,
            description: optional(req.description),
            budget: validate_budget(req.budget)?,
            invoice_file: optional(req.invoice_file),
            ..req
        };

        tracing::info!("Creating project: {} for client: {}", req.name, req.client_id);
        let project = self.store.create_project(req).await?;
        tracing::info!("Project created successfully: {}", project.id);

        Ok(project)
    }

    pub async fn get_project(&self, id: &str) -> Result<Project> {
        self.store.get_project(id).await
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        self.store.list_projects().await
    }

    pub async fn list_projects_for_client(&self, client_id: &str) -> Result<Vec<Project>> {
        self.store.list_projects_for_client(client_id).await
    }

    pub async fn update_project(&self, req: UpdateProjectRequest) -> Result<Project> {
        let name = match req.name {
            Some(name) => Some(required("Project name", &name)?),
            None => None,
        };
        let budget = req.budget.map(validate_budget).transpose()?;

        let req = UpdateProjectRequest {
            name,
            budget,
            description: optional(req.description),
            ..req
        };

        tracing::debug!("Updating project: {}", req.id);
        self.store.update_project(req).await
    }

    pub async fn delete_project(&self, id: &str) -> Result<()> {
        tracing::info!("Deleting project: {}", id);
        self.store.delete_project(id).await?;
        tracing::info!("Project deleted successfully: {}", id);
        Ok(())
    }

    /// Record a payment and return the refreshed project
    pub async fn add_payment(&self, req: CreatePaymentRequest) -> Result<Project> {
        if !req.amount.is_finite() || req.amount <= 0.0 {
            return Err(AppError::Validation(format!(
                "Payment amount must be positive, got {}",
                req.amount
            )));
        }

        let project_id = req.project_id.clone();
        let payment = self.store.add_payment(req).await?;
        tracing::info!(
            "Payment recorded: {} ({}) on project: {}",
            payment.id,
            payment.amount,
            project_id
        );

        self.store.get_project(&project_id).await
    }

    /// Remove a payment and return the refreshed project
    pub async fn remove_payment(&self, payment_id: &str) -> Result<Project> {
        let payment = self.store.remove_payment(payment_id).await?;
        tracing::info!(
            "Payment removed: {} ({}) from project: {}",
            payment.id,
            payment.amount,
            payment.project_id
        );

        self.store.get_project(&payment.project_id).await
    }

    /// Add a progress update
    pub async fn add_update(&self, project_id: &str, content: &str) -> Result<ProjectUpdate> {
        let content = required("Update content", content)?;
        self.store.add_update(project_id, &content).await
    }

    /// Projects in a status group matching a search query
    pub async fn filter_projects(&self, filter: ProjectFilter, query: &str) -> Result<Vec<Project>> {
        let projects = self.store.list_projects().await?;
        let clients = self.store.list_clients().await?;

        Ok(analytics::filter_projects(&projects, &clients, filter, query)
            .into_iter()
            .cloned()
            .collect())
    }

    pub async fn project_stats(&self) -> Result<ProjectStats> {
        let projects = self.store.list_projects().await?;
        Ok(analytics::project_stats(&projects))
    }

    pub async fn payment_progress(&self, project_id: &str) -> Result<PaymentProgress> {
        let project = self.store.get_project(project_id).await?;
        Ok(analytics::payment_progress(&project))
    }
}
