//! Integration tests for DevManage
//!
//! These tests verify end-to-end functionality including:
//! - On-disk database operations
//! - Demo seeding and dashboard snapshots
//! - Settings persistence across restarts

use chrono::{NaiveDate, TimeZone, Utc};
use devmanage::analytics::ProjectFilter;
use devmanage::app::AppState;
use devmanage::config::AppConfig;
use devmanage::database::{
    create_pool, CreateClientRequest, CreatePaymentRequest, CreateProjectRequest, PaymentMethod,
    ProjectStatus, Repository,
};
use devmanage::error::AppError;
use devmanage::services::{ClientsService, ProjectsService};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

/// Helper to create a test database with schema
async fn create_test_db() -> (Repository, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");

    let pool = create_pool(&db_path).await.unwrap();
    let repo = Repository::new(pool);

    (repo, temp_dir)
}

fn test_config(temp_dir: &TempDir, seed_demo_data: bool) -> AppConfig {
    AppConfig {
        data_dir: temp_dir.path().join("data"),
        seed_demo_data,
    }
}

#[tokio::test]
async fn test_client_project_payment_workflow() {
    let (repo, _temp) = create_test_db().await;
    let clients = ClientsService::new(repo.clone());
    let projects = ProjectsService::new(repo);

    let client = clients
        .create_client(CreateClientRequest {
            name: "Sarah Johnson".to_string(),
            company: Some("InnovateCo".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let project = projects
        .create_project(CreateProjectRequest {
            client_id: client.id.clone(),
            name: "Mobile App Development".to_string(),
            description: Some("Cross-platform mobile application".to_string()),
            budget: 75_000.0,
            deadline: NaiveDate::from_ymd_opt(2024, 11, 30),
            status: ProjectStatus::Active,
            invoice_file: None,
        })
        .await
        .unwrap();

    // Two payments accumulate into total_paid
    for (amount, day) in [(30_000.0, 5), (15_000.0, 20)] {
        projects
            .add_payment(CreatePaymentRequest {
                project_id: project.id.clone(),
                amount,
                date: Utc.with_ymd_and_hms(2024, 2, day, 12, 0, 0).unwrap(),
                method: PaymentMethod::PayPal,
            })
            .await
            .unwrap();
    }

    let loaded = projects.get_project(&project.id).await.unwrap();
    assert_eq!(loaded.total_paid, 45_000.0);
    assert_eq!(loaded.payments.len(), 2);
    // Newest payment first
    assert_eq!(loaded.payments[0].amount, 15_000.0);

    let overviews = clients.client_overviews().await.unwrap();
    assert_eq!(overviews.len(), 1);
    assert_eq!(overviews[0].active_projects, 1);

    // Deleting the client removes its projects
    clients.delete_client(&client.id).await.unwrap();
    assert!(matches!(
        projects.get_project(&project.id).await,
        Err(AppError::ProjectNotFound(_))
    ));
}

#[tokio::test]
async fn test_payment_to_missing_project_fails() {
    let (repo, _temp) = create_test_db().await;
    let projects = ProjectsService::new(repo);

    let result = projects
        .add_payment(CreatePaymentRequest {
            project_id: "missing".to_string(),
            amount: 100.0,
            date: Utc::now(),
            method: PaymentMethod::Cash,
        })
        .await;

    assert!(matches!(result, Err(AppError::ProjectNotFound(_))));
}

#[tokio::test]
async fn test_initialize_seeds_demo_data() {
    let temp_dir = TempDir::new().unwrap();
    let state = AppState::initialize(test_config(&temp_dir, true))
        .await
        .unwrap();

    let today = NaiveDate::from_ymd_opt(2024, 2, 20).unwrap();
    let snapshot = state
        .dashboard
        .snapshot_with(today, &mut StdRng::seed_from_u64(1))
        .await
        .unwrap();

    assert_eq!(snapshot.metrics.total_clients, 4);
    assert_eq!(snapshot.metrics.project_status_counts.total, 7);
    assert_eq!(snapshot.metrics.project_status_counts.started, 3);
    assert_eq!(snapshot.metrics.project_status_counts.on_hold, 1);
    assert_eq!(snapshot.metrics.total_employees, 3);
    assert_eq!(snapshot.weekly.len(), 7);
    assert_eq!(snapshot.weekly[0].day, "Monday");
    assert_eq!(snapshot.task_summary.on_hold, 1);
    assert_eq!(snapshot.task_summary.completed, 2);

    let completed = state
        .projects
        .filter_projects(ProjectFilter::Completed, "")
        .await
        .unwrap();
    assert_eq!(completed.len(), 2);

    let roles = state.employees.roles().await.unwrap();
    assert_eq!(roles.len(), 3);
}

#[tokio::test]
async fn test_restart_does_not_reseed() {
    let temp_dir = TempDir::new().unwrap();

    {
        let state = AppState::initialize(test_config(&temp_dir, true))
            .await
            .unwrap();
        let clients = state.clients.list_clients().await.unwrap();
        state.clients.delete_client(&clients[0].id).await.unwrap();
    }

    let state = AppState::initialize(test_config(&temp_dir, true))
        .await
        .unwrap();

    assert_eq!(state.clients.list_clients().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_seeding_disabled_by_settings() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir, true);

    // Persist the opt-out before the first start
    devmanage::services::SettingsService::new(config.data_dir.clone())
        .set_seed_demo_data(false)
        .await
        .unwrap();

    let state = AppState::initialize(config).await.unwrap();

    let metrics = state.dashboard.metrics().await.unwrap();
    assert_eq!(metrics.total_clients, 0);
    assert_eq!(metrics.total_employees, 0);
    assert_eq!(metrics.project_completion, 0);
    assert_eq!(metrics.invoices_paid, 0);
}

#[tokio::test]
async fn test_settings_survive_restart() {
    let temp_dir = TempDir::new().unwrap();

    {
        let state = AppState::initialize(test_config(&temp_dir, false))
            .await
            .unwrap();
        state.settings.update_currency_symbol("$").await.unwrap();
    }

    let state = AppState::initialize(test_config(&temp_dir, false))
        .await
        .unwrap();
    let settings = state.settings.load().await.unwrap();

    assert_eq!(settings.currency_symbol, "$");
}
