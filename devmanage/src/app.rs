//! Application state and initialization
//!
//! This module manages the central application state and lifecycle.
//! All services are initialized here and made available through AppState.

use crate::config::AppConfig;
use crate::database::{create_pool, Repository};
use crate::error::Result;
use crate::services::{
    seed_demo_data, ClientsService, DashboardService, EmployeesService, ProjectsService,
    SettingsService,
};

/// Central application state holding all services
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub clients: ClientsService<Repository>,
    pub projects: ProjectsService<Repository>,
    pub employees: EmployeesService<Repository>,
    pub dashboard: DashboardService<Repository>,
    pub settings: SettingsService,
}

impl AppState {
    /// Open the database, build the services and seed demo data when
    /// both the environment and the stored settings allow it.
    pub async fn initialize(config: AppConfig) -> Result<Self> {
        tracing::info!("Initializing application");
        tracing::info!("Data directory: {:?}", config.data_dir);

        std::fs::create_dir_all(&config.data_dir)?;

        let pool = create_pool(&config.database_path()).await?;
        let repo = Repository::new(pool);

        let settings = SettingsService::new(config.data_dir.clone());
        let stored = settings.load().await?;

        if config.seed_demo_data && stored.seed_demo_data {
            seed_demo_data(&repo).await?;
        } else {
            tracing::debug!("Demo data seeding disabled");
        }

        let state = Self {
            config,
            clients: ClientsService::new(repo.clone()),
            projects: ProjectsService::new(repo.clone()),
            employees: EmployeesService::new(repo.clone()),
            dashboard: DashboardService::new(repo),
            settings,
        };

        tracing::info!("Application initialized successfully");

        Ok(state)
    }
}
