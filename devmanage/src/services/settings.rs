//! Settings service
//!
//! Manages dashboard display settings persistence using JSON file storage.

use crate::config::{DEFAULT_CURRENCY_SYMBOL, SETTINGS_FILE_NAME};
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;

/// User-facing dashboard settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSettings {
    /// Prefix used when rendering amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Whether empty stores are filled with demo data on startup
    #[serde(default = "default_true")]
    pub seed_demo_data: bool,
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            seed_demo_data: default_true(),
        }
    }
}

/// Service for managing dashboard settings
#[derive(Clone)]
pub struct SettingsService {
    settings_path: PathBuf,
}

impl SettingsService {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            settings_path: data_dir.join(SETTINGS_FILE_NAME),
        }
    }

    /// Load settings from disk or create default if not exists
    pub async fn load(&self) -> Result<DashboardSettings> {
        if !self.settings_path.exists() {
            tracing::info!("Settings file not found, creating default settings");
            let default = DashboardSettings::default();
            self.save(&default).await?;
            return Ok(default);
        }

        let content = fs::read_to_string(&self.settings_path).await?;
        let settings: DashboardSettings = serde_json::from_str(&content)
            .map_err(|e| AppError::Generic(format!("Failed to parse settings: {}", e)))?;

        Ok(settings)
    }

    /// Save settings to disk
    pub async fn save(&self, settings: &DashboardSettings) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(settings)?;

        fs::write(&self.settings_path, content).await?;
        tracing::info!("Settings saved to {:?}", self.settings_path);

        Ok(())
    }

    /// Update the currency symbol; blank input restores the default
    pub async fn update_currency_symbol(&self, symbol: &str) -> Result<DashboardSettings> {
        let mut settings = self.load().await?;
        let symbol = symbol.trim();
        settings.currency_symbol = if symbol.is_empty() {
            default_currency_symbol()
        } else {
            symbol.to_string()
        };
        self.save(&settings).await?;
        Ok(settings)
    }

    pub async fn set_seed_demo_data(&self, enabled: bool) -> Result<DashboardSettings> {
        let mut settings = self.load().await?;
        settings.seed_demo_data = enabled;
        self.save(&settings).await?;
        Ok(settings)
    }
}
