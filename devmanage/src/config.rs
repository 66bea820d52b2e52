//! Application configuration
//!
//! Central location for the constants that drive the derived metrics,
//! validation boundaries, and the runtime configuration read from the
//! environment.

use std::path::PathBuf;

// ===== Storage =====

/// SQLite database file name inside the data directory
pub const DATABASE_FILE_NAME: &str = "devmanage.db";

/// Settings file name inside the data directory
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Data directory used when `DEVMANAGE_DATA_DIR` is not set
pub const DEFAULT_DATA_DIR: &str = "./data";

// ===== Display =====

/// Currency symbol prefixed to formatted amounts
pub const DEFAULT_CURRENCY_SYMBOL: &str = "R";

// ===== Weekly Task Synthesis =====

/// Weekday labels, Monday first
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Inclusive range of the per-day base draw for completed tasks
pub const WEEKLY_COMPLETED_RANGE: (u32, u32) = (10, 58);
/// Inclusive range of the per-day base draw for active tasks
pub const WEEKLY_ACTIVE_RANGE: (u32, u32) = (5, 13);
/// Inclusive range of the per-day base draw for on-hold tasks
pub const WEEKLY_ON_HOLD_RANGE: (u32, u32) = (1, 31);

/// Active multiplier = max(ACTIVE_FLOOR, active projects / ACTIVE_DIVISOR)
pub const ACTIVE_MULTIPLIER_DIVISOR: f64 = 3.0;
pub const ACTIVE_MULTIPLIER_FLOOR: f64 = 1.0;
/// Completed multiplier = max(COMPLETED_FLOOR, completed projects / COMPLETED_DIVISOR)
pub const COMPLETED_MULTIPLIER_DIVISOR: f64 = 2.0;
pub const COMPLETED_MULTIPLIER_FLOOR: f64 = 1.0;
/// On-hold multiplier = max(ON_HOLD_FLOOR, on-hold projects / ON_HOLD_DIVISOR)
pub const ON_HOLD_MULTIPLIER_DIVISOR: f64 = 2.0;
pub const ON_HOLD_MULTIPLIER_FLOOR: f64 = 0.5;

// ===== Employees =====

/// Working days assumed per month for attendance breakdowns
pub const WORKING_DAYS_PER_MONTH: u32 = 22;

/// On-hold tasks that count as one day of leave
pub const ON_HOLD_TASKS_PER_LEAVE_DAY: u32 = 3;

/// Maximum years of experience accepted for an employee
pub const MAX_YEARS_EXPERIENCE: i64 = 60;

/// Runtime configuration read from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub seed_demo_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            seed_demo_data: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from `.env` and the process environment.
    ///
    /// Recognised variables: `DEVMANAGE_DATA_DIR`, `DEVMANAGE_SEED_DEMO`.
    pub fn from_env() -> Self {
        // A missing .env file is normal outside development
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!("No .env file loaded: {}", e);
        }

        let defaults = Self::default();

        let data_dir = std::env::var("DEVMANAGE_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let seed_demo_data = std::env::var("DEVMANAGE_SEED_DEMO")
            .ok()
            .and_then(|v| parse_flag(&v))
            .unwrap_or(defaults.seed_demo_data);

        Self {
            data_dir,
            seed_demo_data,
        }
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE_NAME)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag(" YES "), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_database_path_inside_data_dir() {
        let config = AppConfig {
            data_dir: PathBuf::from("/tmp/devmanage"),
            seed_demo_data: false,
        };

        assert_eq!(
            config.database_path(),
            PathBuf::from("/tmp/devmanage").join(DATABASE_FILE_NAME)
        );
    }
}
