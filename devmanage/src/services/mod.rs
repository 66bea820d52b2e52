//! Services module
//!
//! Business logic services that coordinate between callers, the stores
//! and the derived metrics. Input validation for new entities lives here.

pub mod clients;
pub mod dashboard;
pub mod employees;
pub mod projects;
pub mod seed;
pub mod settings;

pub use clients::ClientsService;
pub use dashboard::{DashboardService, DashboardSnapshot};
pub use employees::EmployeesService;
pub use projects::ProjectsService;
pub use seed::{seed_demo_data, SeedReport};
pub use settings::{DashboardSettings, SettingsService};

use crate::error::{AppError, Result};

/// Trimmed value, or a validation error naming `field` when blank
pub(crate) fn required(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

/// Trimmed value, with blank strings collapsed to `None`
pub(crate) fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_trims() {
        assert_eq!(required("Name", "  Acme  ").unwrap(), "Acme");
        assert!(matches!(required("Name", "   "), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_optional_collapses_blank() {
        assert_eq!(optional(Some(" x ".to_string())), Some("x".to_string()));
        assert_eq!(optional(Some("  ".to_string())), None);
        assert_eq!(optional(None), None);
    }
}
