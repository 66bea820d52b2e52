//! Error types for DevManage
//!
//! All errors use thiserror for structured error handling.
//! These errors can be serialized to a presentation layer.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Client not found: {0}")]
    ClientNotFound(String),

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Employee not found: {0}")]
    EmployeeNotFound(String),

    #[error("Payment not found: {0}")]
    PaymentNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    Generic(String),
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
