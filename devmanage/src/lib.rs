//! DevManage library
//!
//! Persistence, services and derived metrics behind the DevManage
//! business dashboard. The binary is a thin wrapper over [`app::AppState`].

pub mod analytics;
pub mod app;
pub mod config;
pub mod database;
pub mod error;
pub mod services;
