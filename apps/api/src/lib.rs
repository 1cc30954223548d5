//! Quorum API library
//!
//! This module exposes the core API components for use in integration
//! tests and as a library.

pub mod config;
pub mod error;
pub mod graphql;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{ApiError, ApiResult};
pub use services::{AuthConfig, AuthService};

/// Embedded sqlx migrations, run at startup and by the integration tests
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
