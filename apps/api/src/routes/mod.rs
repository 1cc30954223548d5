//! HTTP route handlers

pub mod graphql;
pub mod health;

pub use graphql::graphql_router;
pub use health::health_router;
