//! Business logic services for Quorum

pub mod auth;

pub use auth::{AuthConfig, AuthService};
