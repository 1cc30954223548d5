//! Database models for Quorum
//!
//! Row types mapped from PostgreSQL via sqlx, plus the token claims and
//! per-request caller identity used by the auth layer.

pub mod comment;
pub mod discussion;
pub mod user;

pub use comment::Comment;
pub use discussion::Discussion;
pub use user::{AuthUser, Claims, User};
