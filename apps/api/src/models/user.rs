//! User model and authentication types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User record from the users table
#[derive(Debug, Clone, FromRow)]
pub struct User {
    /// Unique user identifier
    pub id: i32,

    /// Email address (unique)
    pub email: String,

    /// Display name
    pub name: String,

    /// URL to the user's avatar image
    pub avatar: Option<String>,

    /// Argon2id password hash. Never exposed through the API.
    pub password_hash: String,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

/// JWT claims carried by a bearer token
///
/// Tokens carry no `exp` claim: they do not expire. Known limitation;
/// decoding runs with expiry validation disabled accordingly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: i32,

    /// Issued at timestamp (Unix epoch)
    pub iat: i64,
}

impl Claims {
    /// Create new claims for a user
    pub fn new(user_id: i32) -> Self {
        Self {
            sub: user_id,
            iat: Utc::now().timestamp(),
        }
    }
}

/// Authenticated caller identity, injected into the GraphQL request data
/// by the HTTP handler when a valid bearer token is presented.
///
/// Absence of this value means the request is anonymous; protected
/// mutations check for it and fail with "not authenticated".
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    /// The verified user ID from the token's `sub` claim
    pub user_id: i32,
}
