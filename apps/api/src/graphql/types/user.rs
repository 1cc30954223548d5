//! User and authentication GraphQL types

use async_graphql::{Object, SimpleObject};
use chrono::{DateTime, Utc};

use crate::models::user::User as DbUser;

/// User account exposed via GraphQL
///
/// Wraps the database row; the password hash is deliberately not exposed.
pub struct User {
    row: DbUser,
}

impl From<DbUser> for User {
    fn from(row: DbUser) -> Self {
        Self { row }
    }
}

#[Object]
impl User {
    /// Unique user identifier
    async fn id(&self) -> i32 {
        self.row.id
    }

    /// User's email address
    async fn email(&self) -> &str {
        &self.row.email
    }

    /// Display name
    async fn name(&self) -> &str {
        &self.row.name
    }

    /// URL to the user's avatar image
    async fn avatar(&self) -> Option<&str> {
        self.row.avatar.as_deref()
    }

    /// Account creation timestamp (RFC 3339)
    async fn created_at(&self) -> DateTime<Utc> {
        self.row.created_at
    }
}

/// Authentication payload returned after register or login
#[derive(SimpleObject)]
pub struct AuthPayload {
    /// Signed bearer token establishing the caller's identity
    pub token: String,

    /// The authenticated user
    pub user: User,
}
