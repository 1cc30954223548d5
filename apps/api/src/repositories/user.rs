//! User repository for centralized database operations

use sqlx::PgPool;

use crate::error::{ApiError, ApiResult};
use crate::models::User;

use super::utils::USER_COLUMNS;

/// Repository for user database operations
///
/// Centralizes all user-related queries so the auth service and the
/// resolver layer share one source of truth for SQL.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new UserRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new user row
    ///
    /// The email's uniqueness is enforced by the database; a violation is
    /// surfaced as `ApiError::Conflict`.
    pub async fn create(
        &self,
        email: &str,
        name: &str,
        avatar: Option<&str>,
        password_hash: &str,
    ) -> ApiResult<User> {
        sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (email, name, avatar, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(email)
        .bind(name)
        .bind(avatar)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => ApiError::Conflict {
                resource_type: "user",
                id: email.to_string(),
            },
            _ => ApiError::Database(e),
        })
    }

    /// Find a user by their unique ID
    pub async fn find_by_id(&self, user_id: i32) -> ApiResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find a user by their email address
    pub async fn find_by_email(&self, email: &str) -> ApiResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
