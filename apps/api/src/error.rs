//! Error handling for the Quorum API
//!
//! This module provides a unified error type using thiserror. Resolver
//! failures are converted into `async_graphql::Error` values carrying a
//! short human-readable message; internal errors are logged server-side
//! and replaced with a generic message.

use thiserror::Error;

/// Main API error type
#[derive(Error, Debug)]
pub enum ApiError {
    // ========== Authentication ==========
    /// Mutation attempted without a valid bearer token
    #[error("not authenticated")]
    Unauthorized,

    /// Invalid token (malformed, bad signature)
    #[error("invalid authentication token: {0}")]
    InvalidToken(String),

    /// Login attempted for an email with no account
    #[error("no such user found")]
    NoSuchUser,

    /// Login attempted with a password that does not match
    #[error("invalid password")]
    InvalidPassword,

    // ========== Resource Errors ==========
    /// Requested resource not found
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Resource already exists (unique constraint violation)
    #[error("{resource_type} already exists: {id}")]
    Conflict {
        resource_type: &'static str,
        id: String,
    },

    // ========== Validation Errors ==========
    /// Request argument validation failed
    #[error("validation error: {0}")]
    Validation(String),

    // ========== Internal Errors ==========
    /// Database query failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// JWT encoding/decoding error
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// Internal server error (catch-all for unexpected errors)
    #[error("internal server error: {0}")]
    Internal(String),
}

/// Convenience result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

impl From<ApiError> for async_graphql::Error {
    fn from(err: ApiError) -> Self {
        match &err {
            // Internal details must not leak to clients. Log the full
            // error server-side and return a generic message.
            ApiError::Database(_) | ApiError::Jwt(_) | ApiError::Internal(_) => {
                tracing::error!(error = %err, "internal error in resolver");
                async_graphql::Error::new("an unexpected error occurred")
            }
            _ => async_graphql::Error::new(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(ApiError::Unauthorized.to_string(), "not authenticated");
        assert_eq!(ApiError::NoSuchUser.to_string(), "no such user found");
        assert_eq!(ApiError::InvalidPassword.to_string(), "invalid password");
    }

    #[test]
    fn test_not_found_message() {
        let err = ApiError::NotFound {
            resource_type: "discussion",
            id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "discussion not found: 42");
    }

    #[test]
    fn test_conflict_message() {
        let err = ApiError::Conflict {
            resource_type: "user",
            id: "a@x.com".to_string(),
        };
        assert_eq!(err.to_string(), "user already exists: a@x.com");
    }

    #[test]
    fn test_internal_errors_are_masked_in_graphql() {
        let err: async_graphql::Error =
            ApiError::Internal("pool exhausted".to_string()).into();
        assert_eq!(err.message, "an unexpected error occurred");
        assert!(!err.message.contains("pool"));
    }

    #[test]
    fn test_credential_errors_pass_through_to_graphql() {
        let err: async_graphql::Error = ApiError::InvalidPassword.into();
        assert_eq!(err.message, "invalid password");
    }
}
