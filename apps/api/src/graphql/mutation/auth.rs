//! Authentication mutations for the Quorum GraphQL API
//!
//! - register: create an account and get a token
//! - login: authenticate and get a token

use async_graphql::{Context, Object, Result};

use crate::graphql::types::AuthPayload;
use crate::services::AuthService;

/// Authentication mutations
#[derive(Default)]
pub struct AuthMutation;

#[Object]
impl AuthMutation {
    /// Register a new user account
    ///
    /// # Errors
    /// - Returns an error when the email is already registered
    async fn register(
        &self,
        ctx: &Context<'_>,
        email: String,
        name: String,
        password: String,
        avatar: Option<String>,
    ) -> Result<AuthPayload> {
        let auth = ctx.data::<AuthService>()?;

        let (user, token) = auth
            .register(&email, &name, avatar.as_deref(), &password)
            .await?;

        Ok(AuthPayload {
            token,
            user: user.into(),
        })
    }

    /// Authenticate with email and password
    ///
    /// # Errors
    /// - "no such user found" when no account exists for the email
    /// - "invalid password" when the password does not match
    async fn login(
        &self,
        ctx: &Context<'_>,
        email: String,
        password: String,
    ) -> Result<AuthPayload> {
        let auth = ctx.data::<AuthService>()?;

        let (user, token) = auth.login(&email, &password).await?;

        Ok(AuthPayload {
            token,
            user: user.into(),
        })
    }
}
