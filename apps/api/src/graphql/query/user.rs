//! User queries for the Quorum GraphQL API

use async_graphql::{Context, Object, Result};

use crate::graphql::types::User;
use crate::models::AuthUser;
use crate::repositories::UserRepository;

/// User-related queries
#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    /// The currently authenticated user, or null for anonymous requests
    async fn me(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let Some(auth) = ctx.data_opt::<AuthUser>() else {
            return Ok(None);
        };

        let users = ctx.data::<UserRepository>()?;
        Ok(users.find_by_id(auth.user_id).await?.map(User::from))
    }
}
