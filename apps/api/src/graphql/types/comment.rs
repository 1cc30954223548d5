//! Comment GraphQL type and its field resolvers

use async_graphql::{Context, Object, Result};
use chrono::{DateTime, Utc};

use crate::models::comment::Comment as DbComment;
use crate::models::discussion::Discussion as DbDiscussion;
use crate::models::user::User as DbUser;
use crate::repositories::{DiscussionRepository, UserRepository};

use super::{Discussion, User};

/// Comment exposed via GraphQL
///
/// Both relations are optional pre-populated payloads with a
/// fetch-by-foreign-key fallback.
pub struct Comment {
    row: DbComment,
    author: Option<DbUser>,
    discussion: Option<DbDiscussion>,
}

impl Comment {
    /// Wrap a row without pre-populated relations
    pub fn new(row: DbComment) -> Self {
        Self {
            row,
            author: None,
            discussion: None,
        }
    }

    /// Wrap a row with both relations already loaded
    pub fn with_relations(
        row: DbComment,
        author: Option<DbUser>,
        discussion: Option<DbDiscussion>,
    ) -> Self {
        Self {
            row,
            author,
            discussion,
        }
    }
}

#[Object]
impl Comment {
    /// Unique comment identifier
    async fn id(&self) -> i32 {
        self.row.id
    }

    /// Rendered HTML body
    #[graphql(name = "bodyHTML")]
    async fn body_html(&self) -> &str {
        &self.row.body_html
    }

    /// Creation timestamp (RFC 3339)
    async fn created_at(&self) -> DateTime<Utc> {
        self.row.created_at
    }

    /// The discussion this comment belongs to
    async fn discussion(&self, ctx: &Context<'_>) -> Result<Option<Discussion>> {
        if let Some(discussion) = &self.discussion {
            return Ok(Some(Discussion::new(discussion.clone())));
        }

        let discussions = ctx.data::<DiscussionRepository>()?;
        Ok(discussions
            .find_by_id(self.row.discussion_id)
            .await?
            .map(Discussion::new))
    }

    /// The user who wrote this comment
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        if let Some(author) = &self.author {
            return Ok(Some(author.clone().into()));
        }

        let users = ctx.data::<UserRepository>()?;
        Ok(users.find_by_id(self.row.author_id).await?.map(User::from))
    }
}
