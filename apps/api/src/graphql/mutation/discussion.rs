//! Discussion and comment mutations for the Quorum GraphQL API
//!
//! Both mutations require an authenticated caller; anonymous requests
//! fail with "not authenticated".

use async_graphql::{Context, Object, Result};

use crate::error::ApiError;
use crate::graphql::types::{Comment, Discussion};
use crate::models::AuthUser;
use crate::repositories::{CommentRepository, DiscussionRepository, UserRepository};

/// Discussion and comment mutations
#[derive(Default)]
pub struct DiscussionMutation;

#[Object]
impl DiscussionMutation {
    /// Create a new discussion owned by the caller, returned with the
    /// author populated
    async fn create_discussion(
        &self,
        ctx: &Context<'_>,
        title: String,
        #[graphql(name = "bodyHTML")] body_html: String,
        body_text: String,
        cover: Option<String>,
    ) -> Result<Discussion> {
        let auth = ctx.data_opt::<AuthUser>().ok_or(ApiError::Unauthorized)?;

        let discussions = ctx.data::<DiscussionRepository>()?;
        let users = ctx.data::<UserRepository>()?;

        let row = discussions
            .create(
                &title,
                &body_html,
                &body_text,
                cover.as_deref(),
                auth.user_id,
            )
            .await?;

        tracing::info!(discussion_id = row.id, author_id = auth.user_id, "discussion created");

        let author = users.find_by_id(row.author_id).await?;
        Ok(Discussion::with_author(row, author))
    }

    /// Add a comment to an existing discussion, returned with the author
    /// and discussion populated
    async fn add_comment(
        &self,
        ctx: &Context<'_>,
        discussion_id: i32,
        #[graphql(name = "bodyHTML")] body_html: String,
    ) -> Result<Comment> {
        let auth = ctx.data_opt::<AuthUser>().ok_or(ApiError::Unauthorized)?;

        let comments = ctx.data::<CommentRepository>()?;
        let discussions = ctx.data::<DiscussionRepository>()?;
        let users = ctx.data::<UserRepository>()?;

        let row = comments
            .create(discussion_id, auth.user_id, &body_html)
            .await?;

        tracing::info!(comment_id = row.id, discussion_id, author_id = auth.user_id, "comment added");

        let author = users.find_by_id(row.author_id).await?;
        let discussion = discussions.find_by_id(row.discussion_id).await?;
        Ok(Comment::with_relations(row, author, discussion))
    }
}
