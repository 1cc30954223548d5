//! Discussion GraphQL type and its field resolvers

use async_graphql::{Context, Object, Result};
use chrono::{DateTime, Utc};

use crate::graphql::pagination::{resolve_page_args, trim_page};
use crate::models::discussion::Discussion as DbDiscussion;
use crate::models::user::User as DbUser;
use crate::repositories::{CommentRepository, UserRepository};

use super::{Comment, Connection, User};

/// Discussion exposed via GraphQL
///
/// Carries an optional pre-populated author payload: resolvers that
/// already joined the relation hand it over, anything else is fetched on
/// demand by foreign key.
pub struct Discussion {
    row: DbDiscussion,
    author: Option<DbUser>,
}

impl Discussion {
    /// Wrap a row without a pre-populated author
    pub fn new(row: DbDiscussion) -> Self {
        Self { row, author: None }
    }

    /// Wrap a row with the author relation already loaded
    pub fn with_author(row: DbDiscussion, author: Option<DbUser>) -> Self {
        Self { row, author }
    }
}

#[Object]
impl Discussion {
    /// Unique discussion identifier
    async fn id(&self) -> i32 {
        self.row.id
    }

    /// Client-facing discussion number (alias for id)
    async fn number(&self) -> i32 {
        self.row.id
    }

    /// Discussion title
    async fn title(&self) -> &str {
        &self.row.title
    }

    /// Rendered HTML body
    #[graphql(name = "bodyHTML")]
    async fn body_html(&self) -> &str {
        &self.row.body_html
    }

    /// Plain-text body
    async fn body_text(&self) -> &str {
        &self.row.body_text
    }

    /// Optional cover image URL
    async fn cover(&self) -> Option<&str> {
        self.row.cover.as_deref()
    }

    /// Creation timestamp (RFC 3339)
    async fn created_at(&self) -> DateTime<Utc> {
        self.row.created_at
    }

    /// The user who created the discussion
    ///
    /// Uses the pre-populated relation when present, otherwise looks the
    /// author up by foreign key. Null when the referenced row is missing.
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        if let Some(author) = &self.author {
            return Ok(Some(author.clone().into()));
        }

        let users = ctx.data::<UserRepository>()?;
        Ok(users.find_by_id(self.row.author_id).await?.map(User::from))
    }

    /// Live count of comments on this discussion
    async fn comments_count(&self, ctx: &Context<'_>) -> Result<i64> {
        let comments = ctx.data::<CommentRepository>()?;
        Ok(comments.count_for_discussion(self.row.id).await?)
    }

    /// This discussion's comments, paginated, oldest first
    async fn comments(
        &self,
        ctx: &Context<'_>,
        first: Option<i32>,
        after: Option<String>,
    ) -> Result<Connection<Comment>> {
        let comments = ctx.data::<CommentRepository>()?;

        let args = resolve_page_args(first, after.as_deref())?;
        let rows = comments
            .page_for_discussion(self.row.id, args.limit + 1, args.after)
            .await?;
        let total_count = comments.count_for_discussion(self.row.id).await?;

        let page = trim_page(rows, args.limit);
        let end_cursor = page.nodes.last().map(|c| c.id.to_string());
        let nodes = page.nodes.into_iter().map(Comment::new).collect();

        Ok(Connection::new(
            nodes,
            end_cursor,
            page.has_next_page,
            total_count,
        ))
    }
}
