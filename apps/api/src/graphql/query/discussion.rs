//! Discussion queries for the Quorum GraphQL API
//!
//! - getDiscussion: fetch a single discussion by number
//! - search: substring search over titles and body text, paginated

use async_graphql::{Context, Object, Result};

use crate::graphql::pagination::{resolve_page_args, trim_page};
use crate::graphql::types::{Connection, Discussion};
use crate::repositories::{DiscussionRepository, UserRepository};

/// Discussion-related queries
#[derive(Default)]
pub struct DiscussionQuery;

#[Object]
impl DiscussionQuery {
    /// Fetch a discussion by its number, with the author populated.
    /// Returns null when no such discussion exists.
    async fn get_discussion(
        &self,
        ctx: &Context<'_>,
        number: i32,
    ) -> Result<Option<Discussion>> {
        let discussions = ctx.data::<DiscussionRepository>()?;
        let users = ctx.data::<UserRepository>()?;

        let Some(row) = discussions.find_by_id(number).await? else {
            return Ok(None);
        };

        let author = users.find_by_id(row.author_id).await?;
        Ok(Some(Discussion::with_author(row, author)))
    }

    /// Search discussions whose title or body text contains `query`,
    /// newest first
    async fn search(
        &self,
        ctx: &Context<'_>,
        query: String,
        first: Option<i32>,
        after: Option<String>,
    ) -> Result<Connection<Discussion>> {
        let discussions = ctx.data::<DiscussionRepository>()?;

        let args = resolve_page_args(first, after.as_deref())?;
        let rows = discussions
            .search_page(&query, args.limit + 1, args.after)
            .await?;
        let total_count = discussions.search_count(&query).await?;

        let page = trim_page(rows, args.limit);
        let end_cursor = page.nodes.last().map(|d| d.id.to_string());
        let nodes = page.nodes.into_iter().map(Discussion::new).collect();

        Ok(Connection::new(
            nodes,
            end_cursor,
            page.has_next_page,
            total_count,
        ))
    }
}
