//! Paginated connection envelope types

use async_graphql::{OutputType, SimpleObject};

/// Cursor position info for a connection page
#[derive(Debug, Clone, SimpleObject)]
pub struct PageInfo {
    /// Cursor of the last node, null when the page is empty
    pub end_cursor: Option<String>,

    /// Whether more rows exist beyond this page
    pub has_next_page: bool,
}

/// Paginated result envelope
#[derive(SimpleObject)]
#[graphql(concrete(name = "DiscussionConnection", params(crate::graphql::types::Discussion)))]
#[graphql(concrete(name = "CommentConnection", params(crate::graphql::types::Comment)))]
pub struct Connection<T: OutputType> {
    /// The page of nodes, in query order
    pub nodes: Vec<T>,

    /// Pagination position info
    pub page_info: PageInfo,

    /// Total rows matching the filter, independent of the page window
    pub total_count: i64,
}

impl<T: OutputType> Connection<T> {
    /// Assemble a connection from a trimmed page
    pub fn new(
        nodes: Vec<T>,
        end_cursor: Option<String>,
        has_next_page: bool,
        total_count: i64,
    ) -> Self {
        Self {
            nodes,
            page_info: PageInfo {
                end_cursor,
                has_next_page,
            },
            total_count,
        }
    }
}
