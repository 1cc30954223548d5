//! Shared pagination utilities for GraphQL resolvers
//!
//! Both connection fields (`search` and `Discussion.comments`) follow the
//! same contract: `first` caps the page size (default 20), `after` is an
//! opaque cursor equal to the id of the row the page starts after, and
//! `hasNextPage` is detected by over-fetching one row beyond the limit.

use crate::error::{ApiError, ApiResult};

/// Default items per page when `first` is omitted
pub const DEFAULT_PAGE_SIZE: i32 = 20;

/// Maximum items per page
pub const MAX_PAGE_SIZE: i32 = 100;

/// Resolved pagination arguments ready to hand to a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageArgs {
    /// Requested page size, clamped to `[1, MAX_PAGE_SIZE]`
    pub limit: i64,
    /// Decoded cursor: the id of the row the page starts after
    pub after: Option<i32>,
}

/// Resolve raw `first` / `after` arguments into a [`PageArgs`]
///
/// # Errors
/// - `ApiError::Validation` when the cursor does not decode to an id
pub fn resolve_page_args(first: Option<i32>, after: Option<&str>) -> ApiResult<PageArgs> {
    let limit = first.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE) as i64;

    let after = match after {
        Some(raw) => Some(
            raw.trim()
                .parse::<i32>()
                .map_err(|_| ApiError::Validation(format!("invalid cursor: {raw}")))?,
        ),
        None => None,
    };

    Ok(PageArgs { limit, after })
}

/// One trimmed page of rows plus the next-page flag
#[derive(Debug)]
pub struct Page<T> {
    pub nodes: Vec<T>,
    pub has_next_page: bool,
}

/// Trim an over-fetched result set down to the page limit.
///
/// Repositories fetch `limit + 1` rows; a surplus row proves another page
/// exists and is dropped from the returned nodes.
pub fn trim_page<T>(mut rows: Vec<T>, limit: i64) -> Page<T> {
    let has_next_page = rows.len() as i64 > limit;
    if has_next_page {
        rows.truncate(limit as usize);
    }
    Page {
        nodes: rows,
        has_next_page,
    }
}
