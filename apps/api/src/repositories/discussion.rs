//! Discussion repository: creation, lookup and search pagination

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::error::{ApiError, ApiResult};
use crate::models::Discussion;

use super::utils::{escape_like, DISCUSSION_COLUMNS};

/// Repository for discussion database operations
#[derive(Clone)]
pub struct DiscussionRepository {
    pool: PgPool,
}

impl DiscussionRepository {
    /// Create a new DiscussionRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new discussion owned by the given author
    pub async fn create(
        &self,
        title: &str,
        body_html: &str,
        body_text: &str,
        cover: Option<&str>,
        author_id: i32,
    ) -> ApiResult<Discussion> {
        let discussion = sqlx::query_as::<_, Discussion>(&format!(
            r#"
            INSERT INTO discussions (title, body_html, body_text, cover, author_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {DISCUSSION_COLUMNS}
            "#
        ))
        .bind(title)
        .bind(body_html)
        .bind(body_text)
        .bind(cover)
        .bind(author_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(discussion)
    }

    /// Find a discussion by its id (the client-facing "number")
    pub async fn find_by_id(&self, id: i32) -> ApiResult<Option<Discussion>> {
        let discussion = sqlx::query_as::<_, Discussion>(&format!(
            "SELECT {DISCUSSION_COLUMNS} FROM discussions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(discussion)
    }

    /// Fetch one page of discussions matching a substring query.
    ///
    /// Matches `title` or `body_text`, ordered by creation time descending
    /// (ties broken by id descending, so the ordering is total). The page
    /// starts strictly after the `after` cursor row when one is given, and
    /// up to `limit` rows are requested — callers pass `limit + 1` to
    /// detect a following page.
    pub async fn search_page(
        &self,
        query: &str,
        limit: i64,
        after: Option<i32>,
    ) -> ApiResult<Vec<Discussion>> {
        let pattern = format!("%{}%", escape_like(query));

        let rows = match after {
            Some(cursor) => {
                let anchor = self.cursor_anchor(cursor).await?;
                sqlx::query_as::<_, Discussion>(&format!(
                    r#"
                    SELECT {DISCUSSION_COLUMNS}
                    FROM discussions
                    WHERE (title LIKE $1 OR body_text LIKE $1)
                      AND (created_at, id) < ($2, $3)
                    ORDER BY created_at DESC, id DESC
                    LIMIT $4
                    "#
                ))
                .bind(&pattern)
                .bind(anchor)
                .bind(cursor)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Discussion>(&format!(
                    r#"
                    SELECT {DISCUSSION_COLUMNS}
                    FROM discussions
                    WHERE (title LIKE $1 OR body_text LIKE $1)
                    ORDER BY created_at DESC, id DESC
                    LIMIT $2
                    "#
                ))
                .bind(&pattern)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows)
    }

    /// Count all discussions matching a substring query, independent of
    /// any pagination window
    pub async fn search_count(&self, query: &str) -> ApiResult<i64> {
        let pattern = format!("%{}%", escape_like(query));

        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM discussions WHERE (title LIKE $1 OR body_text LIKE $1)",
        )
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Resolve the creation timestamp of a cursor row.
    ///
    /// Cursors handed out as `endCursor` always reference existing rows;
    /// anything else is a caller error.
    async fn cursor_anchor(&self, cursor: i32) -> ApiResult<DateTime<Utc>> {
        sqlx::query_scalar::<_, DateTime<Utc>>(
            "SELECT created_at FROM discussions WHERE id = $1",
        )
        .bind(cursor)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| ApiError::Validation(format!("unknown cursor: {cursor}")))
    }
}
