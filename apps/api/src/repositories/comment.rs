//! Comment repository: creation, per-discussion pagination and counts

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::error::{ApiError, ApiResult};
use crate::models::Comment;

use super::utils::COMMENT_COLUMNS;

/// Repository for comment database operations
#[derive(Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    /// Create a new CommentRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new comment against an existing discussion.
    ///
    /// A missing discussion trips the foreign-key constraint and is
    /// surfaced as `ApiError::NotFound`.
    pub async fn create(
        &self,
        discussion_id: i32,
        author_id: i32,
        body_html: &str,
    ) -> ApiResult<Comment> {
        sqlx::query_as::<_, Comment>(&format!(
            r#"
            INSERT INTO comments (body_html, discussion_id, author_id)
            VALUES ($1, $2, $3)
            RETURNING {COMMENT_COLUMNS}
            "#
        ))
        .bind(body_html)
        .bind(discussion_id)
        .bind(author_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                ApiError::NotFound {
                    resource_type: "discussion",
                    id: discussion_id.to_string(),
                }
            }
            _ => ApiError::Database(e),
        })
    }

    /// Fetch one page of a discussion's comments.
    ///
    /// Ordered by creation time ascending (ties broken by id ascending).
    /// The page starts strictly after the `after` cursor row when one is
    /// given; callers pass `limit + 1` to detect a following page.
    pub async fn page_for_discussion(
        &self,
        discussion_id: i32,
        limit: i64,
        after: Option<i32>,
    ) -> ApiResult<Vec<Comment>> {
        let rows = match after {
            Some(cursor) => {
                let anchor = self.cursor_anchor(cursor).await?;
                sqlx::query_as::<_, Comment>(&format!(
                    r#"
                    SELECT {COMMENT_COLUMNS}
                    FROM comments
                    WHERE discussion_id = $1
                      AND (created_at, id) > ($2, $3)
                    ORDER BY created_at ASC, id ASC
                    LIMIT $4
                    "#
                ))
                .bind(discussion_id)
                .bind(anchor)
                .bind(cursor)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Comment>(&format!(
                    r#"
                    SELECT {COMMENT_COLUMNS}
                    FROM comments
                    WHERE discussion_id = $1
                    ORDER BY created_at ASC, id ASC
                    LIMIT $2
                    "#
                ))
                .bind(discussion_id)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows)
    }

    /// Count all comments for a discussion
    pub async fn count_for_discussion(&self, discussion_id: i32) -> ApiResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM comments WHERE discussion_id = $1",
        )
        .bind(discussion_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Resolve the creation timestamp of a cursor row
    async fn cursor_anchor(&self, cursor: i32) -> ApiResult<DateTime<Utc>> {
        sqlx::query_scalar::<_, DateTime<Utc>>("SELECT created_at FROM comments WHERE id = $1")
            .bind(cursor)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| ApiError::Validation(format!("unknown cursor: {cursor}")))
    }
}
