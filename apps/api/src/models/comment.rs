//! Comment model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Comment record from the comments table
#[derive(Debug, Clone, FromRow)]
pub struct Comment {
    /// Unique comment identifier
    pub id: i32,

    /// Rendered HTML body
    pub body_html: String,

    /// Discussion this comment belongs to
    pub discussion_id: i32,

    /// User who wrote the comment
    pub author_id: i32,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}
