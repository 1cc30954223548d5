//! Discussion model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Discussion record from the discussions table
///
/// The id doubles as the client-facing "number" and as the pagination
/// cursor for search results.
#[derive(Debug, Clone, FromRow)]
pub struct Discussion {
    /// Unique discussion identifier
    pub id: i32,

    /// Discussion title
    pub title: String,

    /// Rendered HTML body
    pub body_html: String,

    /// Plain-text body, used for substring search
    pub body_text: String,

    /// Optional cover image URL
    pub cover: Option<String>,

    /// User who created the discussion
    pub author_id: i32,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}
