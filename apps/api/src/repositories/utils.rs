//! Shared utility functions for repositories

/// Escape special characters in LIKE patterns to prevent pattern injection.
///
/// LIKE uses `%` for any sequence and `_` for single character wildcards.
/// If user input contains these characters, they must be escaped to match
/// literally.
///
/// # Example
/// ```
/// use quorum_api::repositories::utils::escape_like;
///
/// let input = "100%";
/// let escaped = escape_like(input);
/// assert_eq!(escaped, r"100\%");
/// ```
pub fn escape_like(pattern: &str) -> String {
    pattern
        .replace('\\', r"\\")
        .replace('%', r"\%")
        .replace('_', r"\_")
}

// ============================================================================
// SQL Column Constants
//
// These constants define the SELECT column lists for each entity type,
// reducing duplication and ensuring consistency across queries.
// ============================================================================

/// SQL columns for user queries
pub const USER_COLUMNS: &str = "id, email, name, avatar, password_hash, created_at";

/// SQL columns for discussion queries
pub const DISCUSSION_COLUMNS: &str =
    "id, title, body_html, body_text, cover, author_id, created_at";

/// SQL columns for comment queries
pub const COMMENT_COLUMNS: &str = "id, body_html, discussion_id, author_id, created_at";
