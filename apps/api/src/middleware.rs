//! Request middleware helpers
//!
//! Bearer-token extraction for the per-request GraphQL context. Token
//! verification failures never abort the request: the handler downgrades
//! them to anonymous access.

use axum::http::{header, HeaderMap};

/// Extract the bearer token from an Authorization header value.
///
/// Strips one optional case-insensitive `Bearer ` prefix; a raw token
/// without the prefix is also accepted. Returns None when nothing
/// non-empty remains.
pub fn strip_bearer(value: &str) -> Option<&str> {
    let value = value.trim();

    let token = match value.get(..7) {
        Some(prefix) if prefix.eq_ignore_ascii_case("bearer ") => &value[7..],
        _ => value,
    };

    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Extract the bearer token from request headers
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(strip_bearer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_strip_bearer_with_prefix() {
        assert_eq!(strip_bearer("Bearer abc.def.ghi"), Some("abc.def.ghi"));
    }

    #[test]
    fn test_strip_bearer_case_insensitive() {
        assert_eq!(strip_bearer("bearer tok"), Some("tok"));
        assert_eq!(strip_bearer("BEARER tok"), Some("tok"));
    }

    #[test]
    fn test_strip_bearer_without_prefix() {
        // A raw token is accepted as-is
        assert_eq!(strip_bearer("abc.def.ghi"), Some("abc.def.ghi"));
    }

    #[test]
    fn test_strip_bearer_empty() {
        assert_eq!(strip_bearer(""), None);
        assert_eq!(strip_bearer("   "), None);
        assert_eq!(strip_bearer("Bearer "), None);
        assert_eq!(strip_bearer("Bearer    "), None);
    }

    #[test]
    fn test_strip_bearer_trims_whitespace() {
        assert_eq!(strip_bearer("  Bearer tok  "), Some("tok"));
    }

    #[test]
    fn test_bearer_token_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer my-token"),
        );
        assert_eq!(bearer_token(&headers), Some("my-token"));
    }

    #[test]
    fn test_bearer_token_missing_header() {
        let headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);
    }
}
