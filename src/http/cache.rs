//! Conditional request support
//!
//! `ETag` generation and `If-None-Match` evaluation for static files. API
//! responses never carry validators: the stores are re-read on every request.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Generate a quoted `ETag` from file content
pub fn generate_etag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    format!("\"{:x}\"", hasher.finish())
}

/// Evaluate a client `If-None-Match` header against the computed `ETag`.
///
/// Handles comma-separated candidate lists and the `*` wildcard. Returns true
/// when the client copy is current and a 304 should be sent.
pub fn etag_matches(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|candidates| {
        candidates
            .split(',')
            .any(|c| c.trim() == etag || c.trim() == "*")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_etag_is_quoted_and_stable() {
        let a = generate_etag(b"front page");
        let b = generate_etag(b"front page");
        assert_eq!(a, b);
        assert!(a.starts_with('"') && a.ends_with('"'));
    }

    #[test]
    fn test_etag_differs_per_content() {
        assert_ne!(generate_etag(b"news.json"), generate_etag(b"ads.json"));
    }

    #[test]
    fn test_if_none_match() {
        let etag = "\"beef\"";
        assert!(etag_matches(Some("\"beef\""), etag));
        assert!(etag_matches(Some("\"dead\", \"beef\""), etag));
        assert!(etag_matches(Some("*"), etag));
        assert!(!etag_matches(Some("\"dead\""), etag));
        assert!(!etag_matches(None, etag));
    }
}
