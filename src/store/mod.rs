//! Flat-file JSON stores
//!
//! The news and ads stores are plain JSON documents on disk, owned by an
//! external publishing process. They are read fresh on every request and
//! never written by the server.
//!
//! Loader contract: a store that cannot be read or parsed acts as an empty
//! JSON object. Callers see no error; the failure is logged so operators can
//! tell a broken store apart from a legitimately empty one.

use serde_json::{Map, Value};
use tokio::fs;

use crate::logger;

/// Load a store from disk, falling back to `{}` on any failure
pub async fn load(path: &str) -> Value {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            logger::log_warning(&format!("Store '{path}' unreadable, treating as empty: {e}"));
            return Value::Object(Map::new());
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(value) => value,
        Err(e) => {
            logger::log_warning(&format!("Store '{path}' is not valid JSON, treating as empty: {e}"));
            Value::Object(Map::new())
        }
    }
}

/// The `articles` sequence of the news store, if present and well-typed.
///
/// `None` means the store is structurally invalid for the news endpoints,
/// which surface it as a 500. Absence is not repaired.
pub fn articles(store: &Value) -> Option<&Vec<Value>> {
    store.get("articles").and_then(Value::as_array)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn temp_store(name: &str, content: &[u8]) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("newsroom-{}-{name}", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content).unwrap();
        path
    }

    #[tokio::test]
    async fn test_load_valid_store() {
        let path = temp_store("valid.json", br#"{"articles":[{"id":"a1"}]}"#);
        let store = load(path.to_str().unwrap()).await;
        assert_eq!(store["articles"][0]["id"], "a1");
        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_missing_store_is_empty_object() {
        let store = load("/nonexistent/newsroom/news.json").await;
        assert_eq!(store, json!({}));
    }

    #[tokio::test]
    async fn test_malformed_store_is_empty_object() {
        let path = temp_store("broken.json", b"{ not json");
        let store = load(path.to_str().unwrap()).await;
        assert_eq!(store, json!({}));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_articles_accessor() {
        let store = json!({"articles": [{"id": "a"}, {"id": "b"}]});
        assert_eq!(articles(&store).map(Vec::len), Some(2));

        // Wrong type and absence are both invalid, not repairable
        assert!(articles(&json!({"articles": "nope"})).is_none());
        assert!(articles(&json!({})).is_none());
        assert!(articles(&json!([1, 2, 3])).is_none());
    }
}
