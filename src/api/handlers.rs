//! News API handlers module
//!
//! The three read-only endpoints over the flat-file stores. Each request
//! loads its store fresh; nothing is cached between requests.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use serde_json::Value;

use super::query::QueryParams;
use super::response;
use crate::config::AppState;
use crate::handler::router::RequestContext;
use crate::store;

const DEFAULT_LIMIT: i64 = 12;

/// `GET /api/news?offset=0&limit=12` — a page of the article sequence
pub async fn news(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    let db = store::load(&state.config.stores.news).await;
    let Some(articles) = store::articles(&db) else {
        return response::store_missing_articles();
    };

    let params = QueryParams::parse(ctx.query);
    let Ok(offset) = params.int("offset") else {
        return response::invalid_param("offset");
    };
    let Ok(limit) = params.int("limit") else {
        return response::invalid_param("limit");
    };
    let offset = usize::try_from(offset.unwrap_or(0).max(0)).unwrap_or(0);
    let limit = usize::try_from(limit.unwrap_or(DEFAULT_LIMIT).max(1)).unwrap_or(1);

    response::json_ok(&paginate(articles, offset, limit), ctx.is_head)
}

/// `GET /api/article?id=...` — one full article by id
pub async fn article(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    let params = QueryParams::parse(ctx.query);
    let Some(id) = params.get("id") else {
        return response::missing_id();
    };

    let db = store::load(&state.config.stores.news).await;
    let Some(articles) = store::articles(&db) else {
        return response::store_missing_articles();
    };

    match find_by_id(articles, id) {
        Some(article) => response::json_ok(article, ctx.is_head),
        None => response::article_not_found(),
    }
}

/// `GET /api/ads` — the ads store, whatever its shape
pub async fn ads(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    let ads = store::load(&state.config.stores.ads).await;
    response::json_ok(&ads, ctx.is_head)
}

/// The slice `[offset, offset + limit)` of the article sequence, truncated
/// at the end; an offset past the end is an empty page, not an error
fn paginate(articles: &[Value], offset: usize, limit: usize) -> &[Value] {
    let tail = articles.get(offset..).unwrap_or(&[]);
    &tail[..limit.min(tail.len())]
}

/// First article whose `id` field is a string equal to `id`. Duplicate ids
/// are possible in the store; the first occurrence wins.
fn find_by_id<'a>(articles: &'a [Value], id: &str) -> Option<&'a Value> {
    articles
        .iter()
        .find(|article| article.get("id").and_then(Value::as_str) == Some(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn three_articles() -> Vec<Value> {
        vec![json!({"id": "a"}), json!({"id": "b"}), json!({"id": "c"})]
    }

    #[test]
    fn test_paginate_middle() {
        let articles = three_articles();
        let page = paginate(&articles, 1, 1);
        assert_eq!(page, &[json!({"id": "b"})]);
    }

    #[test]
    fn test_paginate_truncates_at_end() {
        let articles = three_articles();
        assert_eq!(paginate(&articles, 1, 10).len(), 2);
        assert_eq!(paginate(&articles, 0, 3).len(), 3);
    }

    #[test]
    fn test_paginate_keeps_store_order() {
        let articles = three_articles();
        let page = paginate(&articles, 0, 2);
        assert_eq!(page[0]["id"], "a");
        assert_eq!(page[1]["id"], "b");
    }

    #[test]
    fn test_paginate_offset_past_end_is_empty() {
        let articles = three_articles();
        assert!(paginate(&articles, 3, 5).is_empty());
        assert!(paginate(&articles, 100, 1).is_empty());
    }

    #[test]
    fn test_find_by_id() {
        let articles = three_articles();
        assert_eq!(find_by_id(&articles, "c"), Some(&json!({"id": "c"})));
        assert_eq!(find_by_id(&articles, "z"), None);
    }

    #[test]
    fn test_find_by_id_first_duplicate_wins() {
        let articles = vec![
            json!({"id": "dup", "rev": 1}),
            json!({"id": "dup", "rev": 2}),
        ];
        assert_eq!(find_by_id(&articles, "dup").unwrap()["rev"], 1);
    }

    #[test]
    fn test_find_by_id_skips_non_string_ids() {
        let articles = vec![json!({"id": 7}), json!({"id": "7"})];
        assert_eq!(find_by_id(&articles, "7").unwrap()["id"], "7");
    }
}
