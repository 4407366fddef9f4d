//! API response utility functions module
//!
//! JSON success responses plus the fixed error bodies of the news API. The
//! error strings are part of the public contract and consumed verbatim by
//! the frontend; they never vary with configuration.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::logger;

/// Build a 200 JSON response from any serializable value
pub fn json_ok<T: serde::Serialize>(body: &T, is_head: bool) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(json) => json,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize API response: {e}"));
            return fixed_json(500, r#"{"error":"internal error"}"#);
        }
    };

    let content_length = json.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(json)
    };

    Response::builder()
        .status(200)
        .header("Content-Type", "application/json; charset=utf-8")
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build API response: {e}"));
            Response::new(Full::new(Bytes::new()))
        })
}

/// 500: the news store lacks a usable `articles` array
pub fn store_missing_articles() -> Response<Full<Bytes>> {
    // Body is fixed by contract even though the store path is configurable
    fixed_json(500, r#"{"error":"news.json missing articles[]"}"#)
}

/// 400: `/api/article` called without an id
pub fn missing_id() -> Response<Full<Bytes>> {
    fixed_json(400, r#"{"error":"missing id"}"#)
}

/// 404: no article with the requested id
pub fn article_not_found() -> Response<Full<Bytes>> {
    fixed_json(404, r#"{"error":"article not found"}"#)
}

/// 400: a numeric parameter that did not parse
pub fn invalid_param(name: &str) -> Response<Full<Bytes>> {
    let body = format!(r#"{{"error":"invalid {name}"}}"#);
    Response::builder()
        .status(400)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Bad Request"))))
}

fn fixed_json(status: u16, body: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from(body))))
}
