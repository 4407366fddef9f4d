//! Static file serving module
//!
//! Maps URL paths onto the public site tree and serves the bytes with a
//! MIME type from the extension. The `/api` namespace is carved out here:
//! an unknown API path must 404 as plain text, not fall into the site tree.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime};
use crate::logger;

const INDEX_FILE: &str = "index.html";

/// Where a URL path leads
#[derive(Debug, PartialEq, Eq)]
pub enum ResolvedPath {
    /// Reserved API prefix, never served from disk
    ApiPrefix,
    /// Contains a parent-directory token; rejected outright
    Traversal,
    /// A candidate file under the public root
    File(PathBuf),
}

/// Resolve a URL path against the public root.
///
/// Any `..` in the path is rejected, whether or not it would actually
/// escape the root. Leading slashes are stripped entirely so the join can
/// never be hijacked by an absolute path.
pub fn resolve(public_dir: &str, url_path: &str) -> ResolvedPath {
    let target = url_path.trim_start_matches('/');

    if target.starts_with("api/") {
        return ResolvedPath::ApiPrefix;
    }

    let target = if target.is_empty() { INDEX_FILE } else { target };

    if target.contains("..") {
        return ResolvedPath::Traversal;
    }

    ResolvedPath::File(Path::new(public_dir).join(target))
}

/// Serve a request from the public site tree
pub async fn serve(ctx: &RequestContext<'_>, public_dir: &str) -> Response<Full<Bytes>> {
    match resolve(public_dir, ctx.path) {
        ResolvedPath::ApiPrefix => http::build_404_response(),
        ResolvedPath::Traversal => {
            logger::log_warning(&format!("Path traversal attempt blocked: {}", ctx.path));
            http::build_400_response()
        }
        ResolvedPath::File(file_path) => match load(&file_path).await {
            Some(content) => {
                let etag = cache::generate_etag(&content);
                if cache::etag_matches(ctx.if_none_match.as_deref(), &etag) {
                    return http::build_304_response(&etag);
                }

                let content_type =
                    mime::content_type(file_path.extension().and_then(|e| e.to_str()));
                http::build_file_response(
                    Bytes::from(content),
                    content_type,
                    &etag,
                    ctx.is_head,
                )
            }
            None => http::build_404_response(),
        },
    }
}

/// Read a file from the site tree.
///
/// An empty file reads the same as a missing one: both are a 404.
async fn load(path: &Path) -> Option<Vec<u8>> {
    let content = fs::read(path).await.ok()?;
    if content.is_empty() {
        return None;
    }
    Some(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: &str = "./public";

    #[test]
    fn test_api_prefix_is_reserved() {
        assert_eq!(resolve(ROOT, "/api/anything"), ResolvedPath::ApiPrefix);
        assert_eq!(resolve(ROOT, "/api/news/extra"), ResolvedPath::ApiPrefix);
        // "/api" without a trailing segment is an ordinary file lookup
        assert_eq!(
            resolve(ROOT, "/api"),
            ResolvedPath::File(PathBuf::from("./public/api"))
        );
    }

    #[test]
    fn test_root_defaults_to_index() {
        assert_eq!(
            resolve(ROOT, "/"),
            ResolvedPath::File(PathBuf::from("./public/index.html"))
        );
    }

    #[test]
    fn test_plain_paths_join_under_root() {
        assert_eq!(
            resolve(ROOT, "/css/site.css"),
            ResolvedPath::File(PathBuf::from("./public/css/site.css"))
        );
    }

    #[test]
    fn test_any_dotdot_is_rejected() {
        assert_eq!(resolve(ROOT, "/../etc/passwd"), ResolvedPath::Traversal);
        assert_eq!(resolve(ROOT, "/a/../b.html"), ResolvedPath::Traversal);
        // Rejected even when it would not escape, and even mid-filename
        assert_eq!(resolve(ROOT, "/pics/..png"), ResolvedPath::Traversal);
    }

    #[test]
    fn test_leading_slashes_cannot_escape() {
        assert_eq!(
            resolve(ROOT, "//etc/passwd"),
            ResolvedPath::File(PathBuf::from("./public/etc/passwd"))
        );
    }
}
