// API module entry
// Read-only JSON endpoints over the news and ads stores

mod handlers;
mod query;
mod response;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::config::AppState;
use crate::handler::router::RequestContext;

/// Dispatch an API request by exact path.
///
/// Returns `None` for any other path, including unknown `/api/...` paths:
/// those fall through to the static handler, whose own prefix check turns
/// them into a 404.
pub async fn dispatch(
    ctx: &RequestContext<'_>,
    state: &AppState,
) -> Option<Response<Full<Bytes>>> {
    match ctx.path {
        "/api/news" => Some(handlers::news(ctx, state).await),
        "/api/article" => Some(handlers::article(ctx, state).await),
        "/api/ads" => Some(handlers::ads(ctx, state).await),
        _ => None,
    }
}
