//! The `/posts` resource.

use axum::{
    body::Bytes,
    extract::{Path, Request, State},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Extension, Router,
};

use crate::http::response::GatewayError;
use crate::http::server::AppState;
use crate::upstream::UpstreamReply;

/// The `{id}` path segment of an item route, attached to the request by
/// [`post_ctx`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostId(pub String);

/// Build the posts routes. State is supplied by the caller.
pub fn posts_router() -> Router<AppState> {
    let item = Router::new()
        .route(
            "/posts/{id}",
            get(get_post).put(update_post).delete(delete_post),
        )
        .route_layer(middleware::from_fn(post_ctx));

    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .merge(item)
}

/// Copies the `{id}` path parameter into the request extensions.
///
/// The segment is stored as it appeared on the wire, percent-encoding
/// included, so `/posts/a%2Fb` is forwarded as `/posts/a%2Fb` and not as a
/// two-segment path.
pub async fn post_ctx(Path(decoded): Path<String>, mut request: Request, next: Next) -> Response {
    let id = raw_segment(request.uri().path())
        .map(str::to_string)
        .unwrap_or(decoded);
    request.extensions_mut().insert(PostId(id));
    next.run(request).await
}

/// Last non-empty segment of `path`, undecoded.
fn raw_segment(path: &str) -> Option<&str> {
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
}

/// GET /posts - read a list of posts.
async fn list_posts(State(state): State<AppState>) -> Result<UpstreamReply, GatewayError> {
    state.forwarder.list().await
}

/// POST /posts - create a new post.
async fn create_post(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<UpstreamReply, GatewayError> {
    state.forwarder.create(body).await
}

async fn get_post(
    State(state): State<AppState>,
    Extension(PostId(id)): Extension<PostId>,
) -> Result<UpstreamReply, GatewayError> {
    state.forwarder.get(&id).await
}

async fn update_post(
    State(state): State<AppState>,
    Extension(PostId(id)): Extension<PostId>,
    body: Bytes,
) -> Result<UpstreamReply, GatewayError> {
    state.forwarder.update(&id, body).await
}

async fn delete_post(
    State(state): State<AppState>,
    Extension(PostId(id)): Extension<PostId>,
) -> Result<UpstreamReply, GatewayError> {
    state.forwarder.delete(&id).await
}
