//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the axum Router with the home route and the posts resource
//! - Wire up middleware (request id, request logging)
//! - Bind server to listener and shut down gracefully

use axum::{
    extract::{DefaultBodyLimit, Request},
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::http::request::{request_id_layers, request_id_of};
use crate::lifecycle::ShutdownListener;
use crate::routing::posts_router;
use crate::upstream::Forwarder;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub forwarder: Forwarder,
}

impl AppState {
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            forwarder: Forwarder::new(&config.upstream),
        }
    }
}

/// HTTP server for the posts gateway.
pub struct GatewayServer {
    app: NormalizePath<Router>,
    config: GatewayConfig,
}

impl GatewayServer {
    /// Create a new server with the given configuration.
    pub fn new(config: GatewayConfig) -> Self {
        let state = AppState::new(&config);
        let app = Self::build_app(state);
        Self { app, config }
    }

    /// Build the axum router with all middleware layers.
    ///
    /// Trailing slashes are trimmed before routing, so `/posts/` and
    /// `/posts/7/` reach the same handlers as `/posts` and `/posts/7`.
    fn build_app(state: AppState) -> NormalizePath<Router> {
        let (set_request_id, propagate_request_id) = request_id_layers();

        let router = Router::new()
            .route("/", get(home))
            .merge(posts_router())
            .with_state(state)
            .layer(DefaultBodyLimit::disable())
            .layer(
                ServiceBuilder::new()
                    .layer(set_request_id)
                    .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
                        tracing::info_span!(
                            "request",
                            method = %request.method(),
                            path = %request.uri().path(),
                            request_id = %request_id_of(request),
                        )
                    }))
                    .layer(propagate_request_id),
            );

        NormalizePathLayer::trim_trailing_slash().layer(router)
    }

    /// A clone of the fully layered service, for in-process use.
    pub fn router(&self) -> NormalizePath<Router> {
        self.app.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Serve on `listener` until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownListener,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.base_url,
            "HTTP server starting"
        );

        let app = axum::ServiceExt::<Request>::into_make_service(self.app);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown.wait())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// GET / - plain-text greeting, independent of upstream.
async fn home() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain")], "Hello world")
}
