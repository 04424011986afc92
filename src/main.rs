//! Posts gateway.
//!
//! ```text
//! Client ──▶ /posts, /posts/{id} ──▶ Forwarder ──▶ <upstream>/posts[/<id>]
//! Client ◀── status + body (application/json) ◀───────┘
//! ```
//!
//! `GET /` answers "Hello world" without touching upstream.
//!
//! Environment:
//! - `PORT`: listen port (default 8080)
//! - `UPSTREAM_URL`: upstream base URL (default `https://jsonplaceholder.typicode.com`)
//! - `RUST_LOG`: log filter

use posts_gateway::config;
use posts_gateway::lifecycle::startup;
use posts_gateway::observability;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    observability::init_logging();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "posts-gateway starting");

    let config = config::load_from_env()?;

    tracing::info!(
        bind_address = %config.listener.bind_address(),
        upstream = %config.upstream.base_url,
        "Configuration loaded"
    );

    startup::serve_until_signal(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
