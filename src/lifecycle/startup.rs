//! Startup orchestration.
//!
//! Config first, then signal handlers and the listener, then traffic. Any
//! startup error is fatal.

use tokio::net::TcpListener;

use crate::config::GatewayConfig;
use crate::http::GatewayServer;
use crate::lifecycle::{signals::Signals, Shutdown};

/// Bind the configured port and serve until SIGINT/SIGTERM.
pub async fn serve_until_signal(config: GatewayConfig) -> Result<(), std::io::Error> {
    let signals = Signals::register()?;

    let port = config.listener.port;
    let listener = TcpListener::bind(config.listener.bind_address()).await?;

    tracing::info!(port, "Starting up on port");

    let shutdown = Shutdown::new();
    let server = GatewayServer::new(config);
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        signals.recv().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await
}
