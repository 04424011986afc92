//! Shutdown coordination between the signal task and the HTTP server.

use tokio::sync::broadcast;

/// Owned by whoever decides the gateway should stop (the signal task in
/// the binary, the test harness in tests).
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

/// Handed to [`GatewayServer::run`](crate::http::GatewayServer::run).
///
/// Resolves on [`Shutdown::trigger`] or when the owning [`Shutdown`] is
/// dropped; a gateway whose controller has gone away has nobody left to
/// stop it cleanly.
pub struct ShutdownListener {
    rx: broadcast::Receiver<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    pub fn subscribe(&self) -> ShutdownListener {
        ShutdownListener {
            rx: self.tx.subscribe(),
        }
    }

    /// Stop every subscribed server. No-op without subscribers.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownListener {
    /// Wait until the gateway should stop.
    pub async fn wait(mut self) {
        match self.rx.recv().await {
            Ok(()) | Err(broadcast::error::RecvError::Lagged(_)) => {
                tracing::info!("Shutdown signal received");
            }
            Err(broadcast::error::RecvError::Closed) => {
                tracing::info!("Shutdown controller dropped");
            }
        }
    }
}
