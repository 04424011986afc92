//! OS signal handling.
//!
//! SIGTERM is registered up front so a registration failure is a startup
//! error rather than a spurious shutdown. Ctrl-C is installed on first wait.

use std::io;

/// Termination signals the gateway reacts to.
pub struct Signals {
    #[cfg(unix)]
    sigterm: tokio::signal::unix::Signal,
}

impl Signals {
    /// Register the handlers.
    #[cfg(unix)]
    pub fn register() -> io::Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};

        Ok(Self {
            sigterm: signal(SignalKind::terminate())?,
        })
    }

    #[cfg(not(unix))]
    pub fn register() -> io::Result<Self> {
        Ok(Self {})
    }

    /// Resolve on SIGINT or SIGTERM.
    ///
    /// If the Ctrl-C handler cannot be installed, only SIGTERM is waited for.
    pub async fn recv(mut self) {
        let ctrl_c = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to install Ctrl-C handler");
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        tokio::select! {
            () = ctrl_c => {}
            _ = self.sigterm.recv() => {}
        }

        #[cfg(not(unix))]
        ctrl_c.await;
    }
}
