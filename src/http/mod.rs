//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, middleware stack, home route)
//!     → request.rs (assign / propagate x-request-id)
//!     → routing (posts table) → upstream forwarder
//!     → response.rs (relay reply, map errors to 500)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{request_id_layers, UuidRequestId, X_REQUEST_ID};
pub use response::GatewayError;
pub use server::{AppState, GatewayServer};
