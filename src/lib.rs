//! Posts gateway library.
//!
//! A stateless HTTP gateway that exposes `/posts` and `/posts/{id}` and
//! forwards every call to a fixed upstream JSON API, relaying status and
//! body back with `Content-Type: application/json`.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod upstream;

pub use config::GatewayConfig;
pub use http::GatewayServer;
pub use lifecycle::Shutdown;
