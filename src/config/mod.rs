//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (PORT, UPSTREAM_URL)
//!     → loader.rs (read & parse)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → handed to GatewayServer at startup
//! ```
//!
//! # Design Decisions
//! - No config file; the environment is the only source
//! - All fields have defaults so an empty environment is a valid config
//! - Validation separates parsing from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_from_env, ConfigError};
pub use schema::{GatewayConfig, ListenerConfig, UpstreamConfig};
