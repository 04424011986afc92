//! Upstream forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! posts handler (List/Create/Get/Update/Delete)
//!     → forwarder.rs (build outbound request to <base>/posts[/<id>])
//!     → shared reqwest::Client
//!     → UpstreamReply { status, body }
//!     → http/response.rs (content type forced to application/json)
//! ```
//!
//! # Design Decisions
//! - One client for the process; pooling is whatever reqwest does by default
//! - No retries, no timeouts, no circuit breaking
//! - Body fully read before answering so copy failures still surface as 500

pub mod forwarder;

pub use forwarder::{Forwarder, UpstreamReply};
