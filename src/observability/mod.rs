//! Observability subsystem.
//!
//! Structured logging through `tracing`. Each request gets a span with
//! method, path and request id from the HTTP layer; see [`logging`] for
//! subscriber setup.

pub mod logging;

pub use logging::init_logging;
