//! Response shaping for forwarded calls.
//!
//! # Responsibilities
//! - Relay upstream status and body unchanged
//! - Force `Content-Type: application/json` on relayed bodies
//! - Map every forwarding failure to `500 Internal Server Error`
//!
//! # Design Decisions
//! - One error taxonomy: client, upstream and internal failures all become 500
//! - The error body is the error's own text
//! - Failures are not logged here; the trace layer records the 500

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::upstream::UpstreamReply;

/// Content type stamped on every relayed upstream body.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Failure while talking to upstream.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Building or sending the outbound request failed.
    #[error("{0}")]
    Request(#[source] reqwest::Error),

    /// Reading the upstream response body failed.
    #[error("{0}")]
    Body(#[source] reqwest::Error),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

impl IntoResponse for UpstreamReply {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)],
            self.body,
        )
            .into_response()
    }
}
