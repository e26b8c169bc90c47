//! Request ID Middleware
//!
//! Every request carries an `x-request-id`: the client's own if it sent one,
//! otherwise a fresh UUID set by `SetRequestIdLayer`. The ID is recorded on
//! the request span and echoed in the response headers.

use axum::body::Body;
use axum::http::{header::HeaderName, Request};
use tracing::Span;

/// Header name for request ID
pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Read the request ID header, if it holds visible ASCII
#[must_use]
pub fn request_id(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
}

/// Span factory for `TraceLayer`, tagging each request with its ID
pub fn make_request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        request_id = %request_id(request).unwrap_or("-"),
        method = %request.method(),
        uri = %request.uri(),
    )
}
