//! Request logging middleware

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::utils::constants::UPLOADS_URL_PREFIX;

/// Log method, uri, status and latency of every request.
///
/// Static upload hits are logged at debug level, server errors at warn.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let latency = start.elapsed();
    let status = response.status();

    if status.is_server_error() {
        warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            latency_ms = %latency.as_millis(),
            "Request failed"
        );
    } else if uri.path().starts_with(UPLOADS_URL_PREFIX) {
        debug!(
            uri = %uri,
            status = %status.as_u16(),
            latency_ms = %latency.as_millis(),
            "Upload served"
        );
    } else {
        info!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            latency_ms = %latency.as_millis(),
            "Request completed"
        );
    }

    response
}
