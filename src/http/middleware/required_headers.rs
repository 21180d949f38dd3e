//! Header gate middleware.
//! Stops banking requests that lack the identifying headers.

use axum::{body::Body, http::Request, middleware::Next, response::IntoResponse, response::Response};

use crate::http::request::RequestIdExt;
use crate::http::response::ApiError;
use crate::observability::metrics;
use crate::security::validate_required_headers;

/// Runs before any extractor or handler on the banking routes.
pub async fn required_headers_middleware(request: Request<Body>, next: Next) -> Response {
    let validation = validate_required_headers(request.headers());
    if validation.is_valid() {
        return next.run(request).await;
    }

    tracing::warn!(
        request_id = %request.headers().request_id(),
        path = %request.uri().path(),
        missing = ?validation.missing(),
        "Rejected request with missing headers"
    );
    metrics::record_gate_rejection(validation.missing().len());
    ApiError::MissingHeaders(validation.missing().to_vec()).into_response()
}
