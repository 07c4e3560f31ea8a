//! API Middleware
//!
//! Fills the request path into error bodies. Handlers produce the
//! `{timestamp, path, status, message}` error shape with the path left
//! empty; this middleware re-renders the body with the path of the failed
//! request, matching the contract the upstream services use.

use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::{ErrorMessage, HttpErrorInfo};

pub async fn error_info_middleware(request: Request<Body>, next: Next) -> Response {
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;

    if let Some(ErrorMessage(message)) = response.extensions_mut().remove::<ErrorMessage>() {
        let status = response.status();
        let body = HttpErrorInfo::new(status, path, message);
        return (status, Json(body)).into_response();
    }

    response
}

/// Fallback for unmatched routes, so 404s outside the competition resource
/// also carry the shared error body.
pub async fn not_found_handler(request: Request<Body>) -> Response {
    let path = request.uri().path().to_string();
    let body = HttpErrorInfo::new(StatusCode::NOT_FOUND, path, "Resource not found");
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}
