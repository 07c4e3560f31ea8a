//! Error handling module
//!
//! Centralized error types and HTTP response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Classified failures from the clients and the business layer
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Server errors (5xx)
    #[error("Storage error: {0}")]
    Store(#[from] crate::store::StoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Error response body, shared with the upstream services' contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpErrorInfo {
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub path: String,
    pub status: u16,
    pub message: String,
}

impl HttpErrorInfo {
    pub fn new(status: StatusCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            path: path.into(),
            status: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Response extension consumed by the error-info middleware, which re-renders
/// the body with the request path filled in.
#[derive(Debug, Clone)]
pub struct ErrorMessage(pub String);

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Domain(DomainError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Domain(DomainError::InvalidInput(_)) | AppError::Domain(DomainError::DateTooFar) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            // The downstream's status passes through untouched when it gave one
            AppError::Domain(DomainError::Unexpected { status, .. }) => status
                .and_then(|code| StatusCode::from_u16(code).ok())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            AppError::Store(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!("Request failed with {}: {}", status, message);
        } else {
            tracing::debug!("Returning HTTP status: {} message: {}", status, message);
        }

        let body = HttpErrorInfo::new(status, "", &message);
        let mut response = (status, Json(body)).into_response();
        response.extensions_mut().insert(ErrorMessage(message));
        response
    }
}
