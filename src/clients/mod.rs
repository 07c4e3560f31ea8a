//! Upstream service clients
//!
//! One client per remote entity service. Clients are stateless between calls
//! and safe to share across request tasks; every call runs on the shared
//! `reqwest::Client`, which carries the bounded per-call timeout.
//!
//! HTTP failures are classified into the domain taxonomy exactly once, here:
//! a 404 becomes `NotFound`, a 422 becomes `InvalidInput`, and any other
//! non-2xx status is surfaced as `Unexpected` with the downstream's own
//! status and message. Layers above pass these through unchanged.

pub mod facility;
pub mod sponsor;
pub mod team;

pub use facility::{FacilityClient, HttpFacilityClient};
pub use sponsor::{HttpSponsorClient, SponsorClient};
pub use team::{HttpTeamClient, TeamClient};

use crate::domain::DomainError;

/// Classify a non-2xx upstream response.
pub(crate) async fn domain_error_from_response(response: reqwest::Response) -> DomainError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = error_message_from_body(&body);

    match status.as_u16() {
        404 => DomainError::NotFound(message),
        422 => DomainError::InvalidInput(message),
        code => {
            tracing::warn!("Unexpected HTTP error: {}, body: {}", status, body);
            DomainError::unexpected(Some(code), message)
        }
    }
}

/// Classify a transport-level failure (timeout, refused connection, bad body).
pub(crate) fn domain_error_from_transport(err: reqwest::Error) -> DomainError {
    DomainError::unexpected(err.status().map(|s| s.as_u16()), err.to_string())
}

/// Extract the `message` field from a structured error body
/// (`{timestamp, path, status, message}`); if the body is absent or
/// unparseable, fall back to the parse error's own message.
pub(crate) fn error_message_from_body(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| body.to_string()),
        Err(err) => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_extracted_from_structured_body() {
        let body = r#"{
            "timestamp": "2025-06-01T12:00:00Z",
            "path": "/api/v1/teams/t1",
            "status": 404,
            "message": "Unknown teamId: t1"
        }"#;
        assert_eq!(error_message_from_body(body), "Unknown teamId: t1");
    }

    #[test]
    fn test_unparseable_body_falls_back_to_parse_error() {
        let message = error_message_from_body("<html>502 Bad Gateway</html>");
        assert!(!message.is_empty());
        assert!(!message.contains("Bad Gateway"));
    }

    #[test]
    fn test_structured_body_without_message_keeps_raw_body() {
        let body = r#"{"status": 500}"#;
        assert_eq!(error_message_from_body(body), body);
    }
}
