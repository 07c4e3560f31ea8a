//! Domain Error Types
//!
//! The failure taxonomy shared by the clients and the business layer.
//! Failures from an upstream service are translated into these variants once,
//! at the client boundary, and passed through unchanged by every layer above.

use thiserror::Error;

/// Classified failures of competition operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Referenced aggregate or upstream entity absent
    #[error("{0}")]
    NotFound(String),

    /// Malformed id, unresolvable foreign reference, or ownership violation
    #[error("{0}")]
    InvalidInput(String),

    /// Competition date beyond the one-year-ahead limit. The message is fixed
    /// and user-facing.
    #[error("The competition date must be within one year of today.")]
    DateTooFar,

    /// Anything a downstream returned that is not a 404/422, surfaced with
    /// its original status and message rather than reinterpreted
    #[error("{message}")]
    Unexpected {
        status: Option<u16>,
        message: String,
    },
}

impl DomainError {
    pub fn unexpected(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Unexpected {
            status,
            message: message.into(),
        }
    }

    /// Check if this is a caller error (no retry will help)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::InvalidInput(_) | Self::DateTooFar
        )
    }
}
