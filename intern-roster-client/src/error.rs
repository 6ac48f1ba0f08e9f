//! Unified error type for roster API operations

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::FieldErrors;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Unified error type for all roster API operations.
///
/// [`Rejected`](Self::Rejected) is the expected failure of a write: the API
/// validated the draft and answered with per-field messages. Every other
/// variant is a transport or contract failure the caller may log and ignore.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, etc.).
    #[error("Network error: {detail}")]
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out (reqwest's default timeout, none enforced
    /// by this crate).
    #[error("Request timed out: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The response body could not be parsed as the expected JSON shape.
    #[error("Failed to parse response: {detail}")]
    Parse {
        /// Error details.
        detail: String,
    },

    /// The API rejected the submitted draft with validation messages.
    #[error("Draft rejected by the API")]
    Rejected {
        /// Per-field messages, ready for inline display.
        errors: FieldErrors,
    },

    /// Any other non-success status whose body was not a rejection object.
    #[error("Unexpected HTTP status {status}")]
    Unexpected {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },
}
