//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use intern_roster_client::ApiError;

/// Result alias for the core layer.
pub type CoreResult<T> = Result<T, CoreError>;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Remote API failure (transport, parse, or validation rejection)
    #[error("{0}")]
    Api(#[from] ApiError),

    /// Roulette was invoked on an empty roster
    #[error("Roster is empty")]
    EmptyRoster,
}

impl CoreError {
    /// The per-field validation messages, when this error is a rejection.
    #[must_use]
    pub fn field_errors(&self) -> Option<&intern_roster_client::FieldErrors> {
        match self {
            Self::Api(ApiError::Rejected { errors }) => Some(errors),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intern_roster_client::FieldErrors;

    #[test]
    fn rejection_exposes_field_errors() {
        let err = CoreError::Api(ApiError::Rejected {
            errors: FieldErrors {
                email: Some("Email already exists".to_string()),
                ..FieldErrors::default()
            },
        });
        let errors = err.field_errors();
        assert!(errors.is_some_and(|e| e.email.is_some()));
    }

    #[test]
    fn other_errors_have_no_field_errors() {
        let err = CoreError::Api(ApiError::Network {
            detail: "connection refused".to_string(),
        });
        assert!(err.field_errors().is_none());
        assert!(CoreError::EmptyRoster.field_errors().is_none());
    }
}
