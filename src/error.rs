use serde_json::{Value, json};
use thiserror::Error;

/// Errors surfaced by aggregate operations and services.
///
/// Every variant carries a human-readable message plus a structured
/// `details` payload for programmatic inspection by callers.
#[derive(Debug, Error)]
pub enum ClinicError {
    /// A malformed argument reached an aggregate mutation. The aggregate is
    /// left unchanged.
    #[error("{message}")]
    InvalidArgument { message: String, details: Value },

    /// Field-level validation failed. `details` carries the per-field
    /// errors; nothing was mutated or stored.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// A lookup the caller expected to resolve came back empty.
    #[error("{message}")]
    NotFound { message: String, details: Value },
}

impl ClinicError {
    pub fn invalid_argument(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            details,
        }
    }

    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
}

impl From<validator::ValidationErrors> for ClinicError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or(Value::Null);
        Self::validation("Validation failed", json!({ "fields": details }))
    }
}
