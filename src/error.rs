//! Error types for the Ionomy client library.

use thiserror::Error;

/// The main error type for all Ionomy client operations.
#[derive(Error, Debug)]
pub enum IonomyError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// Response body was not a valid envelope
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Ionomy API returned a `success: false` envelope
    #[error("Ionomy API error: {0}")]
    Api(String),

    /// A required parameter was missing or invalid
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Signing error
    #[error("authentication error: {0}")]
    Auth(String),
}

impl IonomyError {
    /// Check if the HTTP round trip itself failed (connection error,
    /// timeout, malformed body).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::HttpMiddleware(_) | Self::InvalidResponse(_)
        )
    }

    /// Check if the server answered with a failure envelope.
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    /// Check if a parameter failed validation before any network I/O.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Parameter validation failure, raised before a request is dispatched.
///
/// Carries the name of the offending parameter so callers can report
/// exactly which field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {message}")]
pub struct ValidationError {
    /// Name of the parameter that failed validation.
    pub field: &'static str,
    /// What was wrong with it.
    pub message: String,
}

impl ValidationError {
    /// A required parameter was absent or empty.
    pub fn missing(field: &'static str) -> Self {
        Self {
            field,
            message: "is required".to_string(),
        }
    }

    /// A parameter was present but outside its allowed values.
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}
