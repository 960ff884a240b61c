//! Error types for votecheck

use thiserror::Error;

use crate::form::FormErrors;

/// Failure of a remote voter API operation
#[derive(Error, Debug)]
pub enum ApiError {
    /// The API rejected the submitted fields
    ///
    /// Carries the per-field messages exactly as the API returned them.
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(FormErrors),

    /// The request never produced a response
    #[error("Transport error: {0}")]
    Transport(String),

    /// The request or the server timed out
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The server answered with a status the client does not handle
    #[error("Unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    /// A success response whose body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Per-field messages, when this is a validation rejection
    pub fn form_errors(&self) -> Option<&FormErrors> {
        match self {
            ApiError::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    /// Whether the error is a validation rejection
    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }
}

/// Invalid client configuration, reported at start-up
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The API base URL is unusable
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldName;

    #[test]
    fn validation_error_exposes_form_errors() {
        let errors = FormErrors::new().with(FieldName::ZipCode, "invalid");
        let error = ApiError::Validation(errors.clone());

        assert!(error.is_validation());
        assert_eq!(error.form_errors(), Some(&errors));
        assert_eq!(error.to_string(), "validation failed for 1 field(s)");
    }

    #[test]
    fn other_errors_have_no_form_errors() {
        let error = ApiError::Status {
            status: 500,
            message: "status 500".to_string(),
        };
        assert!(!error.is_validation());
        assert!(error.form_errors().is_none());
    }
}
