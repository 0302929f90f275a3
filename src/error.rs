//! Error types for changelog-notify.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for composition and CLI operations.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// The notification configuration is missing a required field or holds a bad value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// User provided invalid arguments, or a file could not be read or written.
    #[error("{0}")]
    UserError(String),

    /// The resource graph could not be assembled or serialized.
    #[error("synthesis failed: {0}")]
    Synthesis(String),
}

impl NotifyError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            NotifyError::InvalidConfig(_) => exit_codes::INVALID_CONFIG,
            NotifyError::UserError(_) => exit_codes::USER_ERROR,
            NotifyError::Synthesis(_) => exit_codes::SYNTHESIS_FAILURE,
        }
    }
}

impl From<serde_json::Error> for NotifyError {
    fn from(err: serde_json::Error) -> Self {
        NotifyError::Synthesis(format!("failed to serialize resource graph: {}", err))
    }
}

/// Result type alias for changelog-notify operations.
pub type Result<T> = std::result::Result<T, NotifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_error_has_correct_exit_code() {
        let err = NotifyError::InvalidConfig("repository_name is required".to_string());
        assert_eq!(err.exit_code(), exit_codes::INVALID_CONFIG);
    }

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = NotifyError::UserError("cannot read file".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn synthesis_error_has_correct_exit_code() {
        let err = NotifyError::Synthesis("duplicate logical id".to_string());
        assert_eq!(err.exit_code(), exit_codes::SYNTHESIS_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = NotifyError::InvalidConfig("slack_token is required".to_string());
        assert_eq!(
            err.to_string(),
            "invalid configuration: slack_token is required"
        );

        let err = NotifyError::Synthesis("duplicate logical id 'Foo'".to_string());
        assert_eq!(err.to_string(), "synthesis failed: duplicate logical id 'Foo'");
    }
}
