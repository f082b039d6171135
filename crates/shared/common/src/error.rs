//! Unified error handling for the signup flow.
//!
//! Every failure a signup attempt can end in is a variant of [`SignupError`].
//! Each variant knows the text shown to the user and which form field, if
//! any, the text belongs to.

use domain::{
    DomainError, MSG_GENERIC_FAILURE, MSG_NOT_AUTHENTICATED, MSG_PASSWORD_NOT_ALLOWED,
    MSG_USERNAME_REQUIRED,
};
use thiserror::Error;

/// Form field an error message is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Password,
}

/// Signup error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignupError {
    // Local validation
    #[error("{}", MSG_USERNAME_REQUIRED)]
    UsernameRequired,

    #[error("Password does not meet requirements")]
    PasswordRules(Vec<String>),

    // Server responses
    #[error("{}", MSG_NOT_AUTHENTICATED)]
    Unauthorized,

    #[error("{}", MSG_PASSWORD_NOT_ALLOWED)]
    PasswordRejected,

    #[error("Signup failed with status {0}")]
    Server(u16),

    // Transport
    #[error("Network error: {0}")]
    Network(String),

    // Setup
    #[error("Bearer token unavailable: {0}")]
    MissingToken(String),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Input error: {0}")]
    Input(String),
}

impl SignupError {
    /// Get a stable error code, used in logs
    pub fn code(&self) -> &'static str {
        match self {
            SignupError::UsernameRequired => "USERNAME_REQUIRED",
            SignupError::PasswordRules(_) => "PASSWORD_RULES",
            SignupError::Unauthorized => "UNAUTHORIZED",
            SignupError::PasswordRejected => "PASSWORD_REJECTED",
            SignupError::Server(_) => "SERVER_ERROR",
            SignupError::Network(_) => "NETWORK_ERROR",
            SignupError::MissingToken(_) => "MISSING_TOKEN",
            SignupError::Configuration(_) => "CONFIGURATION_ERROR",
            SignupError::Input(_) => "INPUT_ERROR",
        }
    }

    /// Get user-facing message (hides transport details)
    pub fn user_message(&self) -> String {
        match self {
            SignupError::UsernameRequired
            | SignupError::Unauthorized
            | SignupError::PasswordRejected => self.to_string(),

            SignupError::PasswordRules(messages) => messages.join("\n"),

            SignupError::Server(status) => {
                tracing::debug!("Signup endpoint returned status {}", status);
                MSG_GENERIC_FAILURE.to_string()
            }
            SignupError::Network(reason) => {
                tracing::debug!("Network error: {}", reason);
                MSG_GENERIC_FAILURE.to_string()
            }
            SignupError::MissingToken(reason) => {
                tracing::debug!("Bearer token unavailable: {}", reason);
                MSG_NOT_AUTHENTICATED.to_string()
            }
            SignupError::Configuration(_) | SignupError::Input(_) => self.to_string(),
        }
    }

    /// The field this error is shown under, or `None` for the general alert.
    pub fn field(&self) -> Option<Field> {
        match self {
            SignupError::UsernameRequired => Some(Field::Username),
            SignupError::PasswordRules(_) | SignupError::PasswordRejected => {
                Some(Field::Password)
            }
            _ => None,
        }
    }

    /// True for failures detected before any request was sent.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            SignupError::UsernameRequired | SignupError::PasswordRules(_)
        )
    }
}

/// Result type alias
pub type SignupResult<T> = Result<T, SignupError>;

/// Convenience constructors
impl SignupError {
    pub fn network(reason: impl Into<String>) -> Self {
        SignupError::Network(reason.into())
    }

    pub fn missing_token(reason: impl Into<String>) -> Self {
        SignupError::MissingToken(reason.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        SignupError::Configuration(msg.into())
    }

    pub fn input(msg: impl Into<String>) -> Self {
        SignupError::Input(msg.into())
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for SignupError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UsernameRequired => SignupError::UsernameRequired,
            DomainError::PasswordPolicy(_) => SignupError::PasswordRules(err.messages()),
        }
    }
}
