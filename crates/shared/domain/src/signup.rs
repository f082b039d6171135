//! Signup request entity and the username rule.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::password::Password;

/// Check that a username is present.
///
/// A username made only of whitespace counts as blank.
pub fn validate_username(username: &str) -> DomainResult<()> {
    if username.trim().is_empty() {
        return Err(DomainError::UsernameRequired);
    }
    Ok(())
}

/// JSON body sent to the signup endpoint: `{ "username": ..., "password": ... }`.
///
/// The username is sent exactly as entered; trimming only applies to the
/// blank check.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
}

// Keep the password out of logs
impl std::fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl SignupRequest {
    /// Build a request from fields that already passed local validation.
    pub fn new(username: impl Into<String>, password: &Password) -> Self {
        Self {
            username: username.into(),
            password: password.expose().to_string(),
        }
    }

    /// Validate raw form fields and build a request.
    ///
    /// The username is checked first; when it is blank the password is not
    /// looked at.
    pub fn from_form(username: &str, password: &str) -> DomainResult<Self> {
        validate_username(username)?;
        let password = Password::parse(password)?;
        Ok(Self::new(username, &password))
    }
}

/// Error body returned by the signup endpoint.
///
/// Only `message` is inspected; unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::PasswordRule;

    #[test]
    fn test_blank_username_rejected() {
        assert_eq!(validate_username(""), Err(DomainError::UsernameRequired));
        assert_eq!(validate_username("   \t"), Err(DomainError::UsernameRequired));
        assert!(validate_username(" alice ").is_ok());
    }

    #[test]
    fn test_from_form_checks_username_before_password() {
        let err = SignupRequest::from_form(" ", "bad").unwrap_err();
        assert_eq!(err, DomainError::UsernameRequired);
    }

    #[test]
    fn test_from_form_reports_password_rules() {
        let err = SignupRequest::from_form("alice", "abcdefghij").unwrap_err();
        assert_eq!(
            err,
            DomainError::PasswordPolicy(vec![
                PasswordRule::MissingDigit,
                PasswordRule::MissingUppercase
            ])
        );
    }

    #[test]
    fn test_request_serializes_username_and_password() {
        let request = SignupRequest::from_form("alice", "Abcdefgh12").unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "username": "alice", "password": "Abcdefgh12" })
        );
    }

    #[test]
    fn test_request_debug_hides_password() {
        let request = SignupRequest::from_form("alice", "Abcdefgh12").unwrap();
        let debug = format!("{:?}", request);
        assert!(debug.contains("alice"));
        assert!(!debug.contains("Abcdefgh12"));
    }

    #[test]
    fn test_error_body_parsing() {
        let body: SignupErrorBody =
            serde_json::from_str(r#"{"message":"nope","code":7}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("nope"));

        let body: SignupErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.message.is_none());
    }
}
