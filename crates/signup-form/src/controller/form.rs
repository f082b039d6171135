//! Form field state.

use common::{Field, SignupError};

/// An error message coming from the submit flow, with the field it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub message: String,
    /// `None` means the general alert region
    pub field: Option<Field>,
}

impl From<&SignupError> for ApiError {
    fn from(err: &SignupError) -> Self {
        Self {
            message: err.user_message(),
            field: err.field(),
        }
    }
}

/// Everything the form shows.
///
/// `validation_errors` holds the live password violations; `api_error` holds
/// the username error and anything reported by the endpoint. Both can be set
/// at once when the server rejects a password the local rules accepted.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub username: String,
    pub password: String,
    pub validation_errors: Vec<String>,
    pub api_error: Option<ApiError>,
    pub is_submitting: bool,
}

impl std::fmt::Debug for FormState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormState")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("validation_errors", &self.validation_errors)
            .field("api_error", &self.api_error)
            .field("is_submitting", &self.is_submitting)
            .finish()
    }
}

impl FormState {
    /// Message of the current api error, if any.
    pub fn api_error_message(&self) -> Option<&str> {
        self.api_error.as_ref().map(|e| e.message.as_str())
    }

    /// The username field shows an error.
    pub fn username_invalid(&self) -> bool {
        matches!(&self.api_error, Some(e) if e.field == Some(Field::Username))
    }

    /// The password field shows an error: live violations or a server rejection.
    pub fn password_invalid(&self) -> bool {
        !self.validation_errors.is_empty()
            || matches!(&self.api_error, Some(e) if e.field == Some(Field::Password))
    }

    /// Message for the general alert region.
    ///
    /// Every api error except the username one is shown there, including the
    /// server's password rejection.
    pub fn alert(&self) -> Option<&str> {
        match &self.api_error {
            Some(e) if e.field != Some(Field::Username) => Some(e.message.as_str()),
            _ => None,
        }
    }

    pub(crate) fn clear_errors(&mut self) {
        self.validation_errors.clear();
        self.api_error = None;
    }
}
