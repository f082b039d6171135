//! Classification of signup responses.

use tracing::warn;

use common::{SignupError, SignupResult};
use domain::{SignupErrorBody, MSG_PASSWORD_NOT_ALLOWED};

use crate::client::SignupResponse;

/// Result of one submit attempt. Built from the response, applied to the form,
/// then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success,
    Unauthorized,
    ServerRejectedPassword,
    GenericFailure { status: u16 },
    NetworkError { reason: String },
}

impl SubmissionResult {
    /// Classify an HTTP response.
    ///
    /// Priority: 2xx, then 401/403, then a 500 whose body `message` is the
    /// password rejection text. Everything else is a generic failure.
    pub fn classify(response: &SignupResponse) -> Self {
        if response.is_success() {
            return SubmissionResult::Success;
        }

        match response.status {
            401 | 403 => SubmissionResult::Unauthorized,
            500 if is_password_rejection(&response.body) => {
                SubmissionResult::ServerRejectedPassword
            }
            status => SubmissionResult::GenericFailure { status },
        }
    }

    /// Classify the outcome of a [`SignupApi`](crate::client::SignupApi) call.
    pub fn from_outcome(outcome: SignupResult<SignupResponse>) -> Self {
        match outcome {
            Ok(response) => Self::classify(&response),
            Err(SignupError::MissingToken(reason)) => {
                warn!("No bearer token: {}", reason);
                SubmissionResult::Unauthorized
            }
            Err(err) => SubmissionResult::NetworkError {
                reason: err.to_string(),
            },
        }
    }

    /// The error this result maps to, or `None` on success.
    pub fn into_error(self) -> Option<SignupError> {
        match self {
            SubmissionResult::Success => None,
            SubmissionResult::Unauthorized => Some(SignupError::Unauthorized),
            SubmissionResult::ServerRejectedPassword => Some(SignupError::PasswordRejected),
            SubmissionResult::GenericFailure { status } => Some(SignupError::Server(status)),
            SubmissionResult::NetworkError { reason } => Some(SignupError::Network(reason)),
        }
    }
}

fn is_password_rejection(body: &str) -> bool {
    match serde_json::from_str::<SignupErrorBody>(body) {
        Ok(parsed) => parsed.message.as_deref() == Some(MSG_PASSWORD_NOT_ALLOWED),
        Err(e) => {
            warn!(error = %e, "Unparsable signup error body");
            false
        }
    }
}
