//! Submission controller - the state machine behind the signup form.
//!
//! ```text
//! Idle ──submit──▶ Validating ──ok──▶ Submitting ──2xx──▶ Succeeded
//!                      │                   │
//!                      └──────fail─────────┴──────────────▶ Failed(reason)
//! ```
//!
//! `Failed` keeps the form editable; editing a field returns to `Idle`.
//! `Succeeded` is terminal.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use common::SignupError;
use domain::{validate_password, SignupRequest};

use super::form::{ApiError, FormState};
use super::outcome::SubmissionResult;
use crate::client::SignupApi;
use crate::token::TokenSource;

/// Controller phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed(SignupError),
}

impl Phase {
    /// Fields can be changed and the form submitted again.
    pub fn is_editable(&self) -> bool {
        !matches!(self, Phase::Submitting | Phase::Succeeded)
    }
}

type OnCreated = Box<dyn FnOnce() + Send>;

/// Owns the form state and drives validation and submission.
///
/// `submit` takes `&mut self`, so at most one request is in flight per
/// controller.
pub struct SubmissionController {
    api: Arc<dyn SignupApi>,
    tokens: Arc<dyn TokenSource>,
    state: FormState,
    phase: Phase,
    updates: watch::Sender<FormState>,
    on_created: Option<OnCreated>,
}

impl SubmissionController {
    /// Create a controller with an empty form.
    pub fn new(api: Arc<dyn SignupApi>, tokens: Arc<dyn TokenSource>) -> Self {
        let (updates, _) = watch::channel(FormState::default());
        Self {
            api,
            tokens,
            state: FormState::default(),
            phase: Phase::Idle,
            updates,
            on_created: None,
        }
    }

    /// Register the callback run once the account is created.
    pub fn on_created(mut self, callback: impl FnOnce() + Send + 'static) -> Self {
        self.on_created = Some(Box::new(callback));
        self
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Receive a snapshot of the form on every change.
    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.updates.subscribe()
    }

    /// Update the username and clear any api error.
    pub fn set_username(&mut self, username: impl Into<String>) {
        if !self.begin_edit() {
            return;
        }
        self.state.username = username.into();
        self.state.api_error = None;
        self.publish();
    }

    /// Update the password, re-run the password rules, and clear any api error.
    pub fn set_password(&mut self, password: impl Into<String>) {
        if !self.begin_edit() {
            return;
        }
        self.state.password = password.into();
        self.state.validation_errors = validate_password(&self.state.password);
        self.state.api_error = None;
        self.publish();
    }

    /// Validate the form and, if it passes, send the signup request.
    ///
    /// Returns the phase the attempt ended in. After success further calls
    /// do nothing.
    pub async fn submit(&mut self) -> Phase {
        if self.phase == Phase::Succeeded {
            debug!("Form already submitted successfully, ignoring submit");
            return self.phase.clone();
        }

        self.phase = Phase::Validating;
        let request = match SignupRequest::from_form(&self.state.username, &self.state.password) {
            Ok(request) => request,
            Err(err) => {
                self.fail_validation(SignupError::from(err));
                return self.phase.clone();
            }
        };

        {
            let mut busy = BusyGuard::engage(&mut self.state, &mut self.phase, &self.updates);
            let result = Self::send(self.api.as_ref(), self.tokens.as_ref(), &request).await;
            busy.resolve(result);
        }

        if self.phase == Phase::Succeeded {
            info!(username = %self.state.username, "User created");
            if let Some(callback) = self.on_created.take() {
                callback();
            }
        }

        self.phase.clone()
    }

    async fn send(
        api: &dyn SignupApi,
        tokens: &dyn TokenSource,
        request: &SignupRequest,
    ) -> SubmissionResult {
        let token = match tokens.bearer_token().await {
            Ok(token) => token,
            Err(err) => return SubmissionResult::from_outcome(Err(err)),
        };
        SubmissionResult::from_outcome(api.create_user(&token, request).await)
    }

    fn fail_validation(&mut self, err: SignupError) {
        debug!(code = err.code(), "Local validation failed");
        match &err {
            SignupError::PasswordRules(messages) => {
                self.state.validation_errors = messages.clone();
                self.state.api_error = None;
            }
            _ => {
                // Username errors hide password errors
                self.state.validation_errors.clear();
                self.state.api_error = Some(ApiError::from(&err));
            }
        }
        self.phase = Phase::Failed(err);
        self.publish();
    }

    /// Returns false when the form no longer accepts input.
    fn begin_edit(&mut self) -> bool {
        match self.phase {
            Phase::Succeeded | Phase::Submitting => false,
            _ => {
                self.phase = Phase::Idle;
                true
            }
        }
    }

    fn publish(&self) {
        self.updates.send_replace(self.state.clone());
    }
}

/// Marks the form busy for as long as it lives.
///
/// Dropping the guard clears `is_submitting` on every exit path, including a
/// cancelled submit future, and moves an unresolved `Submitting` phase back to
/// `Idle`.
struct BusyGuard<'a> {
    state: &'a mut FormState,
    phase: &'a mut Phase,
    updates: &'a watch::Sender<FormState>,
}

impl<'a> BusyGuard<'a> {
    fn engage(
        state: &'a mut FormState,
        phase: &'a mut Phase,
        updates: &'a watch::Sender<FormState>,
    ) -> Self {
        state.clear_errors();
        state.is_submitting = true;
        *phase = Phase::Submitting;
        updates.send_replace(state.clone());
        Self {
            state,
            phase,
            updates,
        }
    }

    fn resolve(&mut self, result: SubmissionResult) {
        match result.into_error() {
            None => *self.phase = Phase::Succeeded,
            Some(err) => {
                warn!(code = err.code(), "Signup failed: {}", err);
                self.state.api_error = Some(ApiError::from(&err));
                *self.phase = Phase::Failed(err);
            }
        }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.state.is_submitting = false;
        if *self.phase == Phase::Submitting {
            debug!("Submission abandoned before resolution");
            *self.phase = Phase::Idle;
        }
        self.updates.send_replace(self.state.clone());
    }
}
