//! Create command - Fills in and submits the signup form.

use std::sync::Arc;

use inquire::{Password as PasswordPrompt, PasswordDisplayMode, Text};
use tokio::sync::watch;

use common::{SignupError, SignupResult};

use crate::cli::args::CreateArgs;
use crate::client::HttpSignupClient;
use crate::config::SignupConfig;
use crate::controller::{FormState, Phase, SubmissionController};
use crate::view::{PageView, PASSWORD_LABEL, SUBMIT_BUSY_LABEL, USERNAME_LABEL};

/// Execute the create command
pub async fn execute(args: CreateArgs, config: SignupConfig) -> SignupResult<()> {
    let tokens = config.token_source()?;
    let api = Arc::new(HttpSignupClient::new(&config.http)?);

    let mut controller = SubmissionController::new(api, tokens)
        .on_created(|| tracing::info!("Account created, leaving form"));
    let mut updates = controller.subscribe();

    let one_shot = args.username.is_some() && args.password.is_some();
    let mut username = args.username;
    let mut password = args.password;

    loop {
        let name = match username.take() {
            Some(name) => name,
            None => prompt_username(controller.state())?,
        };
        controller.set_username(name);

        let secret = match password.take() {
            Some(secret) => secret,
            None => prompt_password()?,
        };
        controller.set_password(secret);

        let phase = submit_with_busy_notice(&mut controller, &mut updates, || {
            println!("{}", SUBMIT_BUSY_LABEL)
        })
        .await;
        print!("{}", PageView::render(controller.state(), &phase));

        match phase {
            Phase::Succeeded => return Ok(()),
            Phase::Failed(err) if one_shot => return Err(err),
            _ => tracing::debug!("Form still editable, prompting again"),
        }
    }
}

/// Submit the form, calling `on_busy` once the request is in flight.
///
/// Local validation failures resolve without ever becoming busy, so
/// `on_busy` is not called for them.
async fn submit_with_busy_notice(
    controller: &mut SubmissionController,
    updates: &mut watch::Receiver<FormState>,
    on_busy: impl FnOnce(),
) -> Phase {
    let submit = controller.submit();
    tokio::pin!(submit);

    tokio::select! {
        biased;
        phase = &mut submit => phase,
        true = request_started(updates) => {
            on_busy();
            submit.await
        }
    }
}

// Returns without holding the watch borrow, so the controller can keep
// publishing.
async fn request_started(updates: &mut watch::Receiver<FormState>) -> bool {
    updates.wait_for(|state| state.is_submitting).await.is_ok()
}

fn prompt_username(state: &FormState) -> SignupResult<String> {
    Text::new(&format!("{}:", USERNAME_LABEL))
        .with_initial_value(&state.username)
        .prompt()
        .map_err(|e| SignupError::input(e.to_string()))
}

fn prompt_password() -> SignupResult<String> {
    PasswordPrompt::new(&format!("{}:", PASSWORD_LABEL))
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()
        .map_err(|e| SignupError::input(e.to_string()))
}
