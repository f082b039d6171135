//! Terminal rendering of the signup form.

use std::fmt;

use crate::controller::{FormState, Phase};

pub const USERNAME_LABEL: &str = "Username";
pub const PASSWORD_LABEL: &str = "Password";
pub const SUBMIT_LABEL: &str = "Create User";
pub const SUBMIT_BUSY_LABEL: &str = "Creating...";
pub const CREATED_MESSAGE: &str = "User was successfully created!";

/// One labelled input and the errors shown under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub label: &'static str,
    pub value: String,
    pub invalid: bool,
    pub errors: Vec<String>,
}

/// What the user sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    Form {
        username: FieldView,
        password: FieldView,
        alert: Option<String>,
        submit_label: &'static str,
        submit_disabled: bool,
    },
    /// The form is replaced once the account exists
    Created,
}

impl PageView {
    pub fn render(state: &FormState, phase: &Phase) -> Self {
        if *phase == Phase::Succeeded {
            return PageView::Created;
        }

        let username_errors = if state.username_invalid() {
            state.api_error_message().map(str::to_string).into_iter().collect()
        } else {
            Vec::new()
        };

        PageView::Form {
            username: FieldView {
                label: USERNAME_LABEL,
                value: state.username.clone(),
                invalid: state.username_invalid(),
                errors: username_errors,
            },
            password: FieldView {
                label: PASSWORD_LABEL,
                // Masked input
                value: "*".repeat(state.password.chars().count()),
                invalid: state.password_invalid(),
                errors: state.validation_errors.clone(),
            },
            alert: state.alert().map(str::to_string),
            submit_label: if state.is_submitting {
                SUBMIT_BUSY_LABEL
            } else {
                SUBMIT_LABEL
            },
            submit_disabled: state.is_submitting,
        }
    }
}

impl fmt::Display for FieldView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.label, self.value)?;
        for error in &self.errors {
            writeln!(f, "  - {}", error)?;
        }
        Ok(())
    }
}

impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageView::Created => writeln!(f, "{}", CREATED_MESSAGE),
            PageView::Form {
                username,
                password,
                alert,
                submit_label,
                submit_disabled,
            } => {
                write!(f, "{}", username)?;
                write!(f, "{}", password)?;
                if let Some(alert) = alert {
                    writeln!(f, "! {}", alert)?;
                }
                if *submit_disabled {
                    writeln!(f, "[ {} ] (disabled)", submit_label)
                } else {
                    writeln!(f, "[ {} ]", submit_label)
                }
            }
        }
    }
}
