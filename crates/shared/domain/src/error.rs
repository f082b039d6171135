//! Domain-level errors.
//!
//! These errors represent signup rule violations detected before anything is
//! sent over the network. They are independent of transport concerns.

use thiserror::Error;

use crate::constants::MSG_USERNAME_REQUIRED;
use crate::password::PasswordRule;

/// Domain-specific errors for local validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Username is empty or only whitespace
    #[error("{}", MSG_USERNAME_REQUIRED)]
    UsernameRequired,

    /// Password breaks one or more policy rules, in evaluation order
    #[error("Password does not meet requirements: {}", join_rules(.0))]
    PasswordPolicy(Vec<PasswordRule>),
}

impl DomainError {
    /// Messages for every violation carried by this error.
    pub fn messages(&self) -> Vec<String> {
        match self {
            DomainError::UsernameRequired => vec![MSG_USERNAME_REQUIRED.to_string()],
            DomainError::PasswordPolicy(rules) => {
                rules.iter().map(|rule| rule.message().to_string()).collect()
            }
        }
    }
}

fn join_rules(rules: &[PasswordRule]) -> String {
    rules
        .iter()
        .map(|rule| rule.message())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
