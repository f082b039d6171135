//! Password policy - the fixed, ordered rule set applied to signup passwords.
//!
//! Every rule is evaluated on every call so a form can show all failures at
//! once. Evaluation order is part of the contract: callers render the
//! violations in the order they are returned.

use crate::constants::{
    MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH, MSG_PASSWORD_DIGIT, MSG_PASSWORD_LOWERCASE,
    MSG_PASSWORD_TOO_LONG, MSG_PASSWORD_TOO_SHORT, MSG_PASSWORD_UPPERCASE,
    MSG_PASSWORD_WHITESPACE,
};
use crate::error::{DomainError, DomainResult};

/// A single password rule. Each variant is a predicate with a fixed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordRule {
    TooShort,
    TooLong,
    ContainsWhitespace,
    MissingDigit,
    MissingUppercase,
    MissingLowercase,
}

impl PasswordRule {
    /// All rules in evaluation order.
    pub const ALL: [PasswordRule; 6] = [
        PasswordRule::TooShort,
        PasswordRule::TooLong,
        PasswordRule::ContainsWhitespace,
        PasswordRule::MissingDigit,
        PasswordRule::MissingUppercase,
        PasswordRule::MissingLowercase,
    ];

    /// Returns true when `password` breaks this rule.
    pub fn is_violated_by(self, password: &str) -> bool {
        match self {
            PasswordRule::TooShort => password_length(password) < MIN_PASSWORD_LENGTH,
            PasswordRule::TooLong => password_length(password) > MAX_PASSWORD_LENGTH,
            PasswordRule::ContainsWhitespace => password.chars().any(is_password_whitespace),
            PasswordRule::MissingDigit => !password.chars().any(|c| c.is_ascii_digit()),
            PasswordRule::MissingUppercase => !password.chars().any(|c| c.is_ascii_uppercase()),
            PasswordRule::MissingLowercase => !password.chars().any(|c| c.is_ascii_lowercase()),
        }
    }

    /// User-facing message for this rule.
    pub fn message(self) -> &'static str {
        match self {
            PasswordRule::TooShort => MSG_PASSWORD_TOO_SHORT,
            PasswordRule::TooLong => MSG_PASSWORD_TOO_LONG,
            PasswordRule::ContainsWhitespace => MSG_PASSWORD_WHITESPACE,
            PasswordRule::MissingDigit => MSG_PASSWORD_DIGIT,
            PasswordRule::MissingUppercase => MSG_PASSWORD_UPPERCASE,
            PasswordRule::MissingLowercase => MSG_PASSWORD_LOWERCASE,
        }
    }
}

impl std::fmt::Display for PasswordRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Length in UTF-16 code units, so a character outside the Basic
/// Multilingual Plane (an emoji, say) counts as two.
fn password_length(password: &str) -> usize {
    password.encode_utf16().count()
}

/// Unicode whitespace plus the byte order mark, without NEL (U+0085).
fn is_password_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Every rule `password` violates, in evaluation order.
pub fn violated_rules(password: &str) -> Vec<PasswordRule> {
    PasswordRule::ALL
        .into_iter()
        .filter(|rule| rule.is_violated_by(password))
        .collect()
}

/// Validate a candidate password, returning the violation messages in order.
///
/// An empty vector means the password satisfies the policy.
pub fn validate_password(password: &str) -> Vec<String> {
    violated_rules(password)
        .into_iter()
        .map(|rule| rule.message().to_string())
        .collect()
}

/// Password value object - a plain text password known to satisfy the policy.
///
/// The wrapped text is sent to the signup endpoint as is, so it is kept out of
/// `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Password").field(&"[REDACTED]").finish()
    }
}

impl Password {
    /// Check `plain_text` against the policy.
    ///
    /// # Errors
    /// Returns [`DomainError::PasswordPolicy`] with every violated rule.
    pub fn parse(plain_text: &str) -> DomainResult<Self> {
        let violations = violated_rules(plain_text);
        if violations.is_empty() {
            Ok(Self(plain_text.to_string()))
        } else {
            Err(DomainError::PasswordPolicy(violations))
        }
    }

    /// Get the plain text.
    pub fn expose(&self) -> &str {
        &self.0
    }
}
