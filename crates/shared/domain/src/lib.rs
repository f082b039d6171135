//! Domain layer - Signup rules and wire entities.
//!
//! This crate contains pure domain logic with no I/O. The password policy and
//! the username rule live here so every front end applies the same checks.

pub mod constants;
pub mod error;
pub mod password;
pub mod signup;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use password::{validate_password, violated_rules, Password, PasswordRule};
pub use signup::{validate_username, SignupErrorBody, SignupRequest};
