//! Common utilities shared by signup front ends.
//!
//! Provides:
//! - Unified error handling (`SignupError`)
//! - Shared configuration structures

pub mod config;
pub mod error;

pub use config::{HttpClientConfig, DEFAULT_SIGNUP_ENDPOINT};
pub use error::{Field, SignupError, SignupResult};
