//! CLI module - Command-line interface for the signup form.
//!
//! Provides commands for:
//! - `check` - Run the password policy on a candidate password
//! - `create` - Fill in and submit the signup form

pub mod args;

pub use args::{Cli, Commands};
