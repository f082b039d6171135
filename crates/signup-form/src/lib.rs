//! Signup Form - client-side registration against a remote signup endpoint.
//!
//! Collects a username and password, checks the password against the policy
//! from the `domain` crate, submits the credentials and reflects the outcome
//! in the form state.
//!
//! # Layers
//!
//! - **client**: `SignupApi` trait and the reqwest implementation
//! - **token**: bearer credential and where it comes from
//! - **controller**: form state and the submission state machine
//! - **view**: terminal rendering of the form
//! - **config**: environment-driven configuration
//! - **cli** / **commands**: the `signup-form` binary
//!
//! # CLI Usage
//!
//! ```bash
//! # Check a password
//! cargo run -p signup-form -- check 'Abcdefgh12'
//!
//! # Create a user (token from SIGNUP_TOKEN)
//! cargo run -p signup-form -- create --username alice
//! ```

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod controller;
pub mod token;
pub mod view;

// Re-export commonly used types at crate root
pub use client::{HttpSignupClient, SignupApi, SignupResponse};
pub use config::SignupConfig;
pub use controller::{ApiError, FormState, Phase, SubmissionController, SubmissionResult};
pub use token::{BearerToken, EnvTokenSource, FileTokenSource, TokenSource};
pub use view::PageView;
