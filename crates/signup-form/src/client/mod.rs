//! Clients for calling the signup endpoint.

mod signup_client;

pub use signup_client::{HttpSignupClient, SignupApi, SignupResponse};

#[cfg(any(test, feature = "test-utils"))]
pub use signup_client::MockSignupApi;
