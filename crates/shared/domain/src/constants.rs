//! Domain-level constants.
//!
//! These constants define the signup policy and the messages shown to users.

// =============================================================================
// Password Policy
// =============================================================================

/// Minimum password length (in characters)
pub const MIN_PASSWORD_LENGTH: usize = 10;

/// Maximum password length (in characters)
pub const MAX_PASSWORD_LENGTH: usize = 24;

pub const MSG_PASSWORD_TOO_SHORT: &str = "Password must be at least 10 characters long";
pub const MSG_PASSWORD_TOO_LONG: &str = "Password must be at most 24 characters long";
pub const MSG_PASSWORD_WHITESPACE: &str = "Password cannot contain spaces";
pub const MSG_PASSWORD_DIGIT: &str = "Password must contain at least one number";
pub const MSG_PASSWORD_UPPERCASE: &str = "Password must contain at least one uppercase letter";
pub const MSG_PASSWORD_LOWERCASE: &str = "Password must contain at least one lowercase letter";

// =============================================================================
// Username
// =============================================================================

pub const MSG_USERNAME_REQUIRED: &str = "Username is required";

// =============================================================================
// Signup API
// =============================================================================

/// Message returned by the signup endpoint when it refuses a password.
/// Matched exactly against the `message` field of a 500 response body.
pub const MSG_PASSWORD_NOT_ALLOWED: &str =
    "Sorry, the entered password is not allowed, please try a different one.";

pub const MSG_NOT_AUTHENTICATED: &str = "Not authenticated to access this resource.";

pub const MSG_GENERIC_FAILURE: &str = "Something went wrong, please try again.";

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";
