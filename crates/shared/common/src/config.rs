//! Shared configuration structures.

/// Default signup endpoint.
pub const DEFAULT_SIGNUP_ENDPOINT: &str =
    "https://api.challenge.hennge.com/password-validation-challenge-api/001/challenge-signup";

/// HTTP client configuration for the signup endpoint.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Full URL requests are POSTed to
    pub endpoint: String,
    /// Request timeout in seconds (None = wait indefinitely)
    pub request_timeout_secs: Option<u64>,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SIGNUP_ENDPOINT.to_string(),
            request_timeout_secs: None,
            user_agent: concat!("signup-form/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
