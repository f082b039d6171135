//! Signup form configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use common::{HttpClientConfig, SignupError, SignupResult, DEFAULT_SIGNUP_ENDPOINT};

use crate::token::{BearerToken, EnvTokenSource, FileTokenSource, TokenSource};

pub const ENV_ENDPOINT: &str = "SIGNUP_ENDPOINT";
pub const ENV_TOKEN: &str = "SIGNUP_TOKEN";
pub const ENV_TOKEN_FILE: &str = "SIGNUP_TOKEN_FILE";
pub const ENV_TIMEOUT_SECS: &str = "SIGNUP_TIMEOUT_SECS";

/// Signup form configuration.
#[derive(Clone, Default)]
pub struct SignupConfig {
    pub http: HttpClientConfig,
    token: Option<String>,
    pub token_var: Option<String>,
    pub token_file: Option<PathBuf>,
}

impl std::fmt::Debug for SignupConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupConfig")
            .field("http", &self.http)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("token_var", &self.token_var)
            .field("token_file", &self.token_file)
            .finish()
    }
}

impl SignupConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let http = HttpClientConfig {
            endpoint: env::var(ENV_ENDPOINT).unwrap_or_else(|_| DEFAULT_SIGNUP_ENDPOINT.to_string()),
            request_timeout_secs: env::var(ENV_TIMEOUT_SECS)
                .ok()
                .and_then(|v| v.parse().ok()),
            ..HttpClientConfig::default()
        };

        Self {
            http,
            token: None,
            token_var: env::var(ENV_TOKEN)
                .ok()
                .filter(|t| !t.trim().is_empty())
                .map(|_| ENV_TOKEN.to_string()),
            token_file: env::var(ENV_TOKEN_FILE).ok().map(PathBuf::from),
        }
    }

    /// Override the endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.http.endpoint = endpoint.into();
        self
    }

    /// Use a literal token. Takes precedence over every other source.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Read the token from environment variable `var` at submit time.
    pub fn with_token_var(mut self, var: impl Into<String>) -> Self {
        self.token_var = Some(var.into());
        self
    }

    /// Read the token from a file. Replaces the literal and environment tokens.
    pub fn with_token_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.token = None;
        self.token_var = None;
        self.token_file = Some(path.into());
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.http.request_timeout_secs = Some(secs);
        self
    }

    /// Build the token source: a literal token if set, else the environment
    /// variable, else the token file.
    ///
    /// # Errors
    /// Returns [`SignupError::MissingToken`] when neither is configured or the
    /// literal token is blank.
    pub fn token_source(&self) -> SignupResult<Arc<dyn TokenSource>> {
        if let Some(token) = &self.token {
            return Ok(Arc::new(BearerToken::new(token)?));
        }
        if let Some(var) = &self.token_var {
            return Ok(Arc::new(EnvTokenSource::new(var)));
        }
        if let Some(path) = &self.token_file {
            return Ok(Arc::new(FileTokenSource::new(path)));
        }
        Err(SignupError::missing_token(format!(
            "set {} or {}",
            ENV_TOKEN, ENV_TOKEN_FILE
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_timeout() {
        let config = SignupConfig::default();
        assert_eq!(config.http.endpoint, DEFAULT_SIGNUP_ENDPOINT);
        assert_eq!(config.http.request_timeout_secs, None);
    }

    #[test]
    fn test_builder_overrides() {
        let config = SignupConfig::default()
            .with_endpoint("http://localhost:8080/signup")
            .with_timeout_secs(3);
        assert_eq!(config.http.endpoint, "http://localhost:8080/signup");
        assert_eq!(config.http.request_timeout_secs, Some(3));
    }

    #[test]
    fn test_token_source_requires_a_token() {
        assert!(matches!(
            SignupConfig::default().token_source(),
            Err(SignupError::MissingToken(_))
        ));
        assert!(SignupConfig::default().with_token("abc").token_source().is_ok());
        assert!(SignupConfig::default()
            .with_token_file("/tmp/token")
            .token_source()
            .is_ok());
    }

    #[tokio::test]
    async fn test_token_var_is_read_at_submit_time() {
        let var = "SIGNUP_FORM_CONFIG_TEST_TOKEN";
        let source = SignupConfig::default()
            .with_token_var(var)
            .token_source()
            .unwrap();

        std::env::set_var(var, "late-token");
        assert_eq!(source.bearer_token().await.unwrap().expose(), "late-token");
        std::env::remove_var(var);
        assert!(matches!(
            source.bearer_token().await,
            Err(SignupError::MissingToken(_))
        ));
    }

    #[test]
    fn test_token_file_replaces_env_token() {
        let config = SignupConfig::default()
            .with_token_var(ENV_TOKEN)
            .with_token_file("/tmp/token");
        assert_eq!(config.token_var, None);
        assert!(config.token_file.is_some());
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = SignupConfig::default().with_token("super-secret");
        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}
