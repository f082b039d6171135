//! Bearer credential and the sources it can be obtained from.
//!
//! The signup endpoint requires `Authorization: Bearer <token>`. How the token
//! is obtained is up to the caller: pass a [`BearerToken`] directly, or read it
//! from the environment or a file at submit time.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use common::{SignupError, SignupResult};
use domain::BEARER_TOKEN_PREFIX;

/// Opaque bearer credential.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

// Don't expose the token in debug output (security)
impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("BearerToken").field(&"[REDACTED]").finish()
    }
}

impl BearerToken {
    /// Wrap a raw token.
    ///
    /// Surrounding whitespace and a leading `Bearer ` prefix are stripped.
    ///
    /// # Errors
    /// Returns [`SignupError::MissingToken`] if nothing is left.
    pub fn new(raw: impl AsRef<str>) -> SignupResult<Self> {
        let trimmed = raw.as_ref().trim();
        let scheme = BEARER_TOKEN_PREFIX.trim_end();
        let token = match trimmed.strip_prefix(scheme) {
            // The scheme alone, or the scheme followed by whitespace
            Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest.trim(),
            _ => trimmed,
        };

        if token.is_empty() {
            return Err(SignupError::missing_token("token is empty"));
        }
        Ok(Self(token.to_string()))
    }

    /// Get the raw token for the Authorization header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

/// Supplies the bearer credential for a signup request.
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn bearer_token(&self) -> SignupResult<BearerToken>;
}

#[async_trait]
impl TokenSource for BearerToken {
    async fn bearer_token(&self) -> SignupResult<BearerToken> {
        Ok(self.clone())
    }
}

/// Reads the token from an environment variable on every request.
#[derive(Debug, Clone)]
pub struct EnvTokenSource {
    var: String,
}

impl EnvTokenSource {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

#[async_trait]
impl TokenSource for EnvTokenSource {
    async fn bearer_token(&self) -> SignupResult<BearerToken> {
        let raw = std::env::var(&self.var)
            .map_err(|_| SignupError::missing_token(format!("{} is not set", self.var)))?;
        BearerToken::new(raw)
    }
}

/// Reads the token from a file on every request.
#[derive(Debug, Clone)]
pub struct FileTokenSource {
    path: PathBuf,
}

impl FileTokenSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TokenSource for FileTokenSource {
    async fn bearer_token(&self) -> SignupResult<BearerToken> {
        debug!("Reading bearer token from {}", self.path.display());
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            SignupError::missing_token(format!("cannot read {}: {}", self.path.display(), e))
        })?;
        BearerToken::new(raw)
    }
}
