//! HTTP client for the signup endpoint.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

use common::{HttpClientConfig, SignupError, SignupResult};
use domain::SignupRequest;

use crate::token::BearerToken;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Raw response from the signup endpoint.
///
/// Classification into success or failure happens in the controller, so the
/// client hands back status and body untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupResponse {
    pub status: u16,
    pub body: String,
}

impl SignupResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for the signup call, for dependency injection.
///
/// Implementations return `Err` only for transport failures; every HTTP
/// status, including errors, comes back as a [`SignupResponse`].
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SignupApi: Send + Sync {
    /// POST the request as JSON with the bearer credential.
    async fn create_user(
        &self,
        token: &BearerToken,
        request: &SignupRequest,
    ) -> SignupResult<SignupResponse>;
}

/// reqwest-backed signup client.
pub struct HttpSignupClient {
    client: Client,
    endpoint: String,
}

impl HttpSignupClient {
    /// Build a client from configuration.
    ///
    /// No timeout is applied unless `request_timeout_secs` is set.
    pub fn new(config: &HttpClientConfig) -> SignupResult<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| SignupError::configuration(format!("cannot build HTTP client: {}", e)))?;

        debug!("Signup client targeting {}", config.endpoint);
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Endpoint requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SignupApi for HttpSignupClient {
    #[tracing::instrument(skip(self, token, request), fields(username = %request.username))]
    async fn create_user(
        &self,
        token: &BearerToken,
        request: &SignupRequest,
    ) -> SignupResult<SignupResponse> {
        info!("Submitting signup request");
        let start = Instant::now();

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(token.expose())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Signup network error");
                SignupError::network(e.to_string())
            })?;

        let status = response.status().as_u16();

        // An unreadable body is treated like an empty one
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, status, "Failed to read signup response body");
                String::new()
            }
        };

        info!(
            status,
            duration_ms = start.elapsed().as_millis() as u64,
            "Signup response received"
        );
        Ok(SignupResponse { status, body })
    }
}
