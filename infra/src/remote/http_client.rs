//! HTTP client for the remote verification service
//!
//! Both operations POST a small JSON body and expect the `RemoteResponse`
//! envelope back:
//!
//! ```text
//! POST {base_url}/auth/verify-email          {"token": "..."}
//! POST {base_url}/auth/resend-verification   {"email": "..."}
//!
//! {"success": true,  "message": "..."}
//! {"success": false, "error":   "..."}
//! ```
//!
//! The envelope is read regardless of the HTTP status, since the service
//! reports rejected tokens with 4xx codes and a JSON body. No request is
//! retried.

use async_trait::async_trait;
use ev_core::VerificationApi;
use ev_shared::utils::{mask_email, mask_token};
use ev_shared::{RemoteResponse, RemoteServiceConfig};
use reqwest::{Client, Url};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::InfrastructureError;

/// Shown when the service confirms a token without a message
pub const DEFAULT_VERIFIED_MESSAGE: &str = "Your email has been verified.";
/// Shown when the service rejects a token without an error text
pub const DEFAULT_VERIFY_ERROR: &str = "Email verification failed.";
/// Shown when the service accepts a resend without a message
pub const DEFAULT_RESENT_MESSAGE: &str = "A new verification email has been sent.";
/// Shown when the service refuses a resend without an error text
pub const DEFAULT_RESEND_ERROR: &str = "Failed to resend verification email.";

#[derive(Debug, Serialize)]
pub(crate) struct VerifyEmailRequest<'a> {
    pub token: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ResendVerificationRequest<'a> {
    pub email: &'a str,
}

/// reqwest-backed implementation of the verification API
pub struct HttpVerificationApi {
    client: Client,
    verify_url: Url,
    resend_url: Url,
    config: RemoteServiceConfig,
}

impl HttpVerificationApi {
    /// Create a client for the service described by `config`
    ///
    /// Fails if the endpoint URLs do not parse or the HTTP client cannot be
    /// built.
    pub fn new(config: RemoteServiceConfig) -> Result<Self, InfrastructureError> {
        let verify_url = parse_endpoint(&config.verify_url())?;
        let resend_url = parse_endpoint(&config.resend_url())?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        info!(
            base_url = %config.base_url,
            timeout_secs = config.timeout_secs,
            "HTTP verification client initialized"
        );

        Ok(Self {
            client,
            verify_url,
            resend_url,
            config,
        })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(crate::config::load_remote_config())
    }

    pub fn config(&self) -> &RemoteServiceConfig {
        &self.config
    }

    pub fn verify_url(&self) -> &Url {
        &self.verify_url
    }

    pub fn resend_url(&self) -> &Url {
        &self.resend_url
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        url: &Url,
        body: &B,
    ) -> Result<RemoteResponse, InfrastructureError> {
        let response = self.client.post(url.clone()).json(body).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        debug!(
            url = %url,
            status = status.as_u16(),
            body_length = bytes.len(),
            "Verification service responded"
        );

        serde_json::from_slice::<RemoteResponse>(&bytes).map_err(|e| InfrastructureError::Decode {
            status: status.as_u16(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl VerificationApi for HttpVerificationApi {
    async fn verify_email(&self, token: &str) -> Result<String, String> {
        let request = VerifyEmailRequest { token };
        match self.post(&self.verify_url, &request).await {
            Ok(response) => response.into_result(DEFAULT_VERIFIED_MESSAGE, DEFAULT_VERIFY_ERROR),
            Err(e) => {
                error!(
                    token = %mask_token(token),
                    error = %e,
                    event = "verify_request_failed",
                    "Verify-email request failed"
                );
                Err(e.user_message())
            }
        }
    }

    async fn resend_verification(&self, email: &str) -> Result<String, String> {
        let request = ResendVerificationRequest { email };
        match self.post(&self.resend_url, &request).await {
            Ok(response) => response.into_result(DEFAULT_RESENT_MESSAGE, DEFAULT_RESEND_ERROR),
            Err(e) => {
                error!(
                    email = %mask_email(email),
                    error = %e,
                    event = "resend_request_failed",
                    "Resend-verification request failed"
                );
                Err(e.user_message())
            }
        }
    }

    fn provider_name(&self) -> &str {
        "HTTP"
    }
}

fn parse_endpoint(url: &str) -> Result<Url, InfrastructureError> {
    let parsed = Url::parse(url)
        .map_err(|e| InfrastructureError::Config(format!("Invalid verification endpoint '{}': {}", url, e)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(InfrastructureError::Config(format!(
            "Unsupported scheme '{}' for verification endpoint '{}'",
            other, url
        ))),
    }
}
