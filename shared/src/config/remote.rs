//! Remote verification service configuration module

use serde::{Deserialize, Serialize};

/// Connection settings for the service that owns verification tokens
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RemoteServiceConfig {
    /// Provider implementation ("http" or "mock")
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Base URL of the verification API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the verify-email endpoint, relative to `base_url`
    #[serde(default = "default_verify_path")]
    pub verify_path: String,

    /// Path of the resend-verification endpoint, relative to `base_url`
    #[serde(default = "default_resend_path")]
    pub resend_path: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RemoteServiceConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            base_url: default_base_url(),
            verify_path: default_verify_path(),
            resend_path: default_resend_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl RemoteServiceConfig {
    /// Create an HTTP provider configuration pointing at `base_url`
    pub fn http(base_url: impl Into<String>) -> Self {
        Self {
            provider: String::from("http"),
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Create configuration from environment variables
    pub fn from_env() -> Self {
        let provider = std::env::var("VERIFICATION_PROVIDER").unwrap_or_else(|_| default_provider());
        let base_url = std::env::var("VERIFICATION_API_URL").unwrap_or_else(|_| default_base_url());
        let timeout_secs = std::env::var("VERIFICATION_API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_secs);

        Self {
            provider,
            base_url,
            timeout_secs,
            ..Default::default()
        }
    }

    /// Full URL of the verify-email endpoint
    pub fn verify_url(&self) -> String {
        join_url(&self.base_url, &self.verify_path)
    }

    /// Full URL of the resend-verification endpoint
    pub fn resend_url(&self) -> String {
        join_url(&self.base_url, &self.resend_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn default_provider() -> String {
    String::from("mock")
}

fn default_base_url() -> String {
    String::from("http://localhost:8080/api")
}

fn default_verify_path() -> String {
    String::from("/auth/verify-email")
}

fn default_resend_path() -> String {
    String::from("/auth/resend-verification")
}

fn default_timeout_secs() -> u64 {
    30
}
