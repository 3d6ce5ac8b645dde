//! Verification flow configuration module

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Delay before a verified user is sent to the landing page
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 3000;

/// Query parameter carrying the token in verification links
pub const DEFAULT_TOKEN_PARAM: &str = "token";

/// Timing and navigation settings for a single verification flow
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VerificationFlowConfig {
    /// Milliseconds between a successful verification and the redirect
    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u64,

    /// Destination of the post-verification redirect
    #[serde(default = "default_landing_path")]
    pub landing_path: String,

    /// Ask the destination to open its login affordance
    #[serde(default = "default_show_login")]
    pub show_login: bool,

    /// Name of the link query parameter holding the token
    #[serde(default = "default_token_param")]
    pub token_param: String,
}

impl Default for VerificationFlowConfig {
    fn default() -> Self {
        Self {
            redirect_delay_ms: default_redirect_delay_ms(),
            landing_path: default_landing_path(),
            show_login: default_show_login(),
            token_param: default_token_param(),
        }
    }
}

impl VerificationFlowConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Self {
        let redirect_delay_ms = std::env::var("VERIFICATION_REDIRECT_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_REDIRECT_DELAY_MS);
        let landing_path =
            std::env::var("VERIFICATION_LANDING_PATH").unwrap_or_else(|_| default_landing_path());

        Self {
            redirect_delay_ms,
            landing_path,
            ..Default::default()
        }
    }

    /// Redirect delay as a `Duration`
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    /// Override the redirect delay
    pub fn with_redirect_delay(mut self, delay: Duration) -> Self {
        self.redirect_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }
}

fn default_redirect_delay_ms() -> u64 {
    DEFAULT_REDIRECT_DELAY_MS
}

fn default_landing_path() -> String {
    String::from("/")
}

fn default_show_login() -> bool {
    true
}

fn default_token_param() -> String {
    String::from(DEFAULT_TOKEN_PARAM)
}
