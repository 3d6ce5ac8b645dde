//! Traits for the remote verification service and navigation

use async_trait::async_trait;

use crate::domain::NavigationRequest;

/// Trait for the remote service that owns verification tokens
///
/// Both calls are fallible and may take a while; any timeout policy belongs
/// to the implementation.
#[async_trait]
pub trait VerificationApi: Send + Sync {
    /// Exchange a token for a verification result
    ///
    /// Returns the confirmation message on success and the error text on
    /// failure.
    async fn verify_email(&self, token: &str) -> Result<String, String>;

    /// Ask the service to send a fresh verification link to `email`
    async fn resend_verification(&self, email: &str) -> Result<String, String>;

    /// Get the provider name for logging
    fn provider_name(&self) -> &str {
        "custom"
    }
}

/// Trait for whatever hosts the flow and can move the user elsewhere
pub trait Navigator: Send + Sync {
    /// Leave the verification screen for `request`
    fn navigate(&self, request: NavigationRequest);
}
