//! Remote Verification Service Module
//!
//! Clients for the service that owns verification tokens and sends
//! verification emails.
//!
//! ## Features
//!
//! - **HTTP Client**: JSON over HTTP via reqwest
//! - **Mock Implementation**: in-memory tokens for development
//! - **Security**: tokens and addresses are masked in logs

mod http_client;
mod mock_remote;

pub use http_client::{
    HttpVerificationApi, DEFAULT_RESEND_ERROR, DEFAULT_RESENT_MESSAGE, DEFAULT_VERIFIED_MESSAGE,
    DEFAULT_VERIFY_ERROR,
};
pub use mock_remote::MockVerificationApi;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use ev_core::VerificationApi;
use ev_shared::RemoteServiceConfig;

use crate::InfrastructureError;

/// Create a verification API client based on configuration
///
/// `"http"` builds an [`HttpVerificationApi`]; `"mock"` builds a
/// [`MockVerificationApi`] with demo data. Unknown providers fall back to
/// the mock with a warning.
pub fn create_verification_api(
    config: &RemoteServiceConfig,
) -> Result<Arc<dyn VerificationApi>, InfrastructureError> {
    match config.provider.as_str() {
        "http" => Ok(Arc::new(HttpVerificationApi::new(config.clone())?)),
        "mock" => Ok(Arc::new(MockVerificationApi::with_demo_data())),
        _ => {
            tracing::warn!(
                "Unknown verification provider '{}', using mock implementation",
                config.provider
            );
            Ok(Arc::new(MockVerificationApi::with_demo_data()))
        }
    }
}
