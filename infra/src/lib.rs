//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborators the verification flow
//! depends on.
//!
//! ## Architecture
//!
//! - **Remote**: clients for the verification service
//!   - `HttpVerificationApi` talks JSON over HTTP using reqwest
//!   - `MockVerificationApi` keeps tokens and addresses in memory for development
//! - **Factory**: `create_verification_api` picks a client from configuration

// Re-export core types for convenience
pub use ev_core::errors::*;

/// Remote verification service clients
pub mod remote;

/// Configuration module for infrastructure services
pub mod config {
    //! Configuration for infrastructure services
    //!
    //! The remote service settings live in the shared crate; they are
    //! re-exported here so callers only need one import path.

    pub use ev_shared::config::RemoteServiceConfig;

    /// Load the remote service configuration from the environment
    ///
    /// Reads a `.env` file first when one is present.
    pub fn load_remote_config() -> RemoteServiceConfig {
        dotenvy::dotenv().ok();
        RemoteServiceConfig::from_env()
    }
}

pub use remote::{create_verification_api, HttpVerificationApi, MockVerificationApi};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote service answered with something other than the expected envelope
    #[error("Unexpected response (status {status}): {message}")]
    Decode { status: u16, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl InfrastructureError {
    /// Text suitable for the verification screen
    ///
    /// Transport details stay in the logs; the user gets a short explanation.
    pub fn user_message(&self) -> String {
        match self {
            InfrastructureError::Http(e) if e.is_timeout() => {
                "The verification service took too long to respond. Please try again.".to_string()
            }
            InfrastructureError::Http(_) => {
                "Unable to reach the verification service. Please try again later.".to_string()
            }
            InfrastructureError::Decode { .. } => {
                "The verification service returned an unexpected response.".to_string()
            }
            InfrastructureError::Config(_) => {
                "Verification is not configured correctly.".to_string()
            }
        }
    }
}
