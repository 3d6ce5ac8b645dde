//! Remote verification service response envelope

use serde::{Deserialize, Serialize};

/// Envelope returned by the verify-email and resend-verification endpoints
///
/// A successful call carries `message`; a failed call carries `error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteResponse {
    /// Whether the operation succeeded
    pub success: bool,

    /// Human-readable confirmation (present on success)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Human-readable failure reason (present on failure)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RemoteResponse {
    /// Create a successful response
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
        }
    }

    /// Create a failed response
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }

    /// Check if the response is successful
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Collapse into `Ok(message)` / `Err(error)`
    ///
    /// `fallback_message` and `fallback_error` fill in for a missing field so
    /// the caller always has something to show.
    pub fn into_result(self, fallback_message: &str, fallback_error: &str) -> Result<String, String> {
        if self.success {
            Ok(self.message.unwrap_or_else(|| fallback_message.to_string()))
        } else {
            Err(self.error.unwrap_or_else(|| fallback_error.to_string()))
        }
    }
}
