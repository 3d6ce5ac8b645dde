//! Verification flow state and the snapshot published to observers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stage of a verification flow; exactly one is active and it drives rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationState {
    /// A token was found and the remote check is outstanding
    Verifying,
    /// The address is confirmed; a redirect to the landing page is scheduled
    Success,
    /// The link is unusable; the user has to obtain a new one
    Error,
    /// The link has expired; the user may request a new one by email
    Expired,
}

impl VerificationState {
    /// Stable lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationState::Verifying => "verifying",
            VerificationState::Success => "success",
            VerificationState::Error => "error",
            VerificationState::Expired => "expired",
        }
    }

    /// Whether the resend form belongs on screen
    pub fn offers_resend(&self) -> bool {
        matches!(self, VerificationState::Expired)
    }
}

impl fmt::Display for VerificationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a view needs to render the flow at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowSnapshot {
    /// Current state
    pub state: VerificationState,
    /// Status message attached to the state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// A remote call is outstanding; the triggering action should be disabled
    pub busy: bool,
    /// A post-verification redirect is scheduled but has not fired
    pub redirect_pending: bool,
}

impl Default for FlowSnapshot {
    fn default() -> Self {
        Self {
            state: VerificationState::Verifying,
            message: None,
            busy: false,
            redirect_pending: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_expired_offers_resend() {
        assert!(VerificationState::Expired.offers_resend());
        assert!(!VerificationState::Error.offers_resend());
    }

    #[test]
    fn test_snapshot_serializes_lowercase_state() {
        let snapshot = FlowSnapshot {
            state: VerificationState::Expired,
            message: Some("This link has expired.".to_string()),
            busy: false,
            redirect_pending: false,
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["state"], "expired");
        assert_eq!(json["message"], "This link has expired.");
    }
}
