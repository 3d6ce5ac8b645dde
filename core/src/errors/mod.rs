//! Error taxonomy of the verification flow.
//!
//! The `Display` text of every variant is the status message shown to the
//! user, so a failure can be surfaced with `to_string()` and nothing else.

use thiserror::Error;

use crate::domain::VerificationState;

/// Substring of a remote verify failure that marks the link as expired
pub const EXPIRED_MARKER: &str = "expired";

/// Message for a link that carries no token
pub const INVALID_LINK_MESSAGE: &str = "Invalid verification link.";

/// Message for a resend submitted without an address
pub const MISSING_EMAIL_MESSAGE: &str = "Please enter your email address.";

/// Verification flow errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    /// The inbound link has no usable token; no remote call was made
    #[error("Invalid verification link.")]
    InvalidLink,

    /// Resend was submitted with an empty address; no remote call was made
    #[error("Please enter your email address.")]
    MissingEmail,

    /// The remote service reported the link as expired
    #[error("{message}")]
    Expired { message: String },

    /// The remote service rejected the token for any other reason
    #[error("{message}")]
    Rejected { message: String },

    /// The remote service could not reissue the link
    #[error("{message}")]
    ResendFailed { message: String },

    /// The flow was abandoned before the operation finished
    #[error("Verification flow has been torn down")]
    TornDown,
}

impl VerificationError {
    /// Classify the error text of a failed remote verify call
    ///
    /// The match is a case-sensitive substring test on [`EXPIRED_MARKER`].
    pub fn from_verify_failure(error: impl Into<String>) -> Self {
        let message = error.into();
        if message.contains(EXPIRED_MARKER) {
            VerificationError::Expired { message }
        } else {
            VerificationError::Rejected { message }
        }
    }

    /// State the flow moves to because of this error, if any
    pub fn target_state(&self) -> Option<VerificationState> {
        match self {
            VerificationError::InvalidLink | VerificationError::Rejected { .. } => {
                Some(VerificationState::Error)
            }
            VerificationError::Expired { .. } => Some(VerificationState::Expired),
            VerificationError::MissingEmail
            | VerificationError::ResendFailed { .. }
            | VerificationError::TornDown => None,
        }
    }
}

pub type VerificationResult<T> = Result<T, VerificationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_messages() {
        assert_eq!(VerificationError::InvalidLink.to_string(), INVALID_LINK_MESSAGE);
        assert_eq!(VerificationError::MissingEmail.to_string(), MISSING_EMAIL_MESSAGE);
    }

    #[test]
    fn test_expired_marker_selects_expired() {
        let error = VerificationError::from_verify_failure("This link has expired.");
        assert_eq!(
            error,
            VerificationError::Expired {
                message: "This link has expired.".to_string()
            }
        );
        assert_eq!(error.target_state(), Some(VerificationState::Expired));
    }

    #[test]
    fn test_other_failures_are_rejections() {
        let error = VerificationError::from_verify_failure("Token not found.");
        assert_eq!(error.target_state(), Some(VerificationState::Error));
        assert_eq!(error.to_string(), "Token not found.");
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        let error = VerificationError::from_verify_failure("Link Expired");
        assert!(matches!(error, VerificationError::Rejected { .. }));
    }

    #[test]
    fn test_resend_errors_keep_state() {
        let error = VerificationError::ResendFailed {
            message: "Unknown address.".to_string(),
        };
        assert_eq!(error.target_state(), None);
        assert_eq!(VerificationError::MissingEmail.target_state(), None);
    }
}
