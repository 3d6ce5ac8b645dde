//! Email address typed into the resend form.

use ev_shared::utils::{mask_email, validators};

/// User-supplied address for a resend request
///
/// The only local rule is that something was entered. The value is sent as
/// typed; the remote service decides whether the address is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailInput(String);

impl EmailInput {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The address exactly as entered, or `None` for an empty input
    pub fn address(&self) -> Option<&str> {
        validators::not_empty(&self.0).then_some(self.0.as_str())
    }

    /// Address with the local part hidden, for logs
    pub fn masked(&self) -> String {
        mask_email(&self.0)
    }
}
