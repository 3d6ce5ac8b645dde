//! Verification token carried by an inbound link.

use ev_shared::utils::mask_token;
use url::Url;

/// Base used to resolve relative links such as `/verify-email?token=...`
const RELATIVE_LINK_BASE: &str = "http://localhost/";

/// Opaque credential proving the right to confirm an email address
///
/// Only emptiness is checked locally; whether the token is valid is decided
/// by the remote verification service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VerificationToken(String);

impl VerificationToken {
    /// Accept a raw token value, rejecting absent or empty input
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        match raw {
            Some(value) if !value.is_empty() => Some(Self(value.to_string())),
            _ => None,
        }
    }

    /// Extract the token from the `param` query parameter of a link
    ///
    /// Accepts absolute URLs and links relative to the site root. A link that
    /// cannot be parsed, or that lacks the parameter, yields `None`.
    pub fn from_link(link: &str, param: &str) -> Option<Self> {
        let url = Url::parse(link)
            .or_else(|_| Url::parse(RELATIVE_LINK_BASE).and_then(|base| base.join(link)))
            .ok()?;

        let value = url
            .query_pairs()
            .find(|(key, _)| key == param)
            .map(|(_, value)| value.into_owned());

        Self::parse(value.as_deref())
    }

    /// The raw token
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Token with all but the last characters hidden, for logs
    pub fn masked(&self) -> String {
        mask_token(&self.0)
    }
}
