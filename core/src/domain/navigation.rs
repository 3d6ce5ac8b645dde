//! Navigation requested once an address is verified.

use ev_shared::VerificationFlowConfig;
use serde::Serialize;
use std::fmt;

/// Query parameter asking the destination to open its login form
pub const SHOW_LOGIN_PARAM: &str = "showLogin";

/// Where to send the user and whether to prompt them to log in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationRequest {
    /// Destination path
    pub destination: String,
    /// Ask the destination to present a login affordance
    pub show_login: bool,
}

impl NavigationRequest {
    pub fn new(destination: impl Into<String>, show_login: bool) -> Self {
        Self {
            destination: destination.into(),
            show_login,
        }
    }

    /// Landing-page request described by the flow configuration
    pub fn landing(config: &VerificationFlowConfig) -> Self {
        Self::new(config.landing_path.clone(), config.show_login)
    }

    /// Destination with the login flag encoded as a query parameter
    pub fn target(&self) -> String {
        if !self.show_login {
            return self.destination.clone();
        }
        let separator = if self.destination.contains('?') { '&' } else { '?' };
        format!("{}{}{}=true", self.destination, separator, SHOW_LOGIN_PARAM)
    }
}

impl fmt::Display for NavigationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.target())
    }
}
