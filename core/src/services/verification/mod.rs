//! Email verification flow
//!
//! This module drives one verification screen from the inbound link to its
//! outcome:
//! - Token extraction and a single remote verify call per token
//! - Classification of failures into `Error` and `Expired`
//! - A cancelable redirect to the landing page after success
//! - The resend sub-flow for expired links

mod controller;
mod redirect;
mod traits;

#[cfg(test)]
mod tests;

pub use controller::{TeardownHandle, VerificationController};
pub use redirect::RedirectTimer;
pub use traits::{Navigator, VerificationApi};
