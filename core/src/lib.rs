//! # EduVerify Core
//!
//! Domain and flow logic for confirming a user's email address from an
//! inbound verification link. This crate contains the domain types, the error
//! taxonomy, the collaborator traits for the remote verification service and
//! for navigation, and the `VerificationController` that drives one flow.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
