//! Domain layer: the values a verification flow reads, holds and emits.

pub mod email;
pub mod navigation;
pub mod state;
pub mod token;

// Re-export commonly used domain types
pub use email::EmailInput;
pub use navigation::NavigationRequest;
pub use state::{FlowSnapshot, VerificationState};
pub use token::VerificationToken;
