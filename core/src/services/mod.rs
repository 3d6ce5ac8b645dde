//! Business services containing the flow logic.

pub mod verification;

// Re-export commonly used types
pub use verification::{
    Navigator, RedirectTimer, TeardownHandle, VerificationApi, VerificationController,
};
