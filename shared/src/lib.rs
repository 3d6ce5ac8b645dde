//! Shared configuration and common types for the EduVerify workspace
//!
//! This crate provides functionality used across the verification crates:
//! - Configuration types (environment, logging, remote service, flow timing)
//! - The wire envelope returned by the remote verification service
//! - Utility functions (input validation, masking for logs)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, ConfigError, Environment, LogFormat, LoggingConfig, RemoteServiceConfig,
    VerificationFlowConfig,
};
pub use types::RemoteResponse;
pub use utils::{masking, validation};
