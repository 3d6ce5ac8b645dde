//! Type definitions shared between the flow and its adapters
//!
//! - `response` - Envelope returned by the remote verification service

pub mod response;

pub use response::RemoteResponse;
