//! Unit tests for remote verification clients

#[cfg(test)]
pub mod create_service_tests;
