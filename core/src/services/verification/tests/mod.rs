//! Unit tests for the verification flow

mod mocks;
mod redirect_tests;
