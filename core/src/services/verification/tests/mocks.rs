//! Mock implementations for testing the verification flow

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

use crate::domain::NavigationRequest;
use crate::services::verification::traits::{Navigator, VerificationApi};

// Mock remote verification service with scripted answers
pub struct MockVerificationApi {
    pub verify_results: HashMap<String, Result<String, String>>,
    pub resend_result: Result<String, String>,
    pub latency: Duration,
    pub verify_calls: Arc<Mutex<Vec<String>>>,
    pub resend_calls: Arc<Mutex<Vec<String>>>,
}

impl MockVerificationApi {
    pub fn new() -> Self {
        Self {
            verify_results: HashMap::new(),
            resend_result: Ok("Verification email sent.".to_string()),
            latency: Duration::ZERO,
            verify_calls: Arc::new(Mutex::new(Vec::new())),
            resend_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_verify(mut self, token: &str, result: Result<&str, &str>) -> Self {
        let result = result.map(str::to_string).map_err(str::to_string);
        self.verify_results.insert(token.to_string(), result);
        self
    }

    pub fn with_resend(mut self, result: Result<&str, &str>) -> Self {
        self.resend_result = result.map(str::to_string).map_err(str::to_string);
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn verify_calls(&self) -> Vec<String> {
        self.verify_calls.lock().unwrap().clone()
    }

    pub fn resend_calls(&self) -> Vec<String> {
        self.resend_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl VerificationApi for MockVerificationApi {
    async fn verify_email(&self, token: &str) -> Result<String, String> {
        self.verify_calls.lock().unwrap().push(token.to_string());
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.verify_results
            .get(token)
            .cloned()
            .unwrap_or_else(|| Err("Invalid verification token.".to_string()))
    }

    async fn resend_verification(&self, email: &str) -> Result<String, String> {
        self.resend_calls.lock().unwrap().push(email.to_string());
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.resend_result.clone()
    }
}

// Navigator recording every request with the instant it arrived
pub struct RecordingNavigator {
    pub requests: Mutex<Vec<(NavigationRequest, Instant)>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn first(&self) -> Option<(NavigationRequest, Instant)> {
        self.requests.lock().unwrap().first().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, request: NavigationRequest) {
        self.requests.lock().unwrap().push((request, Instant::now()));
    }
}
