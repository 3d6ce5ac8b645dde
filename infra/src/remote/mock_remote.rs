//! Mock Verification Service Implementation
//!
//! An in-memory stand-in for the remote verification service, for
//! development and testing. Tokens are single-use, expired tokens are
//! reported with an "expired" error text, and a successful resend issues a
//! fresh token that is logged instead of emailed.

use async_trait::async_trait;
use ev_core::VerificationApi;
use ev_shared::utils::{mask_email, mask_token};
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Debug, Default)]
struct MockStore {
    valid_tokens: HashSet<String>,
    expired_tokens: HashSet<String>,
    used_tokens: HashSet<String>,
    known_emails: HashSet<String>,
}

/// Mock verification service for development and testing
///
/// This implementation:
/// - Confirms registered tokens once, then reports them as used
/// - Reports expired tokens with an error containing "expired"
/// - Resends only to registered addresses, issuing a new valid token
/// - Tracks call counts for testing
#[derive(Clone)]
pub struct MockVerificationApi {
    store: Arc<RwLock<MockStore>>,
    /// Number of verify calls received
    verify_count: Arc<AtomicU64>,
    /// Number of resend calls received
    resend_count: Arc<AtomicU64>,
    /// Most recently issued token, for development
    last_issued: Arc<RwLock<Option<String>>>,
    /// Whether to simulate an unavailable service
    simulate_failure: bool,
    /// Artificial latency per call
    latency: Duration,
}

impl MockVerificationApi {
    /// Create an empty mock service
    pub fn new() -> Self {
        Self::with_options(Duration::ZERO, false)
    }

    /// Create a mock service with configurable options
    pub fn with_options(latency: Duration, simulate_failure: bool) -> Self {
        Self {
            store: Arc::new(RwLock::new(MockStore::default())),
            verify_count: Arc::new(AtomicU64::new(0)),
            resend_count: Arc::new(AtomicU64::new(0)),
            last_issued: Arc::new(RwLock::new(None)),
            simulate_failure,
            latency,
        }
    }

    /// Create a mock service preloaded with demo data
    ///
    /// `abc123` verifies, `old999` is expired, and `student@example.org`
    /// can request a new link.
    pub fn with_demo_data() -> Self {
        let store = MockStore {
            valid_tokens: HashSet::from(["abc123".to_string()]),
            expired_tokens: HashSet::from(["old999".to_string()]),
            used_tokens: HashSet::new(),
            known_emails: HashSet::from(["student@example.org".to_string()]),
        };
        Self {
            store: Arc::new(RwLock::new(store)),
            latency: Duration::from_millis(300),
            ..Self::new()
        }
    }

    /// Register a token that verifies successfully once
    pub async fn register_valid_token(&self, token: impl Into<String>) {
        self.store.write().await.valid_tokens.insert(token.into());
    }

    /// Register a token that is reported as expired
    pub async fn register_expired_token(&self, token: impl Into<String>) {
        self.store.write().await.expired_tokens.insert(token.into());
    }

    /// Register an address that may request a new link
    pub async fn register_email(&self, email: impl Into<String>) {
        self.store.write().await.known_emails.insert(email.into());
    }

    /// Get the number of verify calls received
    pub fn get_verify_count(&self) -> u64 {
        self.verify_count.load(Ordering::SeqCst)
    }

    /// Get the number of resend calls received
    pub fn get_resend_count(&self) -> u64 {
        self.resend_count.load(Ordering::SeqCst)
    }

    /// Token issued by the most recent successful resend
    pub async fn last_issued_token(&self) -> Option<String> {
        self.last_issued.read().await.clone()
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&mut self, simulate: bool) {
        self.simulate_failure = simulate;
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for MockVerificationApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VerificationApi for MockVerificationApi {
    async fn verify_email(&self, token: &str) -> Result<String, String> {
        self.verify_count.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;

        if self.simulate_failure {
            warn!(
                target: "verification_service",
                provider = "mock",
                token = %mask_token(token),
                "Mock verification service simulating failure"
            );
            return Err("Verification service is temporarily unavailable.".to_string());
        }

        let mut store = self.store.write().await;
        if store.valid_tokens.remove(token) {
            store.used_tokens.insert(token.to_string());
            info!(
                target: "verification_service",
                provider = "mock",
                token = %mask_token(token),
                "Token verified (mock)"
            );
            return Ok("Your email has been verified.".to_string());
        }
        if store.expired_tokens.contains(token) {
            return Err("This verification link has expired.".to_string());
        }
        if store.used_tokens.contains(token) {
            return Err("This verification link has already been used.".to_string());
        }
        Err("Invalid verification token.".to_string())
    }

    async fn resend_verification(&self, email: &str) -> Result<String, String> {
        self.resend_count.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;

        if self.simulate_failure {
            warn!(
                target: "verification_service",
                provider = "mock",
                email = %mask_email(email),
                "Mock verification service simulating failure"
            );
            return Err("Verification service is temporarily unavailable.".to_string());
        }

        let mut store = self.store.write().await;
        if !store.known_emails.contains(email) {
            return Err("No account found for this email address.".to_string());
        }

        let token = Uuid::new_v4().simple().to_string();
        store.valid_tokens.insert(token.clone());
        *self.last_issued.write().await = Some(token.clone());

        info!(
            target: "verification_service",
            provider = "mock",
            email = %mask_email(email),
            link = %format!("/verify-email?token={}", token),
            "Verification email resent (mock)"
        );

        Ok(format!("A new verification link has been sent to {}.", email))
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
