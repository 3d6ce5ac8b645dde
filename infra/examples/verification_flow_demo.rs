//! Example walking through the verification flow against the mock service

use std::sync::Arc;

use ev_core::{NavigationRequest, Navigator, VerificationController};
use ev_infra::MockVerificationApi;
use ev_shared::VerificationFlowConfig;

struct PrintingNavigator;

impl Navigator for PrintingNavigator {
    fn navigate(&self, request: NavigationRequest) {
        println!("→ Navigating to {}", request);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let api = Arc::new(MockVerificationApi::with_demo_data());
    let navigator = Arc::new(PrintingNavigator);

    println!("Testing Verification Flow\n");

    // Test 1: Link without a token
    println!("Test 1: Opening a link without a token");
    let mut flow = VerificationController::new(
        Arc::clone(&api),
        Arc::clone(&navigator),
        VerificationFlowConfig::default(),
    );
    let state = flow.start_from_link("/verify-email").await;
    println!("State: {} ({})\n", state, flow.message().unwrap_or_default());

    // Test 2: Expired token, then resend
    println!("Test 2: Opening an expired link");
    let mut flow = VerificationController::new(
        Arc::clone(&api),
        Arc::clone(&navigator),
        VerificationFlowConfig::default(),
    );
    let state = flow.start(Some("old999")).await;
    println!("State: {} ({})", state, flow.message().unwrap_or_default());
    match flow.resend("student@example.org").await {
        Ok(message) => println!("✓ {}\n", message),
        Err(e) => println!("✗ Failed to resend: {}\n", e),
    }

    // Test 3: Following the new link
    println!("Test 3: Following the newly issued link");
    let token = api.last_issued_token().await.ok_or("no token issued")?;
    let mut flow = VerificationController::new(
        Arc::clone(&api),
        Arc::clone(&navigator),
        VerificationFlowConfig::default(),
    );
    let state = flow.start(Some(&token)).await;
    println!("State: {} ({})", state, flow.message().unwrap_or_default());
    println!("Redirecting in {} ms...", flow.config().redirect_delay_ms);
    flow.wait_for_redirect().await;

    println!("\nVerify calls: {}", api.get_verify_count());
    println!("Resend calls: {}", api.get_resend_count());

    Ok(())
}
