//! Unit tests for the redirect timer

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::domain::NavigationRequest;
use crate::services::verification::RedirectTimer;

use super::mocks::RecordingNavigator;

fn landing() -> NavigationRequest {
    NavigationRequest::new("/", true)
}

#[tokio::test(start_paused = true)]
async fn test_timer_fires_after_delay() {
    let navigator = Arc::new(RecordingNavigator::new());
    let parent = CancellationToken::new();
    let mut timer = RedirectTimer::schedule(
        Arc::clone(&navigator),
        landing(),
        Duration::from_millis(3000),
        &parent,
    );

    assert!(timer.is_pending());
    assert!(!timer.has_fired());

    assert!(timer.wait().await);
    assert_eq!(navigator.count(), 1);
    assert!(!timer.is_pending());
}

#[tokio::test(start_paused = true)]
async fn test_cancel_prevents_navigation() {
    let navigator = Arc::new(RecordingNavigator::new());
    let parent = CancellationToken::new();
    let mut timer = RedirectTimer::schedule(
        Arc::clone(&navigator),
        landing(),
        Duration::from_millis(3000),
        &parent,
    );

    tokio::time::sleep(Duration::from_millis(2000)).await;
    assert!(timer.cancel());
    assert!(!timer.cancel());

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(navigator.count(), 0);
    assert!(!timer.has_fired());
}

#[tokio::test(start_paused = true)]
async fn test_parent_cancellation_stops_timer() {
    let navigator = Arc::new(RecordingNavigator::new());
    let parent = CancellationToken::new();
    let mut timer = RedirectTimer::schedule(
        Arc::clone(&navigator),
        landing(),
        Duration::from_millis(3000),
        &parent,
    );

    parent.cancel();

    assert!(!timer.wait().await);
    assert_eq!(navigator.count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_cancelling_timer_leaves_parent_alone() {
    let navigator = Arc::new(RecordingNavigator::new());
    let parent = CancellationToken::new();
    let mut timer = RedirectTimer::schedule(navigator, landing(), Duration::from_secs(1), &parent);

    timer.cancel();

    assert!(!parent.is_cancelled());
}

#[tokio::test(start_paused = true)]
async fn test_cancel_after_firing_reports_nothing_prevented() {
    let navigator = Arc::new(RecordingNavigator::new());
    let parent = CancellationToken::new();
    let mut timer = RedirectTimer::schedule(
        Arc::clone(&navigator),
        landing(),
        Duration::from_millis(100),
        &parent,
    );

    tokio::time::sleep(Duration::from_millis(200)).await;

    assert!(timer.has_fired());
    assert!(!timer.cancel());
    assert_eq!(navigator.count(), 1);
}
