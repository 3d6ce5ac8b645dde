//! One-shot delayed navigation after a successful verification

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::domain::NavigationRequest;

use super::traits::Navigator;

/// Scheduled redirect owned by a verification flow
///
/// The navigation fires at most once, after the delay, unless the timer is
/// cancelled first. Cancelling the parent token passed to
/// [`RedirectTimer::schedule`] cancels the timer too. Dropping the timer
/// cancels it.
pub struct RedirectTimer {
    handle: Option<JoinHandle<()>>,
    fired: Arc<AtomicBool>,
    cancel: CancellationToken,
}

impl RedirectTimer {
    /// Spawn the redirect task on the current tokio runtime
    ///
    /// # Arguments
    ///
    /// * `navigator` - Receives the request when the delay elapses
    /// * `request` - Where to send the user
    /// * `delay` - Time between scheduling and navigation
    /// * `parent` - Cancellation token of the owning flow
    pub fn schedule<N>(
        navigator: Arc<N>,
        request: NavigationRequest,
        delay: Duration,
        parent: &CancellationToken,
    ) -> Self
    where
        N: Navigator + ?Sized + 'static,
    {
        let fired = Arc::new(AtomicBool::new(false));
        let cancel = parent.child_token();

        let task_fired = Arc::clone(&fired);
        let task_cancel = cancel.clone();
        let handle = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = task_cancel.cancelled() => {
                    debug!(
                        destination = %request,
                        event = "redirect_cancelled",
                        "Redirect cancelled before the delay elapsed"
                    );
                }
                _ = tokio::time::sleep(delay) => {
                    task_fired.store(true, Ordering::SeqCst);
                    info!(
                        destination = %request,
                        event = "redirect_fired",
                        "Redirecting to landing page"
                    );
                    navigator.navigate(request);
                }
            }
        });

        Self {
            handle: Some(handle),
            fired,
            cancel,
        }
    }

    /// Whether the navigation has happened
    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }

    /// Whether the navigation is still waiting for its delay
    pub fn is_pending(&self) -> bool {
        !self.has_fired()
            && !self.cancel.is_cancelled()
            && self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Stop the redirect
    ///
    /// Returns `true` if a pending navigation was prevented.
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.is_pending();
        self.cancel.cancel();
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        was_pending
    }

    /// Wait until the redirect either fires or is cancelled
    ///
    /// Returns whether the navigation happened.
    pub async fn wait(&mut self) -> bool {
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                if e.is_panic() {
                    warn!(error = %e, "Redirect task panicked");
                }
            }
        }
        self.has_fired()
    }
}

impl Drop for RedirectTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
