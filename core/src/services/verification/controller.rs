//! Verification controller driving a single verification screen

use std::collections::HashSet;
use std::sync::Arc;

use ev_shared::VerificationFlowConfig;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::{EmailInput, FlowSnapshot, NavigationRequest, VerificationState, VerificationToken};
use crate::errors::{VerificationError, VerificationResult};

use super::redirect::RedirectTimer;
use super::traits::{Navigator, VerificationApi};

/// Cloneable handle that abandons a flow from another task
///
/// Tearing down cancels any outstanding remote call and the pending redirect;
/// the controller then ignores further input.
#[derive(Debug, Clone)]
pub struct TeardownHandle {
    cancel: CancellationToken,
}

impl TeardownHandle {
    pub fn teardown(&self) {
        self.cancel.cancel();
    }

    pub fn is_torn_down(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Resolves once the flow has been torn down
    pub async fn torn_down(&self) {
        self.cancel.cancelled().await
    }
}

/// Controller owning the lifecycle of one email verification flow
///
/// One instance per rendered verification screen. It verifies each distinct
/// token at most once, schedules the landing-page redirect on success, and
/// offers resending the link when the token has expired.
pub struct VerificationController<A, N>
where
    A: VerificationApi + ?Sized,
    N: Navigator + ?Sized + 'static,
{
    /// Correlates the log events of this flow
    flow_id: Uuid,
    /// Remote verification service
    api: Arc<A>,
    /// Receives the post-verification redirect
    navigator: Arc<N>,
    /// Flow configuration
    config: VerificationFlowConfig,
    state: VerificationState,
    message: Option<String>,
    /// States entered so far, in order
    transitions: Vec<VerificationState>,
    /// Tokens already dispatched to the remote service
    submitted: HashSet<VerificationToken>,
    busy: bool,
    redirect: Option<RedirectTimer>,
    cancel: CancellationToken,
    updates: watch::Sender<FlowSnapshot>,
}

impl<A, N> VerificationController<A, N>
where
    A: VerificationApi + ?Sized,
    N: Navigator + ?Sized + 'static,
{
    /// Create a controller for a new flow
    ///
    /// No state is entered until [`start`](Self::start) is called; until then
    /// [`state`](Self::state) reports `Verifying`.
    pub fn new(api: Arc<A>, navigator: Arc<N>, config: VerificationFlowConfig) -> Self {
        let (updates, _) = watch::channel(FlowSnapshot::default());
        Self {
            flow_id: Uuid::new_v4(),
            api,
            navigator,
            config,
            state: VerificationState::Verifying,
            message: None,
            transitions: Vec::new(),
            submitted: HashSet::new(),
            busy: false,
            redirect: None,
            cancel: CancellationToken::new(),
            updates,
        }
    }

    /// Identifier attached to this flow's log events
    pub fn flow_id(&self) -> Uuid {
        self.flow_id
    }

    pub fn config(&self) -> &VerificationFlowConfig {
        &self.config
    }

    pub fn state(&self) -> VerificationState {
        self.state
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// States entered so far, oldest first
    pub fn transitions(&self) -> &[VerificationState] {
        &self.transitions
    }

    /// Whether a remote call is outstanding
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_torn_down(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Whether the landing-page redirect is scheduled and has not fired
    pub fn redirect_pending(&self) -> bool {
        self.redirect.as_ref().is_some_and(RedirectTimer::is_pending)
    }

    /// Current view of the flow
    pub fn snapshot(&self) -> FlowSnapshot {
        FlowSnapshot {
            state: self.state,
            message: self.message.clone(),
            busy: self.busy,
            redirect_pending: self.redirect_pending(),
        }
    }

    /// Receive a snapshot after every change
    pub fn subscribe(&self) -> watch::Receiver<FlowSnapshot> {
        self.updates.subscribe()
    }

    /// Handle for tearing the flow down from another task
    pub fn teardown_handle(&self) -> TeardownHandle {
        TeardownHandle {
            cancel: self.cancel.clone(),
        }
    }

    /// Start verification with the token found in an inbound link
    pub async fn start_from_link(&mut self, link: &str) -> VerificationState {
        let token = VerificationToken::from_link(link, &self.config.token_param);
        self.start(token.as_ref().map(VerificationToken::as_str)).await
    }

    /// Start verification with `token`
    ///
    /// This method:
    /// 1. Moves to `Error` without a remote call when the token is absent or empty
    /// 2. Ignores tokens this flow has already dispatched
    /// 3. Calls the remote verify operation once and awaits it
    /// 4. Moves to `Success` and schedules the redirect, or to `Expired`/`Error`
    ///
    /// Returns the state after the call. Once the flow has succeeded or has
    /// been torn down, further calls change nothing.
    pub async fn start(&mut self, token: Option<&str>) -> VerificationState {
        if self.is_torn_down() {
            debug!(flow_id = %self.flow_id, "Ignoring start on a torn down flow");
            return self.state;
        }
        if self.state == VerificationState::Success {
            debug!(flow_id = %self.flow_id, "Ignoring start on a verified flow");
            return self.state;
        }

        let Some(token) = VerificationToken::parse(token) else {
            warn!(
                flow_id = %self.flow_id,
                event = "invalid_link",
                "Verification link carries no token"
            );
            self.fail(VerificationError::InvalidLink);
            return self.state;
        };

        if !self.submitted.insert(token.clone()) {
            debug!(
                flow_id = %self.flow_id,
                token = %token.masked(),
                event = "duplicate_token",
                "Token already submitted for this flow"
            );
            return self.state;
        }

        if self.transitions.is_empty() {
            self.enter(VerificationState::Verifying, None);
        }

        info!(
            flow_id = %self.flow_id,
            token = %token.masked(),
            provider = self.api.provider_name(),
            event = "verify_dispatched",
            "Verifying email token"
        );
        self.set_busy(true);

        let api = Arc::clone(&self.api);
        let cancel = self.cancel.clone();
        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            result = api.verify_email(token.as_str()) => Some(result),
        };
        self.busy = false;

        let Some(result) = outcome else {
            info!(
                flow_id = %self.flow_id,
                event = "verify_abandoned",
                "Flow torn down while verification was outstanding"
            );
            return self.state;
        };

        match result {
            Ok(message) => {
                info!(
                    flow_id = %self.flow_id,
                    token = %token.masked(),
                    event = "email_verified",
                    "Email verified"
                );
                self.schedule_redirect();
                self.enter(VerificationState::Success, Some(message));
            }
            Err(error) => {
                let error = VerificationError::from_verify_failure(error);
                warn!(
                    flow_id = %self.flow_id,
                    token = %token.masked(),
                    error = %error,
                    event = "verify_failed",
                    "Email verification failed"
                );
                self.fail(error);
            }
        }

        self.state
    }

    /// Ask the remote service to send a new verification link to `email`
    ///
    /// Allowed in any state; the state itself never changes. An empty address
    /// is rejected locally with [`VerificationError::MissingEmail`].
    ///
    /// # Returns
    ///
    /// * `Ok(message)` - Confirmation from the remote service, now the status message
    /// * `Err(VerificationError)` - Why nothing was sent, also the status message
    ///   unless the flow was torn down
    pub async fn resend(&mut self, email: &str) -> VerificationResult<String> {
        if self.is_torn_down() {
            return Err(VerificationError::TornDown);
        }

        let input = EmailInput::new(email);
        let Some(address) = input.address() else {
            self.set_message(VerificationError::MissingEmail.to_string());
            return Err(VerificationError::MissingEmail);
        };

        if !self.state.offers_resend() {
            debug!(
                flow_id = %self.flow_id,
                state = %self.state,
                "Resend requested outside the expired state"
            );
        }

        info!(
            flow_id = %self.flow_id,
            email = %input.masked(),
            event = "resend_dispatched",
            "Requesting a new verification email"
        );
        self.set_busy(true);

        let api = Arc::clone(&self.api);
        let cancel = self.cancel.clone();
        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            result = api.resend_verification(address) => Some(result),
        };
        self.busy = false;

        match outcome {
            None => Err(VerificationError::TornDown),
            Some(Ok(message)) => {
                info!(
                    flow_id = %self.flow_id,
                    email = %input.masked(),
                    event = "resend_succeeded",
                    "Verification email resent"
                );
                self.set_message(message.clone());
                Ok(message)
            }
            Some(Err(error)) => {
                warn!(
                    flow_id = %self.flow_id,
                    email = %input.masked(),
                    error = %error,
                    event = "resend_failed",
                    "Failed to resend verification email"
                );
                let error = VerificationError::ResendFailed { message: error };
                self.set_message(error.to_string());
                Err(error)
            }
        }
    }

    /// Wait for the scheduled redirect to fire or be cancelled
    ///
    /// Returns whether navigation happened; `false` when nothing is scheduled.
    pub async fn wait_for_redirect(&mut self) -> bool {
        match self.redirect.as_mut() {
            Some(redirect) => redirect.wait().await,
            None => false,
        }
    }

    /// Abandon the flow
    ///
    /// Cancels the pending redirect and any outstanding call. Afterwards the
    /// flow performs no navigation and no state update.
    pub fn teardown(&mut self) {
        if self.is_torn_down() {
            return;
        }
        self.cancel.cancel();
        self.busy = false;

        let redirect_cancelled = self
            .redirect
            .as_mut()
            .is_some_and(RedirectTimer::cancel);
        info!(
            flow_id = %self.flow_id,
            state = %self.state,
            redirect_cancelled = redirect_cancelled,
            event = "flow_torn_down",
            "Verification flow torn down"
        );
    }

    fn schedule_redirect(&mut self) {
        let request = NavigationRequest::landing(&self.config);
        let delay = self.config.redirect_delay();
        debug!(
            flow_id = %self.flow_id,
            destination = %request,
            delay_ms = self.config.redirect_delay_ms,
            "Scheduling redirect"
        );
        self.redirect = Some(RedirectTimer::schedule(
            Arc::clone(&self.navigator),
            request,
            delay,
            &self.cancel,
        ));
    }

    fn fail(&mut self, error: VerificationError) {
        let state = error.target_state().unwrap_or(self.state);
        self.enter(state, Some(error.to_string()));
    }

    fn enter(&mut self, state: VerificationState, message: Option<String>) {
        if self.transitions.last() != Some(&state) {
            self.transitions.push(state);
        }
        self.state = state;
        self.message = message;
        self.publish();
    }

    fn set_message(&mut self, message: String) {
        self.message = Some(message);
        self.publish();
    }

    fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
        self.publish();
    }

    fn publish(&self) {
        self.updates.send_replace(self.snapshot());
    }
}

impl<A, N> Drop for VerificationController<A, N>
where
    A: VerificationApi + ?Sized,
    N: Navigator + ?Sized + 'static,
{
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
