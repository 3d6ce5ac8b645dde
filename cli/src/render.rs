//! Terminal rendering of flow snapshots

use ev_core::{FlowSnapshot, VerificationState};

/// Turns the stream of snapshots into output lines
///
/// Text output skips snapshots that only toggle `busy`; JSON output skips
/// only exact repeats.
pub struct SnapshotPrinter {
    json: bool,
    last: Option<FlowSnapshot>,
}

impl SnapshotPrinter {
    pub fn new(json: bool) -> Self {
        Self { json, last: None }
    }

    pub fn render(&mut self, snapshot: &FlowSnapshot) -> Option<String> {
        let line = match &self.last {
            Some(last) if last == snapshot => None,
            Some(last)
                if !self.json
                    && last.state == snapshot.state
                    && last.message == snapshot.message =>
            {
                None
            }
            _ if self.json => serde_json::to_string(snapshot).ok(),
            _ => Some(render_text(snapshot)),
        };
        self.last = Some(snapshot.clone());
        line
    }
}

fn headline(state: VerificationState) -> &'static str {
    match state {
        VerificationState::Verifying => "… Verifying your email",
        VerificationState::Success => "✓ Email verified",
        VerificationState::Error => "✗ Verification failed",
        VerificationState::Expired => "! Verification link expired",
    }
}

pub fn render_text(snapshot: &FlowSnapshot) -> String {
    let mut line = headline(snapshot.state).to_string();
    if let Some(message) = &snapshot.message {
        line.push_str(": ");
        line.push_str(message);
    }
    if snapshot.redirect_pending {
        line.push_str(" (redirecting shortly)");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(state: VerificationState, message: Option<&str>, busy: bool) -> FlowSnapshot {
        FlowSnapshot {
            state,
            message: message.map(str::to_string),
            busy,
            redirect_pending: false,
        }
    }

    #[test]
    fn test_text_success_with_redirect() {
        let mut success = snapshot(
            VerificationState::Success,
            Some("Your email has been verified."),
            false,
        );
        success.redirect_pending = true;

        assert_eq!(
            render_text(&success),
            "✓ Email verified: Your email has been verified. (redirecting shortly)"
        );
    }

    #[test]
    fn test_text_skips_busy_toggles() {
        let mut printer = SnapshotPrinter::new(false);

        assert!(printer
            .render(&snapshot(VerificationState::Verifying, None, false))
            .is_some());
        assert!(printer
            .render(&snapshot(VerificationState::Verifying, None, true))
            .is_none());
        assert_eq!(
            printer.render(&snapshot(
                VerificationState::Error,
                Some("Invalid verification token."),
                false
            )),
            Some("✗ Verification failed: Invalid verification token.".to_string())
        );
    }

    #[test]
    fn test_json_reports_busy_toggles() {
        let mut printer = SnapshotPrinter::new(true);

        let first = printer.render(&snapshot(VerificationState::Expired, Some("expired"), false));
        let busy = printer.render(&snapshot(VerificationState::Expired, Some("expired"), true));
        let repeat = printer.render(&snapshot(VerificationState::Expired, Some("expired"), true));

        assert_eq!(
            first.as_deref(),
            Some(r#"{"state":"expired","message":"expired","busy":false,"redirect_pending":false}"#)
        );
        assert!(busy.unwrap().contains(r#""busy":true"#));
        assert!(repeat.is_none());
    }

    #[test]
    fn test_json_omits_missing_message() {
        let mut printer = SnapshotPrinter::new(true);
        let line = printer
            .render(&snapshot(VerificationState::Verifying, None, true))
            .unwrap();
        assert!(!line.contains("message"));
    }
}
