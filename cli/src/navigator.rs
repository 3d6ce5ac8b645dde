//! Navigator that reports the redirect on the terminal

use ev_core::{NavigationRequest, Navigator};
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};

pub struct ConsoleNavigator {
    json: bool,
    navigated: AtomicBool,
}

impl ConsoleNavigator {
    pub fn new(json: bool) -> Self {
        Self {
            json,
            navigated: AtomicBool::new(false),
        }
    }

    pub fn has_navigated(&self) -> bool {
        self.navigated.load(Ordering::SeqCst)
    }

    pub fn render(&self, request: &NavigationRequest) -> String {
        if self.json {
            json!({ "navigate": request.target() }).to_string()
        } else {
            format!("→ Redirecting to {}", request)
        }
    }
}

impl Navigator for ConsoleNavigator {
    fn navigate(&self, request: NavigationRequest) {
        self.navigated.store(true, Ordering::SeqCst);
        println!("{}", self.render(&request));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text() {
        let navigator = ConsoleNavigator::new(false);
        let request = NavigationRequest::new("/", true);
        assert_eq!(navigator.render(&request), "→ Redirecting to /?showLogin=true");
    }

    #[test]
    fn test_render_json() {
        let navigator = ConsoleNavigator::new(true);
        let request = NavigationRequest::new("/", true);
        assert_eq!(navigator.render(&request), r#"{"navigate":"/?showLogin=true"}"#);
    }

    #[test]
    fn test_navigate_records() {
        let navigator = ConsoleNavigator::new(false);
        assert!(!navigator.has_navigated());
        navigator.navigate(NavigationRequest::new("/", false));
        assert!(navigator.has_navigated());
    }
}
