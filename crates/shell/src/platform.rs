//! Terminal implementations of the UI platform ports.

use std::cell::RefCell;

use shopfront_ui::{Navigator, NotificationSink, Route, SharePlatform, ShareRequest, Severity, Toast};

/// Single-threaded terminal host: navigation is a route cell,
/// notifications are printed lines, native sharing does not exist so the
/// clipboard fallback always runs.
pub struct TerminalPlatform {
    route: RefCell<Route>,
}

impl TerminalPlatform {
    pub fn new() -> Self {
        Self {
            route: RefCell::new(Route::catalog()),
        }
    }

    pub fn current_route(&self) -> Route {
        self.route.borrow().clone()
    }
}

impl Navigator for TerminalPlatform {
    fn push(&self, route: Route) {
        tracing::debug!(path = route.to_path(), "navigate");
        *self.route.borrow_mut() = route;
    }
}

impl NotificationSink for TerminalPlatform {
    fn notify(&self, toast: Toast) {
        let marker = match toast.severity {
            Severity::Info => "·",
            Severity::Destructive => "!",
        };
        println!("  [{marker}] {} {}", toast.title, toast.description);
    }
}

impl SharePlatform for TerminalPlatform {
    fn share(&self, _request: &ShareRequest) -> bool {
        // No native share surface in a terminal.
        false
    }

    fn copy_to_clipboard(&self, text: &str) -> bool {
        println!("  (clipboard) {text}");
        true
    }
}
