//! Platform ports: the presentation capabilities the view-models drive but
//! do not implement.

use crate::route::Route;

/// Notification severity; maps onto the host's toast styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Destructive,
}

/// A user-visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Toast {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }
}

/// Resolves route pushes (history navigation).
pub trait Navigator {
    fn push(&self, route: Route);
}

/// Displays notifications.
pub trait NotificationSink {
    fn notify(&self, toast: Toast);
}

/// Payload for the platform share capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// Best-effort share/clipboard capability. Either call may be unavailable
/// on a given host; callers must keep a fallback path.
pub trait SharePlatform {
    /// Invoke the native share surface. `false` means unavailable.
    fn share(&self, request: &ShareRequest) -> bool;

    /// Copy text to the clipboard. `false` means unavailable.
    fn copy_to_clipboard(&self, text: &str) -> bool;
}
