//! Recording doubles for the platform ports.

use std::cell::RefCell;

use crate::ports::{Navigator, NotificationSink, SharePlatform, ShareRequest, Toast};
use crate::route::Route;

#[derive(Default)]
pub struct RecordingNavigator {
    routes: RefCell<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn push(&self, route: Route) {
        self.routes.borrow_mut().push(route);
    }
}

#[derive(Default)]
pub struct RecordingSink {
    toasts: RefCell<Vec<Toast>>,
}

impl RecordingSink {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.borrow().clone()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, toast: Toast) {
        self.toasts.borrow_mut().push(toast);
    }
}

pub struct SharePlatformStub {
    native_share: bool,
    shared: RefCell<Vec<ShareRequest>>,
    copied: RefCell<Vec<String>>,
}

impl SharePlatformStub {
    pub fn with_native_share() -> Self {
        Self {
            native_share: true,
            shared: RefCell::default(),
            copied: RefCell::default(),
        }
    }

    pub fn without_native_share() -> Self {
        Self {
            native_share: false,
            shared: RefCell::default(),
            copied: RefCell::default(),
        }
    }

    pub fn shared(&self) -> Vec<ShareRequest> {
        self.shared.borrow().clone()
    }

    pub fn copied(&self) -> Vec<String> {
        self.copied.borrow().clone()
    }
}

impl SharePlatform for SharePlatformStub {
    fn share(&self, request: &ShareRequest) -> bool {
        if self.native_share {
            self.shared.borrow_mut().push(request.clone());
        }
        self.native_share
    }

    fn copy_to_clipboard(&self, text: &str) -> bool {
        self.copied.borrow_mut().push(text.to_string());
        true
    }
}
