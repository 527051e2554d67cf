use crate::CoreResult;

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

/// Opaque identifier of one browser window, as reported by the driver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WindowHandle(String);

impl WindowHandle {
    /// Wrap a driver-issued handle string.
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    /// The raw handle string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Live view of one browser window. Re-read on every query, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserWindow {
    /// Handle the window was read through.
    pub handle: WindowHandle,
    /// URL currently loaded in the window.
    pub url: String,
    /// Document title currently shown in the window.
    pub title: String,
}

/// Low-level browser automation commands.
///
/// One implementation owns one automation session. Every call is a
/// round trip to the driver and may suspend.
#[async_trait]
pub trait BrowserDriver: Send + Sync {
    /// Maximize the current window.
    async fn maximize_window(&self) -> CoreResult<()>;

    /// Navigate the current window to `url`.
    async fn navigate(&self, url: &str) -> CoreResult<()>;

    /// Run a synchronous script in the current page and return its result.
    async fn execute_script(&self, script: &str) -> CoreResult<Value>;

    /// All open window handles, in driver order.
    async fn window_handles(&self) -> CoreResult<Vec<WindowHandle>>;

    /// Make `handle` the current window.
    async fn switch_to_window(&self, handle: &WindowHandle) -> CoreResult<()>;

    /// URL of the current window.
    async fn current_url(&self) -> CoreResult<String>;

    /// Title of the current window.
    async fn title(&self) -> CoreResult<String>;

    /// End the automation session and close the browser.
    async fn quit(&self) -> CoreResult<()>;
}
