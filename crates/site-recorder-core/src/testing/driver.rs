use crate::{BrowserDriver, CoreResult, RecorderError, WindowHandle};

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, Clone)]
struct FakeWindow {
    handle: WindowHandle,
    url: String,
    title: String,
}

#[derive(Debug, Default)]
struct DriverState {
    windows: Vec<FakeWindow>,
    current: usize,
    scripts: Vec<String>,
    title_reads: usize,
    quit: bool,
}

/// In-memory browser with a list of windows.
///
/// Starts with one window, `main`, on `about:blank`. Navigation rewrites the
/// current window's URL and sets its title to the URL's host-ish tail.
#[derive(Debug)]
pub struct FakeDriver {
    state: Mutex<DriverState>,
    ignore_navigation: bool,
    fail_navigation: bool,
    hang_on_handles: bool,
}

impl Default for FakeDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeDriver {
    /// One blank window.
    pub fn new() -> Self {
        let main = FakeWindow {
            handle: WindowHandle::new("main"),
            url: "about:blank".to_string(),
            title: String::new(),
        };
        Self {
            state: Mutex::new(DriverState {
                windows: vec![main],
                ..DriverState::default()
            }),
            ignore_navigation: false,
            fail_navigation: false,
            hang_on_handles: false,
        }
    }

    /// Add another open window.
    pub fn with_window(self, handle: &str, url: &str, title: &str) -> Self {
        self.lock().windows.push(FakeWindow {
            handle: WindowHandle::new(handle),
            url: url.to_string(),
            title: title.to_string(),
        });
        self
    }

    /// Accept navigation commands but leave every window where it is.
    pub fn ignoring_navigation(mut self) -> Self {
        self.ignore_navigation = true;
        self
    }

    /// Reject navigation commands.
    pub fn failing_navigation(mut self) -> Self {
        self.fail_navigation = true;
        self
    }

    /// Never answer a window enumeration.
    pub fn hanging_on_handles(mut self) -> Self {
        self.hang_on_handles = true;
        self
    }

    /// Scripts executed so far, in order.
    pub fn executed_scripts(&self) -> Vec<String> {
        self.lock().scripts.clone()
    }

    /// Number of viewport scrolls executed so far.
    pub fn scroll_count(&self) -> usize {
        self.lock()
            .scripts
            .iter()
            .filter(|s| s.contains("scrollBy"))
            .count()
    }

    /// Number of title reads so far.
    pub fn title_reads(&self) -> usize {
        self.lock().title_reads
    }

    /// Handle of the current window.
    pub fn current_handle(&self) -> WindowHandle {
        let state = self.lock();
        state.windows[state.current].handle.clone()
    }

    /// Whether [`BrowserDriver::quit`] was called.
    pub fn has_quit(&self) -> bool {
        self.lock().quit
    }

    fn lock(&self) -> MutexGuard<'_, DriverState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl BrowserDriver for FakeDriver {
    async fn maximize_window(&self) -> CoreResult<()> {
        Ok(())
    }

    async fn navigate(&self, url: &str) -> CoreResult<()> {
        if self.fail_navigation {
            return Err(RecorderError::automation("unknown error: net::ERR_NAME_NOT_RESOLVED"));
        }
        if !self.ignore_navigation {
            let mut state = self.lock();
            let current = state.current;
            state.windows[current].url = url.to_string();
            state.windows[current].title = url.rsplit('/').find(|s| !s.is_empty()).unwrap_or(url).to_string();
        }
        Ok(())
    }

    async fn execute_script(&self, script: &str) -> CoreResult<Value> {
        self.lock().scripts.push(script.to_string());
        Ok(Value::Null)
    }

    async fn window_handles(&self) -> CoreResult<Vec<WindowHandle>> {
        if self.hang_on_handles {
            std::future::pending::<()>().await;
        }
        Ok(self.lock().windows.iter().map(|w| w.handle.clone()).collect())
    }

    async fn switch_to_window(&self, handle: &WindowHandle) -> CoreResult<()> {
        let mut state = self.lock();
        let index = state
            .windows
            .iter()
            .position(|w| &w.handle == handle)
            .ok_or_else(|| RecorderError::automation(format!("no such window: {}", handle)))?;
        state.current = index;
        Ok(())
    }

    async fn current_url(&self) -> CoreResult<String> {
        let state = self.lock();
        Ok(state.windows[state.current].url.clone())
    }

    async fn title(&self) -> CoreResult<String> {
        let mut state = self.lock();
        state.title_reads += 1;
        Ok(state.windows[state.current].title.clone())
    }

    async fn quit(&self) -> CoreResult<()> {
        self.lock().quit = true;
        Ok(())
    }
}
