use crate::{BrowserDriver, BrowserWindow, CoreResult, Timings, WindowHandle};

use std::time::Duration;

use tokio::time::{Instant, sleep};
use tracing::{debug, info, instrument};

const FOCUS_SCRIPT: &str = "window.focus();";
const SCROLL_SCRIPT: &str = "window.scrollBy(0, window.innerHeight);";

/// High-level operations on the single shared browser session.
///
/// # Active Window
///
/// The driver has exactly one "current" window. [`window_url`] switches it,
/// so any caller that assumed a particular window was current must not rely
/// on that after a read.
///
/// [`window_url`]: BrowserController::window_url
pub struct BrowserController<D> {
    driver: D,
    page_settle: Duration,
    scroll_pause: Duration,
}

impl<D: BrowserDriver> BrowserController<D> {
    /// Wrap an open automation session.
    pub fn new(driver: D, timings: &Timings) -> Self {
        Self {
            driver,
            page_settle: timings.page_settle,
            scroll_pause: timings.scroll_pause,
        }
    }

    /// The underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Maximize, navigate to `url`, wait for the page to settle, then focus it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RecorderError::Automation`] on the first driver failure.
    #[instrument(skip(self))]
    pub async fn open_website(&self, url: &str) -> CoreResult<()> {
        self.driver.maximize_window().await?;
        self.driver.navigate(url).await?;
        sleep(self.page_settle).await;
        self.driver.execute_script(FOCUS_SCRIPT).await?;

        info!(url = %url, "Opened website");

        Ok(())
    }

    /// All open window handles, in the order the driver reports them.
    #[instrument(skip(self))]
    pub async fn list_window_handles(&self) -> CoreResult<Vec<WindowHandle>> {
        let handles = self.driver.window_handles().await?;
        debug!(count = handles.len(), handles = ?handles, "Window handles");
        Ok(handles)
    }

    /// Switch to `handle` and read its URL.
    #[instrument(skip(self))]
    pub async fn window_url(&self, handle: &WindowHandle) -> CoreResult<String> {
        self.driver.switch_to_window(handle).await?;
        let url = self.driver.current_url().await?;

        debug!(handle = %handle, url = %url, "Read window URL");

        Ok(url)
    }

    /// Switch to `handle` and read its URL and title.
    #[instrument(skip(self))]
    pub async fn read_window(&self, handle: &WindowHandle) -> CoreResult<BrowserWindow> {
        let url = self.window_url(handle).await?;
        let title = self.current_title().await?;

        Ok(BrowserWindow {
            handle: handle.clone(),
            url,
            title,
        })
    }

    /// Title of the current window.
    pub async fn current_title(&self) -> CoreResult<String> {
        self.driver.title().await
    }

    /// Scroll one viewport height, pause, and repeat until `duration` elapses.
    ///
    /// Runs on the calling task and returns only once the deadline has
    /// passed. Returns the number of scroll commands issued.
    #[instrument(skip(self))]
    pub async fn scroll_continuously(&self, duration: Duration) -> CoreResult<u32> {
        let started = Instant::now();
        let mut scrolls = 0u32;

        while started.elapsed() < duration {
            self.driver.execute_script(SCROLL_SCRIPT).await?;
            scrolls += 1;
            sleep(self.scroll_pause).await;
        }

        debug!(scrolls, "Scrolling finished");

        Ok(scrolls)
    }

    /// End the automation session.
    #[instrument(skip(self))]
    pub async fn quit(&self) -> CoreResult<()> {
        self.driver.quit().await
    }
}
