use crate::{
    BrowserController, BrowserDriver, BrowserWindow, CoreResult, RecorderError, WindowHandle,
    matching::{ExactOrSubstring, MatchStrategy},
};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{debug, info, instrument, warn};

/// Finds the browser window showing a given URL.
///
/// First match wins. Duplicate tabs on the same URL are not told apart:
/// whichever the driver enumerates first is returned.
#[derive(Debug, Clone, Default)]
pub struct WindowMatcher<S = ExactOrSubstring> {
    strategy: S,
}

impl WindowMatcher {
    /// Matcher using [`ExactOrSubstring`].
    pub fn new() -> Self {
        Self::with_strategy(ExactOrSubstring)
    }
}

impl<S: MatchStrategy> WindowMatcher<S> {
    /// Matcher using a custom strategy.
    pub fn with_strategy(strategy: S) -> Self {
        Self { strategy }
    }

    /// Whether a window reporting `window_url` shows `target_url`.
    pub fn is_match(&self, window_url: &str, target_url: &str) -> bool {
        self.strategy.matches(window_url, target_url)
    }

    /// Read each handle's URL in order and return the first that matches.
    ///
    /// Reading switches the browser's current window, so on return the
    /// current window is the matched one (or the last handle read). The
    /// title is fetched for the matched window only.
    ///
    /// # Errors
    ///
    /// Returns [`RecorderError::WindowNotFound`] if no handle matches, or
    /// [`RecorderError::Automation`] if a read fails.
    #[instrument(skip(self, browser, handles), fields(handles = handles.len()))]
    pub async fn find<D: BrowserDriver>(
        &self,
        browser: &BrowserController<D>,
        target_url: &str,
        handles: &[WindowHandle],
    ) -> CoreResult<BrowserWindow> {
        for handle in handles {
            let url = browser.window_url(handle).await?;
            debug!(handle = %handle, url = %url, "Checking window");

            if self.is_match(&url, target_url) {
                let title = browser.current_title().await?;
                info!(handle = %handle, title = %title, "Matched browser window");
                return Ok(BrowserWindow {
                    handle: handle.clone(),
                    url,
                    title,
                });
            }
        }

        warn!(target_url = %target_url, "No matching window found for the given URL");

        Err(RecorderError::WindowNotFound {
            url: target_url.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
