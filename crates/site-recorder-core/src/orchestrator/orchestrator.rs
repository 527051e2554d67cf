//! End-to-end recording lifecycle.

use crate::{
    BrowserController, BrowserDriver, BrowserWindow, CaptureSettings, CaptureSource,
    CaptureSourceResolver, CoreResult, NewCaptureSource, RecorderError, RecordingControl,
    RecordingOutcome, RecordingRequest, RecordingSession, StageFailure, Timings, WindowMatcher,
};

use std::panic::Location;

use error_location::ErrorLocation;
use tokio::time::{sleep, timeout};
use tracing::{debug, error, info, instrument, warn};

/// Drives one website through open, match, resolve, create, record, stop.
///
/// Owns the single browser session and the single control plane
/// connection. [`record`](Self::record) takes `&mut self`, so at most one
/// session can be in flight per orchestrator; callers sharing it across
/// tasks put it behind a mutex.
///
/// No step is retried, and nothing is rolled back on failure: a created
/// capture source stays registered and a started recording keeps running.
pub struct RecordingOrchestrator<D, C> {
    browser: BrowserController<D>,
    control: C,
    window_matcher: WindowMatcher,
    source_resolver: CaptureSourceResolver,
    settings: CaptureSettings,
    timings: Timings,
}

impl<D: BrowserDriver, C: RecordingControl> RecordingOrchestrator<D, C> {
    /// Orchestrator with the standard [`Timings`].
    pub fn new(driver: D, control: C, settings: CaptureSettings) -> Self {
        Self::with_timings(driver, control, settings, Timings::default())
    }

    /// Orchestrator with explicit timings.
    pub fn with_timings(driver: D, control: C, settings: CaptureSettings, timings: Timings) -> Self {
        let source_resolver = CaptureSourceResolver::new(settings.source_kind.clone());
        Self {
            browser: BrowserController::new(driver, &timings),
            control,
            window_matcher: WindowMatcher::new(),
            source_resolver,
            settings,
            timings,
        }
    }

    /// The browser session.
    pub fn browser(&self) -> &BrowserController<D> {
        &self.browser
    }

    /// The control plane connection.
    pub fn control(&self) -> &C {
        &self.control
    }

    /// Run one full recording session.
    ///
    /// Blocks the caller for the whole lifecycle: page settle, twice the
    /// record window, and the post-stop flush wait.
    ///
    /// # Errors
    ///
    /// Returns a [`StageFailure`] naming the first stage that failed.
    #[instrument(skip(self, request), fields(website = %request.website))]
    pub async fn record(
        &mut self,
        request: &RecordingRequest,
    ) -> Result<RecordingOutcome, StageFailure> {
        let mut session = RecordingSession::new(request.website.as_str());
        info!(session_id = %session.id, "Recording for website");

        session.advance();
        if let Err(e) = self.browser.open_website(&session.target_url).await {
            // Not fatal here; matching reports it if the page never appeared.
            warn!(session_id = %session.id, error = %e, "Error opening website");
        }

        session.advance();
        let target_url = session.target_url.clone();
        let window = self
            .match_window(&target_url)
            .await
            .map_err(|e| session.fail(e))?;
        session.matched_window = Some(window);

        session.advance();
        let source = self.resolve_source().await.map_err(|e| session.fail(e))?;
        session.matched_source = Some(source.clone());

        session.advance();
        let new_source = NewCaptureSource {
            scene_name: self.settings.scene_name.clone(),
            source_name: self.settings.source_name(session.id),
            kind: self.settings.source_kind.clone(),
            window_descriptor: source.window_descriptor,
            match_priority: self.settings.match_priority.clone(),
        };
        self.control
            .create_capture_source(&new_source)
            .await
            .map_err(|e| session.fail(e))?;
        session.source_name = Some(new_source.source_name.clone());

        session.advance();
        self.control
            .start_recording()
            .await
            .map_err(|e| session.fail(e))?;

        match self
            .browser
            .scroll_continuously(self.timings.record_window)
            .await
        {
            Ok(scrolls) => debug!(session_id = %session.id, scrolls, "Page scrolled"),
            Err(e) => warn!(session_id = %session.id, error = %e, "Scrolling failed"),
        }
        sleep(self.timings.record_window).await;

        session.advance();
        let output_path = self
            .control
            .stop_recording()
            .await
            .map_err(|e| session.fail(e))?;
        sleep(self.timings.flush_settle).await;

        session.complete(output_path.clone());

        Ok(RecordingOutcome {
            session_id: session.id,
            source_name: new_source.source_name,
            output_path,
        })
    }

    /// Close the browser session and the control plane connection.
    ///
    /// Failures are logged; both are attempted regardless.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) {
        if let Err(e) = self.browser.quit().await {
            error!(error = %e, "Failed to close browser session");
        }
        if let Err(e) = self.control.disconnect().await {
            error!(error = %e, "Failed to disconnect from control plane");
        }
        info!("Recorder shut down");
    }

    /// Enumerate windows and match, bounded by `window_match_timeout`.
    async fn match_window(&self, target_url: &str) -> CoreResult<BrowserWindow> {
        let search = async {
            let handles = self.browser.list_window_handles().await?;
            self.window_matcher
                .find(&self.browser, target_url, &handles)
                .await
        };

        match timeout(self.timings.window_match_timeout, search).await {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    target_url = %target_url,
                    timeout_ms = self.timings.window_match_timeout.as_millis(),
                    "Timed out waiting for browser windows"
                );
                Err(RecorderError::WindowNotFound {
                    url: target_url.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }

    /// Fetch sources fresh and resolve the browser's.
    async fn resolve_source(&self) -> CoreResult<CaptureSource> {
        let sources = self.control.list_capturable_sources().await?;
        self.source_resolver
            .resolve(&self.settings.process_identifier, &sources)
            .cloned()
    }
}
