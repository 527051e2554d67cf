//! Site-recorder Core Library
//!
//! Records a short scrolling video of a website: opens it through a
//! WebDriver browser session, finds the browser window, correlates it to an
//! OBS window capture source, and drives an OBS recording around a scripted
//! scroll.
//!
//! # Example
//!
//! ```no_run
//! use site_recorder_core::{
//!     CaptureSettings, ObsClient, ObsConnectOptions, RecordingOrchestrator, RecordingRequest,
//!     WebDriverClient, WebDriverOptions,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let control = ObsClient::connect(&ObsConnectOptions {
//!     host: "localhost".to_string(),
//!     port: 4455,
//!     password: None,
//! })
//! .await?;
//! let driver = WebDriverClient::start(&WebDriverOptions {
//!     endpoint: "http://localhost:9515".to_string(),
//!     browser_name: "chrome".to_string(),
//!     args: vec!["--no-sandbox".to_string()],
//! })
//! .await?;
//!
//! let mut orchestrator = RecordingOrchestrator::new(driver, control, CaptureSettings::default());
//! let outcome = orchestrator
//!     .record(&RecordingRequest {
//!         website: "https://example.com".to_string(),
//!     })
//!     .await?;
//!
//! println!("Recorded to {}", outcome.output_path.display());
//! orchestrator.shutdown().await;
//! # Ok(())
//! # }
//! ```

mod browser;
mod error;
mod matching;
mod obs;
mod orchestrator;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use {
    browser::{
        BrowserController, BrowserDriver, BrowserWindow, WebDriverClient, WebDriverOptions,
        WindowHandle,
    },
    error::{RecorderError, Result as CoreResult},
    matching::{CaptureSourceResolver, ExactOrSubstring, MatchStrategy, WindowMatcher},
    obs::{CaptureSource, NewCaptureSource, ObsClient, ObsConnectOptions, RecordingControl},
    orchestrator::{
        CaptureSettings, RecordingOrchestrator, RecordingOutcome, RecordingRequest,
        RecordingSession, SessionState, StageFailure, Timings,
    },
};

#[cfg(test)]
mod tests;
