use crate::{AppError, AppResult, config::Config, http::router};

use std::{panic::Location, sync::Arc};

use error_location::ErrorLocation;
use site_recorder_core::{ObsClient, RecordingOrchestrator, WebDriverClient};
use tokio::{net::TcpListener, sync::Mutex};
use tracing::{error, info, instrument};

/// The running recorder service.
///
/// Owns the single OBS connection and the single browser session for the
/// lifetime of the process. Both are opened in [`App::start`] and closed
/// after the HTTP server has drained.
pub struct App {
    pub(crate) config: Config,
    pub(crate) orchestrator: RecordingOrchestrator<WebDriverClient, ObsClient>,
}

impl App {
    /// Connect to OBS, open the browser session, and build the orchestrator.
    ///
    /// # Errors
    ///
    /// Fails if either connection cannot be established; the caller treats
    /// this as fatal.
    #[instrument(skip(config))]
    pub(crate) async fn start(config: Config) -> AppResult<Self> {
        let control = ObsClient::connect(&config.obs.connect_options()).await?;
        let driver = WebDriverClient::start(&config.browser.webdriver_options()).await?;

        let orchestrator =
            RecordingOrchestrator::new(driver, control, config.capture.to_settings());

        Ok(Self {
            config,
            orchestrator,
        })
    }

    /// Serve `/record` until Ctrl-C, then close both sessions.
    #[instrument(skip(self))]
    pub(crate) async fn run(self) -> AppResult<()> {
        let addr = self.config.server.bind_address();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| AppError::ServerError {
                reason: format!("Failed to bind {}: {}", addr, e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(addr = %addr, "Server running");

        let orchestrator = Arc::new(Mutex::new(self.orchestrator));

        axum::serve(listener, router(Arc::clone(&orchestrator)))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::ServerError {
                reason: format!("Server failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        // Graceful shutdown waits for an in-flight recording, so the lock is free.
        orchestrator.lock().await.shutdown().await;

        info!("Site-Recorder shut down successfully");

        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown requested"),
        Err(e) => {
            error!(error = ?e, "Failed to listen for Ctrl-C, running until killed");
            std::future::pending::<()>().await;
        }
    }
}
