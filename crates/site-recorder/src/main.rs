//! Site-Recorder: records a short scrolling video of a website through OBS.

mod app;
mod config;
mod error;
mod http;

pub(crate) use {
    app::App,
    error::{AppError, Result as AppResult},
};

use crate::config::Config;

use tracing::error;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "site_recorder=debug,site_recorder_core=debug";

/// Application entry point.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    // No retry and no degraded mode: without OBS or a browser there is
    // nothing to serve.
    let app = match App::start(config).await {
        Ok(app) => app,
        Err(e) => {
            error!("Startup failed: {:?}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = app.run().await {
        error!(error = ?e, "App error");
        std::process::exit(1);
    }
}
