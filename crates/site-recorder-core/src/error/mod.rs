use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Recording pipeline errors with source location tracking.
#[derive(Error, Debug)]
pub enum RecorderError {
    /// The control plane connection could not be established at startup.
    #[error("Failed to connect to {endpoint}: {reason} {location}")]
    StartupConnect {
        /// Endpoint that was dialled.
        endpoint: String,
        /// Description of the connection failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A browser automation command failed.
    #[error("Browser automation failed: {reason} {location}")]
    Automation {
        /// Description of the driver failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// No open browser window reports the requested URL.
    #[error("No browser window matches {url} {location}")]
    WindowNotFound {
        /// URL that was being searched for.
        url: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// No capture source belongs to the browser process.
    #[error("No capture source matches process {process} {location}")]
    CaptureSourceNotFound {
        /// Process identifier that was being searched for.
        process: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A control plane request was rejected or could not be delivered.
    #[error("Control plane request {request} failed: {reason} {location}")]
    ControlPlaneCall {
        /// Request type that failed (e.g. `StartRecord`).
        request: String,
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`RecorderError`].
pub type Result<T> = std::result::Result<T, RecorderError>;

impl RecorderError {
    /// Build an [`RecorderError::Automation`] located at the caller.
    #[track_caller]
    pub(crate) fn automation(reason: impl Into<String>) -> Self {
        RecorderError::Automation {
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Build an [`RecorderError::ControlPlaneCall`] located at the caller.
    #[track_caller]
    pub(crate) fn control_plane(request: &str, reason: impl Into<String>) -> Self {
        RecorderError::ControlPlaneCall {
            request: request.to_string(),
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
