use crate::CoreResult;

use std::path::PathBuf;

use async_trait::async_trait;

/// One capturable on-screen window known to the control plane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureSource {
    /// Input name in the control plane.
    pub name: String,
    /// Input kind, e.g. `window_capture`.
    pub kind: String,
    /// String the control plane uses to identify the captured window,
    /// typically `title:class:executable`.
    pub window_descriptor: String,
}

/// A capture source to register in a scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCaptureSource {
    /// Scene the source is added to.
    pub scene_name: String,
    /// Unique name for the new input.
    pub source_name: String,
    /// Input kind, e.g. `window_capture`.
    pub kind: String,
    /// Window the input captures.
    pub window_descriptor: String,
    /// How the control plane re-finds the window if it changes.
    pub match_priority: String,
}

/// Operations the recorder needs from the recording control plane.
#[async_trait]
pub trait RecordingControl: Send + Sync {
    /// Current inputs that can capture a window.
    async fn list_capturable_sources(&self) -> CoreResult<Vec<CaptureSource>>;

    /// Register a new capture input, enabled in its scene. Returns the
    /// control plane's identifier for it.
    async fn create_capture_source(&self, source: &NewCaptureSource) -> CoreResult<String>;

    /// Start the output recording.
    async fn start_recording(&self) -> CoreResult<()>;

    /// Stop the output recording and return the path of the written file.
    async fn stop_recording(&self) -> CoreResult<PathBuf>;

    /// Close the control plane connection.
    async fn disconnect(&self) -> CoreResult<()>;
}
