use uuid::Uuid;

/// How the browser window is correlated to, and registered in, the control plane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureSettings {
    /// Scene the capture source is added to.
    pub scene_name: String,
    /// Substring identifying the browser process in a window descriptor.
    pub process_identifier: String,
    /// Input kind of capture sources, both searched and created.
    pub source_kind: String,
    /// Window re-acquisition priority passed to the new source.
    pub match_priority: String,
    /// Prefix of generated source names.
    pub source_name_prefix: String,
}

impl CaptureSettings {
    /// Unique source name for one session.
    pub fn source_name(&self, session_id: Uuid) -> String {
        format!("{}-{}", self.source_name_prefix, session_id)
    }
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            scene_name: "Scene".to_string(),
            process_identifier: "chrome.exe".to_string(),
            source_kind: "window_capture".to_string(),
            match_priority: "title".to_string(),
            source_name_prefix: "BrowserCapture".to_string(),
        }
    }
}
