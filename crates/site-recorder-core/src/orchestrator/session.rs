use crate::{BrowserWindow, CaptureSource, RecorderError, SessionState, StageFailure};

use std::path::PathBuf;

use serde::Deserialize;
use tokio::time::Instant;
use tracing::{error, info};
use uuid::Uuid;

/// Inbound request to record a website.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecordingRequest {
    /// Absolute URL to open and record.
    pub website: String,
}

/// Result of a completed session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingOutcome {
    /// Session that produced the recording.
    pub session_id: Uuid,
    /// Name of the capture source created for the session.
    pub source_name: String,
    /// File written by the control plane.
    pub output_path: PathBuf,
}

/// Per-request state. Discarded once the request is answered.
#[derive(Debug)]
pub struct RecordingSession {
    /// Unique session ID for log correlation and source naming.
    pub id: Uuid,
    /// URL being recorded.
    pub target_url: String,
    /// Current lifecycle state.
    pub state: SessionState,
    /// Window found by the matcher.
    pub matched_window: Option<BrowserWindow>,
    /// Source found by the resolver.
    pub matched_source: Option<CaptureSource>,
    /// Name of the capture source created for this session.
    pub source_name: Option<String>,
    /// Recording file; set only after a successful stop.
    pub output_path: Option<PathBuf>,
    started_at: Instant,
}

impl RecordingSession {
    /// New idle session for `target_url`.
    pub fn new(target_url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            target_url: target_url.into(),
            state: SessionState::Idle,
            matched_window: None,
            matched_source: None,
            source_name: None,
            output_path: None,
            started_at: Instant::now(),
        }
    }

    /// Move to the next state on the success path.
    pub fn advance(&mut self) {
        let next = self.state.next();
        info!(session_id = %self.id, from = %self.state, to = %next, "Session transition");
        self.state = next;
    }

    /// Abort the session in its current state.
    pub fn fail(&mut self, source: RecorderError) -> StageFailure {
        let stage = self.state;
        error!(
            session_id = %self.id,
            stage = %stage,
            elapsed_ms = self.started_at.elapsed().as_millis(),
            error = %source,
            "{}",
            stage.failure_message()
        );
        self.state = SessionState::Failed;
        StageFailure {
            session_id: self.id,
            stage,
            source,
        }
    }

    /// Record the output file and finish.
    pub fn complete(&mut self, output_path: PathBuf) {
        info!(
            session_id = %self.id,
            output_path = ?output_path,
            elapsed_ms = self.started_at.elapsed().as_millis(),
            "Recording complete"
        );
        self.output_path = Some(output_path);
        self.state = SessionState::Completed;
    }
}
