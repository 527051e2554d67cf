use crate::{RecorderError, SessionState};

use thiserror::Error;
use uuid::Uuid;

/// A recording session aborted in `stage`.
#[derive(Error, Debug)]
#[error("Recording session {session_id} failed while {stage}: {source}")]
pub struct StageFailure {
    /// Session that failed.
    pub session_id: Uuid,
    /// Last state entered before the failure.
    pub stage: SessionState,
    /// What went wrong.
    #[source]
    pub source: RecorderError,
}

impl StageFailure {
    /// Fixed status text identifying the failed stage.
    pub fn status_message(&self) -> &'static str {
        self.stage.failure_message()
    }
}
