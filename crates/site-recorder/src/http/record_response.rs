use serde::{Deserialize, Serialize};
use site_recorder_core::{RecordingOutcome, StageFailure};

/// Status reported for a finished recording.
pub(crate) const STATUS_COMPLETE: &str = "recording complete";

/// Status prefix for a body that could not be read as a record request.
pub(crate) const STATUS_INVALID_REQUEST: &str = "invalid request";

/// Body of every `/record` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordResponse {
    /// `recording complete`, or the failed stage's message.
    pub status: String,
    /// Path of the recording; present only on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording_path: Option<String>,
}

impl RecordResponse {
    /// Success body.
    pub fn complete(outcome: &RecordingOutcome) -> Self {
        Self {
            status: STATUS_COMPLETE.to_string(),
            recording_path: Some(outcome.output_path.to_string_lossy().into_owned()),
        }
    }

    /// Failure body naming the stage that failed.
    pub fn failed(failure: &StageFailure) -> Self {
        Self {
            status: failure.status_message().to_string(),
            recording_path: None,
        }
    }

    /// Body for a request that never reached the recorder.
    pub fn invalid_request(reason: &str) -> Self {
        Self {
            status: format!("{}: {}", STATUS_INVALID_REQUEST, reason),
            recording_path: None,
        }
    }
}
