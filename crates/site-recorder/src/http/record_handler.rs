use crate::http::{RecordResponse, SharedOrchestrator};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use site_recorder_core::{BrowserDriver, RecordingControl, RecordingRequest};
use tracing::{info, instrument, warn};

/// `POST /record`: record `website` and answer once the file is written.
///
/// Waits for any in-flight recording to finish first. A body that is not a
/// record request is answered with the extractor's status and a JSON body.
#[instrument(skip(orchestrator, payload))]
pub(crate) async fn record_handler<D, C>(
    State(orchestrator): State<SharedOrchestrator<D, C>>,
    payload: Result<Json<RecordingRequest>, JsonRejection>,
) -> (StatusCode, Json<RecordResponse>)
where
    D: BrowserDriver + 'static,
    C: RecordingControl + 'static,
{
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Rejected record request");
            return (
                rejection.status(),
                Json(RecordResponse::invalid_request(&rejection.body_text())),
            );
        }
    };

    info!(website = %request.website, "Record request received");

    let mut orchestrator = orchestrator.lock().await;
    match orchestrator.record(&request).await {
        Ok(outcome) => (StatusCode::OK, Json(RecordResponse::complete(&outcome))),
        Err(failure) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(RecordResponse::failed(&failure)),
        ),
    }
}
