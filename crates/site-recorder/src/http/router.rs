use crate::http::record_handler;

use std::sync::Arc;

use axum::{Router, routing::post};
use site_recorder_core::{BrowserDriver, RecordingControl, RecordingOrchestrator};
use tokio::sync::Mutex;

/// The orchestrator shared by all requests.
///
/// Holding the lock for a whole recording serializes requests: the browser
/// session and the OBS recording are single, process-wide resources.
pub(crate) type SharedOrchestrator<D, C> = Arc<Mutex<RecordingOrchestrator<D, C>>>;

/// Routes of the recording service.
pub(crate) fn router<D, C>(orchestrator: SharedOrchestrator<D, C>) -> Router
where
    D: BrowserDriver + 'static,
    C: RecordingControl + 'static,
{
    Router::new()
        .route("/record", post(record_handler::<D, C>))
        .with_state(orchestrator)
}
