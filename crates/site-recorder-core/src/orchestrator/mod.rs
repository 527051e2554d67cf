mod failure;
#[allow(clippy::module_inception)]
mod orchestrator;
mod session;
mod settings;
mod state;
pub(crate) mod timings;

pub use {
    failure::StageFailure,
    orchestrator::RecordingOrchestrator,
    session::{RecordingOutcome, RecordingRequest, RecordingSession},
    settings::CaptureSettings,
    state::SessionState,
    timings::Timings,
};
