mod client;
mod control;
pub(crate) mod protocol;

pub use {
    client::{ObsClient, ObsConnectOptions},
    control::{CaptureSource, NewCaptureSource, RecordingControl},
};
