//! In-memory [`BrowserDriver`](crate::BrowserDriver) and
//! [`RecordingControl`](crate::RecordingControl) implementations for tests.

mod control;
mod driver;

pub use {
    control::{ControlCall, FakeControl},
    driver::FakeDriver,
};

use crate::CaptureSource;

/// A `window_capture` source with the given descriptor.
pub fn window_capture(name: &str, window_descriptor: &str) -> CaptureSource {
    CaptureSource {
        name: name.to_string(),
        kind: "window_capture".to_string(),
        window_descriptor: window_descriptor.to_string(),
    }
}
