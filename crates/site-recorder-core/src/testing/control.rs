use crate::{CaptureSource, CoreResult, NewCaptureSource, RecorderError, RecordingControl};

use std::{
    path::PathBuf,
    sync::{Mutex, MutexGuard},
};

use async_trait::async_trait;

/// Control plane call a [`FakeControl`] can be told to reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCall {
    /// `GetInputList`.
    ListSources,
    /// `CreateInput`.
    CreateSource,
    /// `StartRecord`.
    StartRecording,
    /// `StopRecord`.
    StopRecording,
}

#[derive(Debug, Default)]
struct ControlState {
    created: Vec<NewCaptureSource>,
    recording: bool,
    starts: usize,
    stops: usize,
    disconnected: bool,
}

/// In-memory control plane with a fixed source list.
#[derive(Debug)]
pub struct FakeControl {
    sources: Vec<CaptureSource>,
    output_path: PathBuf,
    failing: Option<ControlCall>,
    state: Mutex<ControlState>,
}

impl FakeControl {
    /// Control plane offering `sources` and writing to `/tmp/out.mp4`.
    pub fn new(sources: Vec<CaptureSource>) -> Self {
        Self {
            sources,
            output_path: PathBuf::from("/tmp/out.mp4"),
            failing: None,
            state: Mutex::new(ControlState::default()),
        }
    }

    /// Report `path` from `StopRecord`.
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Reject `call`.
    pub fn failing(mut self, call: ControlCall) -> Self {
        self.failing = Some(call);
        self
    }

    /// Sources created so far.
    pub fn created_sources(&self) -> Vec<NewCaptureSource> {
        self.lock().created.clone()
    }

    /// Whether a recording is running.
    pub fn is_recording(&self) -> bool {
        self.lock().recording
    }

    /// Number of successful `StartRecord` calls.
    pub fn start_count(&self) -> usize {
        self.lock().starts
    }

    /// Number of successful `StopRecord` calls.
    pub fn stop_count(&self) -> usize {
        self.lock().stops
    }

    /// Whether [`RecordingControl::disconnect`] was called.
    pub fn is_disconnected(&self) -> bool {
        self.lock().disconnected
    }

    fn check(&self, call: ControlCall, request: &str) -> CoreResult<()> {
        if self.failing == Some(call) {
            return Err(RecorderError::control_plane(request, "code 600: rejected by fake"));
        }
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, ControlState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl RecordingControl for FakeControl {
    async fn list_capturable_sources(&self) -> CoreResult<Vec<CaptureSource>> {
        self.check(ControlCall::ListSources, "GetInputList")?;
        Ok(self.sources.clone())
    }

    async fn create_capture_source(&self, source: &NewCaptureSource) -> CoreResult<String> {
        self.check(ControlCall::CreateSource, "CreateInput")?;
        let mut state = self.lock();
        state.created.push(source.clone());
        Ok(format!("input-{}", state.created.len()))
    }

    async fn start_recording(&self) -> CoreResult<()> {
        self.check(ControlCall::StartRecording, "StartRecord")?;
        let mut state = self.lock();
        state.recording = true;
        state.starts += 1;
        Ok(())
    }

    async fn stop_recording(&self) -> CoreResult<PathBuf> {
        self.check(ControlCall::StopRecording, "StopRecord")?;
        let mut state = self.lock();
        state.recording = false;
        state.stops += 1;
        Ok(self.output_path.clone())
    }

    async fn disconnect(&self) -> CoreResult<()> {
        self.lock().disconnected = true;
        Ok(())
    }
}
