use crate::{
    CaptureSource, CoreResult, RecorderError,
    matching::{ExactOrSubstring, MatchStrategy},
};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{info, instrument, warn};

/// Finds the capture source belonging to the browser process.
///
/// # Correlation Gap
///
/// Correlation is by process name only. The resolved source is *a* window
/// of the browser process, not necessarily the window the
/// [`WindowMatcher`](crate::WindowMatcher) picked. With several browser
/// windows open the wrong one may be captured.
#[derive(Debug, Clone)]
pub struct CaptureSourceResolver<S = ExactOrSubstring> {
    kind: String,
    strategy: S,
}

impl CaptureSourceResolver {
    /// Resolver over sources of `kind` (e.g. `window_capture`).
    pub fn new(kind: impl Into<String>) -> Self {
        Self::with_strategy(kind, ExactOrSubstring)
    }
}

impl<S: MatchStrategy> CaptureSourceResolver<S> {
    /// Resolver using a custom strategy.
    pub fn with_strategy(kind: impl Into<String>, strategy: S) -> Self {
        Self {
            kind: kind.into(),
            strategy,
        }
    }

    /// First source of the configured kind whose window descriptor contains
    /// `process_identifier`.
    ///
    /// # Errors
    ///
    /// Returns [`RecorderError::CaptureSourceNotFound`] when nothing qualifies.
    #[track_caller]
    #[instrument(skip(self, sources), fields(kind = %self.kind, sources = sources.len()))]
    pub fn resolve<'a>(
        &self,
        process_identifier: &str,
        sources: &'a [CaptureSource],
    ) -> CoreResult<&'a CaptureSource> {
        let found = sources
            .iter()
            .filter(|source| source.kind == self.kind)
            .find(|source| {
                self.strategy
                    .matches(&source.window_descriptor, process_identifier)
            });

        match found {
            Some(source) => {
                info!(
                    source = %source.name,
                    window = %source.window_descriptor,
                    "Matching OBS window"
                );
                Ok(source)
            }
            None => {
                warn!(process = %process_identifier, "No matching window found in OBS");
                Err(RecorderError::CaptureSourceNotFound {
                    process: process_identifier.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }
}
