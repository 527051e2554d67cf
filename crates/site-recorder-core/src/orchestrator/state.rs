use std::fmt;

/// Lifecycle of one recording session.
///
/// Strictly linear: every state except [`Completed`](Self::Completed) and
/// [`Failed`](Self::Failed) has exactly one successor, and `Failed` is
/// reachable from each of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Created, nothing done yet.
    Idle,
    /// Loading the website in the browser.
    OpeningBrowser,
    /// Looking for the browser window showing the website.
    MatchingWindow,
    /// Looking for the control plane source of the browser process.
    ResolvingSource,
    /// Registering a new capture source.
    CreatingSource,
    /// Recording while scrolling the page.
    Recording,
    /// Stopping the recording and waiting for the file.
    Stopping,
    /// Finished with an output file.
    Completed,
    /// Aborted; no later stage ran.
    Failed,
}

impl SessionState {
    /// The state after this one on the success path.
    ///
    /// Terminal states are their own successor.
    pub fn next(self) -> Self {
        match self {
            Self::Idle => Self::OpeningBrowser,
            Self::OpeningBrowser => Self::MatchingWindow,
            Self::MatchingWindow => Self::ResolvingSource,
            Self::ResolvingSource => Self::CreatingSource,
            Self::CreatingSource => Self::Recording,
            Self::Recording => Self::Stopping,
            Self::Stopping => Self::Completed,
            Self::Completed => Self::Completed,
            Self::Failed => Self::Failed,
        }
    }

    /// `true` for [`Completed`](Self::Completed) and [`Failed`](Self::Failed).
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// Client-facing status reported when a session fails in this state.
    ///
    /// Opening the website never fails a session on its own; a page that did
    /// not load surfaces as a matching failure.
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::MatchingWindow => "failed to find the window with the specified URL",
            Self::ResolvingSource => "failed to find a Chrome window in OBS",
            Self::CreatingSource => "failed to set up scene and source",
            Self::Recording => "failed to start recording",
            Self::Stopping => "failed to stop recording",
            Self::Idle | Self::OpeningBrowser | Self::Completed | Self::Failed => {
                "recording failed"
            }
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::OpeningBrowser => "opening browser",
            Self::MatchingWindow => "matching window",
            Self::ResolvingSource => "resolving source",
            Self::CreatingSource => "creating source",
            Self::Recording => "recording",
            Self::Stopping => "stopping",
            Self::Completed => "completed",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}
