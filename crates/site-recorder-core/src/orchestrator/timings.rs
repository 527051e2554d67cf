use std::time::Duration;

/// Wait after navigation before the page is treated as loaded.
pub const PAGE_SETTLE: Duration = Duration::from_millis(3000);

/// Pause between consecutive viewport scrolls.
pub const SCROLL_PAUSE: Duration = Duration::from_millis(500);

/// Length of the scripted scroll, and of the extra wait that follows it.
pub const RECORD_WINDOW: Duration = Duration::from_secs(5);

/// Wait after stopping so the control plane can finish writing the file.
pub const FLUSH_SETTLE: Duration = Duration::from_secs(5);

/// Fixed waits of the recording lifecycle.
///
/// None of these observe a real signal (page load, file on disk); they are
/// plain sleeps. The total time a session spends recording is
/// `2 * record_window`: the scroll loop runs for `record_window`, then the
/// session waits `record_window` again before stopping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// See [`PAGE_SETTLE`].
    pub page_settle: Duration,
    /// See [`SCROLL_PAUSE`].
    pub scroll_pause: Duration,
    /// See [`RECORD_WINDOW`].
    pub record_window: Duration,
    /// See [`FLUSH_SETTLE`].
    pub flush_settle: Duration,
    /// Upper bound on enumerating and reading browser windows.
    pub window_match_timeout: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            page_settle: PAGE_SETTLE,
            scroll_pause: SCROLL_PAUSE,
            record_window: RECORD_WINDOW,
            flush_settle: FLUSH_SETTLE,
            window_match_timeout: PAGE_SETTLE,
        }
    }
}
