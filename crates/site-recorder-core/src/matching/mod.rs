mod source_resolver;
mod strategy;
mod window_matcher;

pub use {
    source_resolver::CaptureSourceResolver,
    strategy::{ExactOrSubstring, MatchStrategy},
    window_matcher::WindowMatcher,
};
