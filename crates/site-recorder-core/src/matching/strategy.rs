/// Decides whether an observed string identifies a target.
pub trait MatchStrategy: Send + Sync {
    /// `true` if `candidate` identifies `target`.
    fn matches(&self, candidate: &str, target: &str) -> bool;
}

/// Equal, or contains the target as a substring.
///
/// Deliberately loose: a browser may report `https://example.com/` for a
/// request of `https://example.com`, and a capture descriptor embeds the
/// executable name among other fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactOrSubstring;

impl MatchStrategy for ExactOrSubstring {
    fn matches(&self, candidate: &str, target: &str) -> bool {
        candidate == target || candidate.contains(target)
    }
}
