//! Threshold decision over a search result.

use crate::candidate::Match;

/// Default minimum confidence for a reliable match.
pub const DEFAULT_THRESHOLD: f32 = 0.8;

/// Outcome of comparing a match against a confidence threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decision {
    /// Whether `result.confidence` reached the threshold.
    pub matched: bool,
    /// The best placement found, reported either way.
    pub result: Match,
}

impl Decision {
    /// Horizontal drag distance of a reliable match.
    pub fn slide_distance(&self) -> Option<usize> {
        self.matched.then_some(self.result.x)
    }
}

/// Accepts `result` when its confidence is at least `threshold`.
pub fn decide(result: Match, threshold: f32) -> Decision {
    Decision {
        matched: result.confidence >= threshold,
        result,
    }
}
