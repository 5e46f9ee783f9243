//! Best-offset tracking with first-found tie-breaking.

/// Best offset found by a search, with its similarity score.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Match {
    /// Horizontal offset of the piece's top-left corner.
    pub x: usize,
    /// Vertical offset of the piece's top-left corner.
    pub y: usize,
    /// Fraction of opaque piece pixels within tolerance, in `[0, 1]`.
    pub confidence: f32,
}

impl Match {
    /// Starting point of every sweep: the origin with zero confidence.
    pub const ORIGIN: Match = Match {
        x: 0,
        y: 0,
        confidence: 0.0,
    };

    /// Replaces `self` when `confidence` is strictly greater.
    ///
    /// Equal scores keep the earlier candidate, so the visiting order decides
    /// ties.
    #[inline]
    pub(crate) fn offer(&mut self, x: usize, y: usize, confidence: f32) {
        if confidence > self.confidence {
            *self = Match { x, y, confidence };
        }
    }

    /// Folds in the best of a later chunk of the visiting order.
    #[cfg_attr(not(feature = "rayon"), allow(dead_code))]
    #[inline]
    pub(crate) fn merge(&mut self, later: Match) {
        self.offer(later.x, later.y, later.confidence);
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::ORIGIN
    }
}

#[cfg(test)]
mod tests {
    use super::Match;

    #[test]
    fn ties_keep_first() {
        let mut best = Match::ORIGIN;
        best.offer(5, 0, 0.5);
        best.offer(10, 0, 0.5);
        assert_eq!((best.x, best.y), (5, 0));
        best.offer(15, 5, 0.75);
        assert_eq!((best.x, best.y), (15, 5));
    }

    #[test]
    fn zero_scores_never_replace_origin() {
        let mut best = Match::ORIGIN;
        best.offer(20, 20, 0.0);
        assert_eq!(best, Match::ORIGIN);
    }

    #[test]
    fn merge_matches_sequential_offers() {
        let mut left = Match::ORIGIN;
        left.offer(0, 5, 0.8);
        let mut right = Match::ORIGIN;
        right.offer(5, 0, 0.8);
        left.merge(right);
        assert_eq!((left.x, left.y), (0, 5));
    }
}
