//! Scalar per-channel tolerance kernel.

use crate::kernel::{Kernel, Tally};
use crate::piece::PiecePlan;
use crate::pixel::PixelView;

/// Largest per-channel difference that still counts as a match.
pub const DEFAULT_TOLERANCE: u8 = 30;

/// Counts piece pixels whose red, green and blue channels are each within
/// `tolerance` of the background pixel underneath.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToleranceScalar {
    pub tolerance: u8,
}

impl ToleranceScalar {
    pub fn new(tolerance: u8) -> Self {
        Self { tolerance }
    }

    #[inline]
    fn within(&self, a: [u8; 3], b: [u8; 3]) -> bool {
        a[0].abs_diff(b[0]) <= self.tolerance
            && a[1].abs_diff(b[1]) <= self.tolerance
            && a[2].abs_diff(b[2]) <= self.tolerance
    }
}

impl Default for ToleranceScalar {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE)
    }
}

impl Kernel for ToleranceScalar {
    fn tally_at(&self, background: PixelView<'_>, plan: &PiecePlan, x: usize, y: usize) -> Tally {
        debug_assert!(x + plan.width() <= background.width());
        debug_assert!(y + plan.height() <= background.height());

        let data = background.as_slice();
        let stride = background.stride();
        let mut matched = 0usize;
        for px in plan.opaque() {
            let bg = data[(y + px.y) * stride + x + px.x];
            if self.within(bg.rgb(), px.rgb) {
                matched += 1;
            }
        }

        Tally {
            matched,
            compared: plan.opaque_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ToleranceScalar;
    use crate::kernel::{Kernel, Tally};
    use crate::piece::PiecePlan;
    use crate::pixel::{OwnedImage, Rgba};

    #[test]
    fn tolerance_bound_is_inclusive() {
        let bg = OwnedImage::filled(2, 1, Rgba::opaque(100, 100, 100)).unwrap();
        let piece = OwnedImage::from_fn(2, 1, |x, _| {
            if x == 0 {
                Rgba::opaque(130, 70, 100)
            } else {
                Rgba::opaque(131, 100, 100)
            }
        })
        .unwrap();
        let plan = PiecePlan::from_view(piece.view(), 128);
        let tally = ToleranceScalar::default().tally_at(bg.view(), &plan, 0, 0);
        assert_eq!(tally, Tally { matched: 1, compared: 2 });
        assert_eq!(tally.confidence(), 0.5);
    }

    #[test]
    fn alpha_channel_is_ignored() {
        let bg = OwnedImage::filled(1, 1, Rgba::new(10, 20, 30, 0)).unwrap();
        let piece = OwnedImage::filled(1, 1, Rgba::opaque(10, 20, 30)).unwrap();
        let plan = PiecePlan::from_view(piece.view(), 128);
        assert_eq!(ToleranceScalar::default().score_at(bg.view(), &plan, 0, 0), 1.0);
    }

    #[test]
    fn empty_tally_scores_zero() {
        assert_eq!(Tally::default().confidence(), 0.0);
    }
}
