//! Strided placement sweep.

use crate::candidate::Match;
use crate::kernel::Kernel;
use crate::piece::PiecePlan;
use crate::pixel::PixelView;
use crate::util::{SlideMatchError, SlideMatchResult};
use tracing::debug;

/// Returns the largest valid `(x, y)` placement of the piece.
pub(crate) fn placement_range(
    background: PixelView<'_>,
    plan: &PiecePlan,
) -> SlideMatchResult<(usize, usize)> {
    let background_width = background.width();
    let background_height = background.height();
    let piece_width = plan.width();
    let piece_height = plan.height();
    if piece_width > background_width || piece_height > background_height {
        return Err(SlideMatchError::InvalidDimensions {
            piece_width,
            piece_height,
            background_width,
            background_height,
        });
    }
    Ok((
        background_width - piece_width,
        background_height - piece_height,
    ))
}

/// Sweeps every placement on the `step` grid and returns the best one.
///
/// `x` is the outer loop and `y` the inner one; equal scores keep the first
/// placement visited. If nothing scores above zero the origin is returned.
pub fn scan_stride<K: Kernel>(
    kernel: &K,
    background: PixelView<'_>,
    plan: &PiecePlan,
    step: usize,
) -> SlideMatchResult<Match> {
    if step == 0 {
        return Err(SlideMatchError::InvalidInput("step must be at least 1"));
    }
    let (max_x, max_y) = placement_range(background, plan)?;
    debug!(max_x, max_y, step, "stride sweep");
    Ok(scan_window(
        kernel,
        background,
        plan,
        (0, 0, max_x, max_y),
        step,
        Match::ORIGIN,
    ))
}

/// Scores one placement after checking that the piece fits there.
pub fn score_placement<K: Kernel>(
    kernel: &K,
    background: PixelView<'_>,
    plan: &PiecePlan,
    x: usize,
    y: usize,
) -> SlideMatchResult<f32> {
    let (max_x, max_y) = placement_range(background, plan)?;
    if x > max_x || y > max_y {
        return Err(SlideMatchError::RoiOutOfBounds {
            x,
            y,
            width: plan.width(),
            height: plan.height(),
            img_width: background.width(),
            img_height: background.height(),
        });
    }
    Ok(kernel.score_at(background, plan, x, y))
}

/// Sweeps the inclusive window `(x0, y0, x1, y1)` starting from `seed`.
///
/// Callers guarantee `x1`/`y1` are valid placements and `step >= 1`.
pub(crate) fn scan_window<K: Kernel>(
    kernel: &K,
    background: PixelView<'_>,
    plan: &PiecePlan,
    (x0, y0, x1, y1): (usize, usize, usize, usize),
    step: usize,
    seed: Match,
) -> Match {
    let mut best = seed;
    for x in (x0..=x1).step_by(step) {
        for y in (y0..=y1).step_by(step) {
            best.offer(x, y, kernel.score_at(background, plan, x, y));
        }
    }
    best
}
