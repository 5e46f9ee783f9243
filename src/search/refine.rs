//! Local refinement around a coarse placement.
//!
//! The strided sweep can miss the true placement by up to `step - 1` pixels
//! per axis. Refinement rescans that neighbourhood at stride 1, seeded with
//! the coarse result, so it never returns a lower score.

use crate::candidate::Match;
use crate::kernel::Kernel;
use crate::piece::PiecePlan;
use crate::pixel::PixelView;
use crate::search::scan::{placement_range, scan_window};
use crate::util::SlideMatchResult;
use tracing::debug;

fn window_bounds(
    x: usize,
    y: usize,
    radius: usize,
    max_x: usize,
    max_y: usize,
) -> (usize, usize, usize, usize) {
    (
        x.saturating_sub(radius),
        y.saturating_sub(radius),
        x.saturating_add(radius).min(max_x),
        y.saturating_add(radius).min(max_y),
    )
}

pub(crate) fn refine_around<K: Kernel>(
    kernel: &K,
    background: PixelView<'_>,
    plan: &PiecePlan,
    coarse: Match,
    step: usize,
) -> SlideMatchResult<Match> {
    if step <= 1 {
        return Ok(coarse);
    }
    let (max_x, max_y) = placement_range(background, plan)?;
    let window = window_bounds(coarse.x, coarse.y, step - 1, max_x, max_y);
    debug!(?window, coarse_confidence = coarse.confidence, "refining");
    Ok(scan_window(kernel, background, plan, window, 1, coarse))
}

#[cfg(test)]
mod tests {
    use super::window_bounds;

    #[test]
    fn window_is_clamped_to_valid_placements() {
        assert_eq!(window_bounds(2, 10, 4, 20, 12), (0, 6, 6, 12));
        assert_eq!(window_bounds(0, 0, 4, 0, 0), (0, 0, 0, 0));
    }
}
