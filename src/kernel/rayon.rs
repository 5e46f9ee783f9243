//! Rayon-parallel sweep (feature-gated).
//!
//! The outer `x` loop is split across workers. Each worker keeps the best
//! placement of its own column, and columns are folded in ascending `x` order
//! with the same strict-greater rule, so the result is identical to the
//! sequential sweep however the work is scheduled.

use crate::candidate::Match;
use crate::kernel::Kernel;
use crate::piece::PiecePlan;
use crate::pixel::PixelView;
use crate::search::scan::{placement_range, scan_window};
use crate::util::{SlideMatchError, SlideMatchResult};
use rayon::prelude::*;
use tracing::debug;

/// Column-parallel strided sweep.
pub fn scan_stride_par<K: Kernel + Sync>(
    kernel: &K,
    background: PixelView<'_>,
    plan: &PiecePlan,
    step: usize,
) -> SlideMatchResult<Match> {
    if step == 0 {
        return Err(SlideMatchError::InvalidInput("step must be at least 1"));
    }
    let (max_x, max_y) = placement_range(background, plan)?;
    debug!(max_x, max_y, step, "parallel stride sweep");

    // rayon only indexes half-open ranges, which step_by requires.
    // collect() keeps column order, which the merge below relies on.
    let columns: Vec<Match> = (0..max_x + 1)
        .into_par_iter()
        .step_by(step)
        .map(|x| {
            scan_window(
                kernel,
                background,
                plan,
                (x, 0, x, max_y),
                step,
                Match::ORIGIN,
            )
        })
        .collect();

    let mut best = Match::ORIGIN;
    for column in columns {
        best.merge(column);
    }
    Ok(best)
}
