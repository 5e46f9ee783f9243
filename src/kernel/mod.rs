//! Similarity kernels.
//!
//! A kernel compares the opaque pixels of a piece plan against the background
//! at one placement. Placements are always supplied by the search driver, which
//! only produces offsets where the piece lies fully inside the background.

use crate::piece::PiecePlan;
use crate::pixel::PixelView;

/// Pixel counts behind one score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    /// Opaque piece pixels whose background counterpart is within tolerance.
    pub matched: usize,
    /// Opaque piece pixels compared at this placement.
    pub compared: usize,
}

impl Tally {
    /// Returns `matched / compared`, or `0.0` when nothing was compared.
    pub fn confidence(&self) -> f32 {
        if self.compared == 0 {
            return 0.0;
        }
        self.matched as f32 / self.compared as f32
    }
}

/// Scoring at a single placement (top-left coordinates).
pub trait Kernel {
    /// Counts matching and compared pixels with the piece placed at `(x, y)`.
    fn tally_at(&self, background: PixelView<'_>, plan: &PiecePlan, x: usize, y: usize) -> Tally;

    /// Computes the score in `[0, 1]` at `(x, y)`.
    fn score_at(&self, background: PixelView<'_>, plan: &PiecePlan, x: usize, y: usize) -> f32 {
        self.tally_at(background, plan, x, y).confidence()
    }
}

pub mod scalar;

#[cfg(feature = "rayon")]
pub mod rayon;
