//! Offset search for puzzle pieces.
//!
//! The default search is a strided sweep over every placement where the piece
//! fits inside the background: `x` in the outer loop, `y` in the inner loop,
//! both advancing by `step`. A candidate replaces the current best only when it
//! scores strictly higher, so ties resolve to the first placement visited.
//! `SearchMode::CoarseToFine` follows the sweep with a stride-1 pass around the
//! best coarse placement.

pub(crate) mod refine;
pub(crate) mod scan;

use crate::kernel::scalar::{ToleranceScalar, DEFAULT_TOLERANCE};
use crate::piece::{Piece, PiecePlan, DEFAULT_ALPHA_CUTOFF};
use crate::pixel::PixelView;
use crate::util::{SlideMatchError, SlideMatchResult};
use tracing::{debug, info_span, warn};

pub use crate::candidate::Match;

/// Default stride between candidate placements.
pub const DEFAULT_STEP: usize = 5;

/// Placement search strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Strided sweep only.
    #[default]
    Exhaustive,
    /// Strided sweep, then every placement within `step - 1` of the best.
    CoarseToFine,
}

/// Matching configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchConfig {
    /// Stride between candidate placements, at least 1.
    pub step: usize,
    /// Per-channel colour tolerance.
    pub tolerance: u8,
    /// Piece pixels with alpha below this are skipped.
    pub alpha_cutoff: u8,
    pub mode: SearchMode,
    /// Split the sweep across rayon workers (requires the `rayon` feature).
    pub parallel: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            tolerance: DEFAULT_TOLERANCE,
            alpha_cutoff: DEFAULT_ALPHA_CUTOFF,
            mode: SearchMode::Exhaustive,
            parallel: false,
        }
    }
}

/// Locates a puzzle piece inside background images.
#[derive(Clone, Debug)]
pub struct Matcher {
    piece: Piece,
    cfg: MatchConfig,
}

impl Matcher {
    /// Creates a matcher with the default configuration.
    pub fn new(piece: impl Into<Piece>) -> Self {
        Self {
            piece: piece.into(),
            cfg: MatchConfig::default(),
        }
    }

    /// Replaces the matcher configuration.
    pub fn with_config(mut self, cfg: MatchConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    /// Finds the best placement of the piece inside `background`.
    ///
    /// Fails with `InvalidDimensions` when the piece does not fit and with
    /// `InvalidInput` when `step` is zero. A fully transparent piece is not an
    /// error: it yields the origin with zero confidence.
    pub fn match_image(&self, background: PixelView<'_>) -> SlideMatchResult<Match> {
        let cfg = &self.cfg;
        let _span = info_span!(
            "match_image",
            bg_width = background.width(),
            bg_height = background.height(),
            piece_width = self.piece.width(),
            piece_height = self.piece.height(),
            step = cfg.step
        )
        .entered();

        if cfg.step == 0 {
            return Err(SlideMatchError::InvalidInput("step must be at least 1"));
        }

        let plan = self.piece.plan(cfg.alpha_cutoff);
        if plan.is_degenerate() {
            warn!("piece has no opaque pixels; every placement scores zero");
        }

        let kernel = ToleranceScalar::new(cfg.tolerance);
        let coarse = self.sweep(&kernel, background, &plan)?;
        let best = match cfg.mode {
            SearchMode::Exhaustive => coarse,
            SearchMode::CoarseToFine => {
                refine::refine_around(&kernel, background, &plan, coarse, cfg.step)?
            }
        };

        debug!(
            x = best.x,
            y = best.y,
            confidence = best.confidence,
            opaque = plan.opaque_count(),
            "best placement"
        );
        Ok(best)
    }

    fn sweep(
        &self,
        kernel: &ToleranceScalar,
        background: PixelView<'_>,
        plan: &PiecePlan,
    ) -> SlideMatchResult<Match> {
        #[cfg(feature = "rayon")]
        if self.cfg.parallel {
            return crate::kernel::rayon::scan_stride_par(kernel, background, plan, self.cfg.step);
        }
        #[cfg(not(feature = "rayon"))]
        if self.cfg.parallel {
            debug!("parallel sweep requested without the rayon feature; scanning sequentially");
        }
        scan::scan_stride(kernel, background, plan, self.cfg.step)
    }
}

/// Strided sweep with the default tolerance and alpha cutoff.
pub fn find_best_match(
    background: PixelView<'_>,
    piece: PixelView<'_>,
    step: usize,
) -> SlideMatchResult<Match> {
    let plan = PiecePlan::from_view(piece, DEFAULT_ALPHA_CUTOFF);
    scan::scan_stride(&ToleranceScalar::default(), background, &plan, step)
}
