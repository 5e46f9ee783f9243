//! Low-level building blocks for custom matching pipelines.
//!
//! These expose the piece plan, kernels and sweep helpers behind `Matcher`
//! for callers that want to score individual placements or plug in their own
//! kernel. Most users should prefer `Matcher` and `decide`.

pub use crate::kernel::scalar::{ToleranceScalar, DEFAULT_TOLERANCE};
pub use crate::kernel::{Kernel, Tally};
pub use crate::piece::{OpaquePixel, PiecePlan, DEFAULT_ALPHA_CUTOFF};
pub use crate::search::scan::{scan_stride, score_placement};

#[cfg(feature = "rayon")]
pub use crate::kernel::rayon::scan_stride_par;
