//! Slidematch locates sliding-puzzle pieces inside their background images.
//!
//! The matcher sweeps candidate placements on a fixed stride and scores each
//! one by the fraction of opaque piece pixels whose colour lies within a
//! per-channel tolerance of the background. Transparent piece pixels are
//! ignored, so irregular piece shapes with transparent padding work directly.
//! A threshold decision turns the best placement into a slide distance, and a
//! small tool layer exposes matching and preprocessing behind JSON arguments.
//!
//! Parallel sweeps are available via the `rayon` feature.

mod candidate;
pub mod decision;
pub mod kernel;
pub mod lowlevel;
pub mod piece;
pub mod pixel;
pub mod search;
pub mod tools;
pub mod util;

pub use decision::{decide, Decision, DEFAULT_THRESHOLD};
pub use kernel::{Kernel, Tally};
pub use piece::{Piece, PiecePlan};
pub use pixel::io::{decode_rgba, load_rgba_image};
pub use pixel::{OwnedImage, PixelView, Rgba};
pub use search::{find_best_match, Match, MatchConfig, Matcher, SearchMode, DEFAULT_STEP};
pub use tools::{call_tool, list_tools, ToolResponse, ToolSpec};
pub use util::{SlideMatchError, SlideMatchResult};
