//! Candidate tracking for the offset sweep.

pub(crate) mod best;

pub use best::Match;
