//! Shared utility helpers.

pub mod encoding;
pub mod error;

pub use error::{SlideMatchError, SlideMatchResult};
