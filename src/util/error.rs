//! Error types for slidematch.

use thiserror::Error;

/// Result alias for slidematch operations.
pub type SlideMatchResult<T> = std::result::Result<T, SlideMatchError>;

/// Errors that can occur while decoding, matching, or dispatching tools.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SlideMatchError {
    /// A scalar parameter is outside its accepted range.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// Image dimensions must be non-zero.
    #[error("image must be non-empty, got {width}x{height}")]
    EmptyImage { width: usize, height: usize },
    /// The backing buffer is shorter than the view requires.
    #[error("buffer too small: needed {needed} pixels, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// Row stride is shorter than the row width.
    #[error("invalid stride {stride} for width {width}")]
    InvalidStride { width: usize, stride: usize },
    /// A region of interest does not fit inside its image.
    #[error(
        "roi {width}x{height} at ({x}, {y}) exceeds image bounds {img_width}x{img_height}"
    )]
    RoiOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        img_width: usize,
        img_height: usize,
    },
    /// The piece is larger than the background, so no offset is valid.
    #[error(
        "piece {piece_width}x{piece_height} does not fit inside background {background_width}x{background_height}"
    )]
    InvalidDimensions {
        piece_width: usize,
        piece_height: usize,
        background_width: usize,
        background_height: usize,
    },
    /// Encoded image bytes could not be turned into a pixel grid.
    #[error("failed to decode image: {reason}")]
    Decode { reason: String },
    /// A processed image could not be encoded.
    #[error("failed to encode image: {reason}")]
    Encode { reason: String },
    /// Tool arguments are missing or have the wrong shape.
    #[error("invalid arguments: {reason}")]
    InvalidArguments { reason: String },
    /// No tool is registered under the requested name.
    #[error("unknown tool: {name}")]
    UnknownTool { name: String },
}
