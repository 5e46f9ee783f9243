//! Puzzle-piece storage and planning.

use crate::pixel::{OwnedImage, PixelView};

mod plan;

pub use plan::{OpaquePixel, PiecePlan, DEFAULT_ALPHA_CUTOFF};

/// Owned puzzle-piece image, possibly with transparent padding.
#[derive(Clone, Debug)]
pub struct Piece {
    img: OwnedImage,
}

impl Piece {
    /// Wraps a decoded piece image.
    pub fn new(img: OwnedImage) -> Self {
        Self { img }
    }

    pub fn width(&self) -> usize {
        self.img.width()
    }

    pub fn height(&self) -> usize {
        self.img.height()
    }

    /// Returns a borrowed view of the piece pixels.
    pub fn view(&self) -> PixelView<'_> {
        self.img.view()
    }

    /// Builds the opaque-pixel plan for this piece.
    pub fn plan(&self, alpha_cutoff: u8) -> PiecePlan {
        PiecePlan::from_view(self.view(), alpha_cutoff)
    }
}

impl From<OwnedImage> for Piece {
    fn from(img: OwnedImage) -> Self {
        Self::new(img)
    }
}
