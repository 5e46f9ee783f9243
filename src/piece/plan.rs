//! Opaque-pixel plan for alpha-aware scoring.
//!
//! Piece pixels with alpha below the cutoff never take part in scoring, so the
//! plan keeps only the opaque ones together with their piece coordinates.
//! Counts produced from the plan equal those of a full per-pixel walk that
//! skips transparent pixels.

use crate::pixel::PixelView;

/// Alpha below which a piece pixel is treated as transparent.
pub const DEFAULT_ALPHA_CUTOFF: u8 = 128;

/// One opaque piece pixel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OpaquePixel {
    /// Column inside the piece.
    pub x: usize,
    /// Row inside the piece.
    pub y: usize,
    /// Colour channels; alpha is not compared.
    pub rgb: [u8; 3],
}

/// Precomputed opaque pixels of a piece.
#[derive(Clone, Debug)]
pub struct PiecePlan {
    width: usize,
    height: usize,
    alpha_cutoff: u8,
    opaque: Vec<OpaquePixel>,
}

impl PiecePlan {
    /// Builds a plan from a piece view, keeping pixels with `a >= alpha_cutoff`.
    pub fn from_view(piece: PixelView<'_>, alpha_cutoff: u8) -> Self {
        let opaque = piece
            .pixels()
            .filter(|(_, _, px)| px.a >= alpha_cutoff)
            .map(|(x, y, px)| OpaquePixel { x, y, rgb: px.rgb() })
            .collect();
        Self {
            width: piece.width(),
            height: piece.height(),
            alpha_cutoff,
            opaque,
        }
    }

    /// Returns the piece width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the piece height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn alpha_cutoff(&self) -> u8 {
        self.alpha_cutoff
    }

    /// Opaque pixels in row-major order.
    pub fn opaque(&self) -> &[OpaquePixel] {
        &self.opaque
    }

    /// Number of pixels compared at every offset.
    pub fn opaque_count(&self) -> usize {
        self.opaque.len()
    }

    /// True when every piece pixel is transparent; such a piece scores 0 everywhere.
    pub fn is_degenerate(&self) -> bool {
        self.opaque.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::PiecePlan;
    use crate::pixel::{OwnedImage, Rgba};

    #[test]
    fn cutoff_is_inclusive() {
        let alphas = [0, 127, 128, 255];
        let img = OwnedImage::from_fn(4, 1, |x, _| Rgba::new(1, 2, 3, alphas[x])).unwrap();
        let plan = PiecePlan::from_view(img.view(), 128);
        let xs: Vec<usize> = plan.opaque().iter().map(|px| px.x).collect();
        assert_eq!(xs, vec![2, 3]);
        assert_eq!(plan.opaque()[0].rgb, [1, 2, 3]);
    }

    #[test]
    fn transparent_piece_is_degenerate() {
        let img = OwnedImage::filled(5, 5, Rgba::transparent()).unwrap();
        let plan = PiecePlan::from_view(img.view(), 128);
        assert!(plan.is_degenerate());
        assert_eq!((plan.width(), plan.height()), (5, 5));
    }
}
