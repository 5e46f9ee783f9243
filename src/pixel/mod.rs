//! RGBA pixel grids.
//!
//! `PixelView` is a borrowed 2D view into a row-major `Rgba` buffer with an
//! explicit stride, counted in pixels between row starts. ROI views share the
//! backing slice and keep the parent stride. `OwnedImage` is the contiguous
//! buffer a decoded image lives in for the duration of one request.

use crate::util::{SlideMatchError, SlideMatchResult};

pub mod io;

/// One 8-bit RGBA pixel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Creates a pixel from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque pixel.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, u8::MAX)
    }

    /// Creates a fully transparent pixel.
    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Returns the colour channels without alpha.
    pub const fn rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Borrowed RGBA view with an explicit stride.
#[derive(Copy, Clone, Debug)]
pub struct PixelView<'a> {
    data: &'a [Rgba],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a> PixelView<'a> {
    /// Creates a contiguous view with `stride == width`.
    pub fn from_slice(data: &'a [Rgba], width: usize, height: usize) -> SlideMatchResult<Self> {
        Self::new(data, width, height, width)
    }

    /// Creates a view with an explicit stride.
    pub fn new(
        data: &'a [Rgba],
        width: usize,
        height: usize,
        stride: usize,
    ) -> SlideMatchResult<Self> {
        let needed = required_len(width, height, stride)?;
        if data.len() < needed {
            return Err(SlideMatchError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixels between the starts of consecutive rows.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the backing slice including any row padding.
    pub fn as_slice(&self) -> &'a [Rgba] {
        self.data
    }

    /// Returns the pixel at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.stride + x).copied()
    }

    /// Returns row `y` trimmed to `width` pixels.
    pub fn row(&self, y: usize) -> Option<&'a [Rgba]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.stride;
        self.data.get(start..start + self.width)
    }

    /// Returns a zero-copy sub-view.
    pub fn roi(
        &self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> SlideMatchResult<PixelView<'a>> {
        if width == 0 || height == 0 {
            return Err(SlideMatchError::EmptyImage { width, height });
        }
        let out_of_bounds = SlideMatchError::RoiOutOfBounds {
            x,
            y,
            width,
            height,
            img_width: self.width,
            img_height: self.height,
        };
        let fits_x = x.checked_add(width).is_some_and(|end| end <= self.width);
        let fits_y = y.checked_add(height).is_some_and(|end| end <= self.height);
        if !fits_x || !fits_y {
            return Err(out_of_bounds);
        }

        let start = y * self.stride + x;
        let data = self.data.get(start..).ok_or(out_of_bounds)?;
        PixelView::new(data, width, height, self.stride)
    }

    /// Iterates over every pixel in row-major order with its coordinates.
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize, Rgba)> + 'a {
        let view = *self;
        (0..view.height).flat_map(move |y| {
            let row = &view.data[y * view.stride..y * view.stride + view.width];
            row.iter().enumerate().map(move |(x, &px)| (x, y, px))
        })
    }
}

fn required_len(width: usize, height: usize, stride: usize) -> SlideMatchResult<usize> {
    if width == 0 || height == 0 {
        return Err(SlideMatchError::EmptyImage { width, height });
    }
    if stride < width {
        return Err(SlideMatchError::InvalidStride { width, stride });
    }
    (height - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(width))
        .ok_or(SlideMatchError::InvalidInput("image dimensions overflow"))
}

/// Owned contiguous RGBA image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnedImage {
    data: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl OwnedImage {
    /// Wraps a row-major buffer of exactly `width * height` pixels.
    pub fn new(data: Vec<Rgba>, width: usize, height: usize) -> SlideMatchResult<Self> {
        let needed = required_len(width, height, width)?;
        if data.len() < needed {
            return Err(SlideMatchError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        if data.len() > needed {
            return Err(SlideMatchError::InvalidInput(
                "buffer length does not match image dimensions",
            ));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates an image filled with a single colour.
    pub fn filled(width: usize, height: usize, color: Rgba) -> SlideMatchResult<Self> {
        let len = required_len(width, height, width)?;
        Self::new(vec![color; len], width, height)
    }

    /// Creates an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> SlideMatchResult<Self>
    where
        F: FnMut(usize, usize) -> Rgba,
    {
        let len = required_len(width, height, width)?;
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self::new(data, width, height)
    }

    /// Copies a view into a new contiguous buffer.
    pub fn from_view(view: PixelView<'_>) -> SlideMatchResult<Self> {
        let data = view.pixels().map(|(_, _, px)| px).collect();
        Self::new(data, view.width(), view.height())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the row-major pixel buffer.
    pub fn data(&self) -> &[Rgba] {
        &self.data
    }

    /// Mutable access to a single pixel.
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get_mut(y * self.width + x)
    }

    /// Returns a borrowed view of the image.
    pub fn view(&self) -> PixelView<'_> {
        PixelView {
            data: &self.data,
            width: self.width,
            height: self.height,
            stride: self.width,
        }
    }

    /// Copies a rectangular region into a new image.
    pub fn crop(&self, x: usize, y: usize, width: usize, height: usize) -> SlideMatchResult<Self> {
        Self::from_view(self.view().roi(x, y, width, height)?)
    }
}
