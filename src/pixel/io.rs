//! Decoding and encoding through the `image` crate.

use crate::pixel::{OwnedImage, Rgba};
use crate::util::{SlideMatchError, SlideMatchResult};
use std::io::Cursor;
use std::path::Path;

/// Decodes encoded image bytes (PNG, JPEG, GIF, BMP, WebP) into RGBA pixels.
pub fn decode_rgba(bytes: &[u8]) -> SlideMatchResult<OwnedImage> {
    let img = ::image::load_from_memory(bytes).map_err(|err| SlideMatchError::Decode {
        reason: err.to_string(),
    })?;
    owned_from_dynamic_image(&img)
}

/// Loads an image from disk as RGBA pixels.
pub fn load_rgba_image<P: AsRef<Path>>(path: P) -> SlideMatchResult<OwnedImage> {
    let path = path.as_ref();
    let img = ::image::open(path).map_err(|err| SlideMatchError::Decode {
        reason: format!("{}: {err}", path.display()),
    })?;
    owned_from_dynamic_image(&img)
}

/// Converts any decoded image to an owned RGBA buffer.
pub fn owned_from_dynamic_image(img: &::image::DynamicImage) -> SlideMatchResult<OwnedImage> {
    let rgba = img.to_rgba8();
    let width = rgba.width() as usize;
    let height = rgba.height() as usize;
    let data = rgba
        .pixels()
        .map(|px| Rgba::new(px[0], px[1], px[2], px[3]))
        .collect();
    OwnedImage::new(data, width, height)
}

/// Converts an owned buffer back into an `image` RGBA buffer.
pub fn to_rgba_buffer(img: &OwnedImage) -> SlideMatchResult<::image::RgbaImage> {
    let raw: Vec<u8> = img
        .data()
        .iter()
        .flat_map(|px| [px.r, px.g, px.b, px.a])
        .collect();
    let width = u32::try_from(img.width())
        .map_err(|_| SlideMatchError::InvalidInput("width exceeds u32"))?;
    let height = u32::try_from(img.height())
        .map_err(|_| SlideMatchError::InvalidInput("height exceeds u32"))?;
    ::image::RgbaImage::from_raw(width, height, raw).ok_or(SlideMatchError::InvalidInput(
        "buffer length does not match image dimensions",
    ))
}

/// Encodes a decoded image as PNG bytes.
pub fn encode_png(img: &::image::DynamicImage) -> SlideMatchResult<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ::image::ImageFormat::Png)
        .map_err(|err| SlideMatchError::Encode {
            reason: err.to_string(),
        })?;
    Ok(out.into_inner())
}

/// Encodes an owned RGBA buffer as PNG bytes.
pub fn encode_rgba_png(img: &OwnedImage) -> SlideMatchResult<Vec<u8>> {
    let buffer = to_rgba_buffer(img)?;
    encode_png(&::image::DynamicImage::ImageRgba8(buffer))
}
