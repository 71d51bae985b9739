//! Width-bounded image scaling.
//!
//! Only the width is bounded; the height follows from the aspect ratio.
//! Images already within the bound are never upscaled.

use image::RgbImage;

use super::{DecodeError, FilterType};

/// Compute output dimensions for an image whose width must not exceed `max_width`.
///
/// If `width > max_width` the result is `(max_width, round(height * max_width / width))`,
/// with the height clamped to at least one pixel. Otherwise the input
/// dimensions are returned unchanged.
///
/// A `max_width` of zero yields `(0, 0)`.
pub fn bounded_dimensions(width: u32, height: u32, max_width: u32) -> (u32, u32) {
    if max_width == 0 {
        return (0, 0);
    }

    if width <= max_width {
        return (width, height);
    }

    let scale = max_width as f64 / width as f64;
    let new_height = (height as f64 * scale).round() as u32;

    (max_width, new_height.max(1))
}

/// Resize an opaque RGB image to exact dimensions.
///
/// Alpha must already be composited away: scaling straight-alpha pixels
/// would bleed the colour of transparent pixels into their neighbours.
///
/// # Errors
///
/// Returns `DecodeError::ZeroSized` if either target dimension is zero.
pub fn resize(
    image: &RgbImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<RgbImage, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::ZeroSized { width, height });
    }

    Ok(image::imageops::resize(
        image,
        width,
        height,
        filter.to_image_filter(),
    ))
}
