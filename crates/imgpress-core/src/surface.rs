//! Off-screen rendering surface.
//!
//! A [`RenderSurface`] is an opaque RGB bitmap that a decoded image is drawn
//! into before encoding. Source pixels are composited over black at their
//! native size and only then scaled, so the result matches what a browser
//! canvas (which scales premultiplied colour) produces when exported as JPEG.
//!
//! Allocation is checked against [`SurfaceLimits`] and performed with a
//! fallible reservation, so an oversized or unobtainable surface is reported
//! as an error instead of aborting the process.

use image::RgbImage;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::{self, DecodeError, FilterType, SourceImage};
use crate::encode::{self, EncodeError, JPEG_MAX_DIMENSION};

/// Largest canvas area browsers commonly allow (16384 x 16384).
pub const DEFAULT_MAX_PIXELS: u64 = 16_384 * 16_384;

/// Errors raised while creating or drawing into a surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// Width or height is zero.
    #[error("Surface must be at least 1x1, requested {width}x{height}")]
    ZeroSized { width: u32, height: u32 },

    /// A side exceeds the maximum surface dimension.
    #[error("Surface {width}x{height} exceeds the maximum dimension of {max}px")]
    DimensionTooLarge { width: u32, height: u32, max: u32 },

    /// The pixel count exceeds the configured budget.
    #[error("Surface {width}x{height} exceeds the limit of {max} pixels")]
    TooManyPixels { width: u32, height: u32, max: u64 },

    /// The backing buffer could not be allocated.
    #[error("Could not allocate {bytes} bytes for a {width}x{height} surface")]
    AllocationFailed { width: u32, height: u32, bytes: u64 },

    /// The source image could not be scaled onto the surface.
    #[error("Failed to draw image onto surface: {0}")]
    DrawFailed(#[from] DecodeError),
}

/// Bounds on surfaces the compressor is willing to allocate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SurfaceLimits {
    /// Maximum width or height in pixels.
    pub max_dimension: u32,
    /// Maximum width * height.
    pub max_pixels: u64,
}

impl Default for SurfaceLimits {
    fn default() -> Self {
        Self {
            max_dimension: JPEG_MAX_DIMENSION,
            max_pixels: DEFAULT_MAX_PIXELS,
        }
    }
}

impl SurfaceLimits {
    /// Check that a `width` x `height` surface fits these limits.
    pub fn check(&self, width: u32, height: u32) -> Result<(), SurfaceError> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::ZeroSized { width, height });
        }

        // A surface we could never encode is as unusable as one we cannot allocate.
        let max = self.max_dimension.min(JPEG_MAX_DIMENSION);
        if width > max || height > max {
            return Err(SurfaceError::DimensionTooLarge { width, height, max });
        }

        let pixels = width as u64 * height as u64;
        if pixels > self.max_pixels {
            return Err(SurfaceError::TooManyPixels {
                width,
                height,
                max: self.max_pixels,
            });
        }

        Ok(())
    }
}

/// An opaque RGB bitmap (3 bytes per pixel, row-major).
#[derive(Debug)]
pub struct RenderSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RenderSurface {
    /// Allocate a black surface of the given size.
    ///
    /// # Errors
    ///
    /// Returns a `SurfaceError` if the size violates `limits` or the buffer
    /// cannot be reserved.
    pub fn allocate(width: u32, height: u32, limits: &SurfaceLimits) -> Result<Self, SurfaceError> {
        limits.check(width, height)?;

        Ok(Self {
            width,
            height,
            pixels: try_alloc_rgb(width, height)?,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGB pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Draw `image` scaled to fill the whole surface.
    ///
    /// Alpha is composited over black before scaling.
    pub fn draw(&mut self, image: &SourceImage, filter: FilterType) -> Result<(), SurfaceError> {
        let composited = composite_over_black(image)?;

        self.pixels = if composited.dimensions() == (self.width, self.height) {
            composited.into_raw()
        } else {
            decode::resize(&composited, self.width, self.height, filter)?.into_raw()
        };

        Ok(())
    }

    /// Encode the surface as JPEG, releasing the bitmap afterwards.
    pub fn encode_jpeg(self, quality: u8) -> Result<Vec<u8>, EncodeError> {
        encode::encode_jpeg(&self.pixels, self.width, self.height, quality)
    }
}

/// Zeroed RGB buffer for a `width` x `height` image, reserved fallibly.
fn try_alloc_rgb(width: u32, height: u32) -> Result<Vec<u8>, SurfaceError> {
    let bytes = width as u64 * height as u64 * 3;
    let allocation_failed = || SurfaceError::AllocationFailed {
        width,
        height,
        bytes,
    };

    let len = usize::try_from(bytes).map_err(|_| allocation_failed())?;
    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(len)
        .map_err(|_| allocation_failed())?;
    pixels.resize(len, 0);
    Ok(pixels)
}

/// Flatten RGBA onto black, giving premultiplied colour with alpha dropped.
fn composite_over_black(image: &SourceImage) -> Result<RgbImage, SurfaceError> {
    let (width, height) = image.dimensions();
    let mut rgb = try_alloc_rgb(width, height)?;

    for (dst, src) in rgb.chunks_exact_mut(3).zip(image.pixels.chunks_exact(4)) {
        let alpha = src[3] as u32;
        for channel in 0..3 {
            dst[channel] = ((src[channel] as u32 * alpha + 127) / 255) as u8;
        }
    }

    RgbImage::from_raw(width, height, rgb).ok_or_else(|| {
        DecodeError::CorruptedFile("pixel buffer does not match image dimensions".to_string())
            .into()
    })
}
