//! Per-call compression settings.

use log::warn;
use serde::{Deserialize, Serialize};

use super::CompressError;
use crate::decode::FilterType;
use crate::surface::SurfaceLimits;

/// Default upper bound on output width in pixels.
pub const DEFAULT_MAX_WIDTH: u32 = 1024;

/// Default lossy quality hint.
pub const DEFAULT_QUALITY: f32 = 0.7;

/// Default cap on decoded input size (100 megapixels, 400 MiB as RGBA).
pub const DEFAULT_MAX_SOURCE_PIXELS: u64 = 100_000_000;

/// Settings for one compression.
///
/// Deserializes from a partial camelCase object, e.g.
/// `{ "maxWidth": 800 }` or `{ "quality": 0.5, "filter": "lanczos3" }`;
/// missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompressOptions {
    /// Upper bound on output width. Narrower images keep their size.
    pub max_width: u32,
    /// JPEG quality hint in `0.0..=1.0`.
    pub quality: f32,
    /// Interpolation used when downscaling.
    pub filter: FilterType,
    /// Largest input, in pixels, that will be decoded.
    pub max_source_pixels: u64,
    /// Bounds on the off-screen surface.
    #[serde(flatten)]
    pub limits: SurfaceLimits,
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            quality: DEFAULT_QUALITY,
            filter: FilterType::default(),
            max_source_pixels: DEFAULT_MAX_SOURCE_PIXELS,
            limits: SurfaceLimits::default(),
        }
    }
}

impl CompressOptions {
    pub fn new(max_width: u32, quality: f32) -> Self {
        Self {
            max_width,
            quality,
            ..Self::default()
        }
    }

    pub fn with_max_width(mut self, max_width: u32) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn with_quality(mut self, quality: f32) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_max_source_pixels(mut self, max_source_pixels: u64) -> Self {
        self.max_source_pixels = max_source_pixels;
        self
    }

    pub fn with_limits(mut self, limits: SurfaceLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Reject settings no compression could satisfy.
    pub fn validate(&self) -> Result<(), CompressError> {
        if self.max_width == 0 {
            return Err(CompressError::InvalidOptions(
                "maxWidth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// The quality actually handed to the encoder.
    ///
    /// Like a browser canvas, a hint that is not a number in `0.0..=1.0` is
    /// ignored in favour of the default rather than treated as an error.
    pub fn effective_quality(&self) -> f32 {
        if (0.0..=1.0).contains(&self.quality) {
            self.quality
        } else {
            warn!(
                "Quality {} is outside 0.0..=1.0, using {}",
                self.quality, DEFAULT_QUALITY
            );
            DEFAULT_QUALITY
        }
    }
}
