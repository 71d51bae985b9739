//! Image compression pipeline.
//!
//! Turns an image file into a width-bounded JPEG `data:` URL in four stages:
//!
//! 1. **Reading** - obtain the complete file from an [`ImageSource`]
//! 2. **Decoding** - sniff the format and decode to RGBA
//! 3. **Rendering** - allocate an off-screen surface at the output size and
//!    draw the image into it, scaling down if it is wider than `max_width`
//! 4. **Encoding** - encode the surface as JPEG and wrap it as a data URL
//!
//! Stages run strictly in order and the first failure ends the call, so every
//! invocation yields exactly one `Ok` or one [`CompressError`]. Each call owns
//! its decoded image and surface; both are released before it returns.
//!
//! # Examples
//!
//! ```ignore
//! use imgpress_core::compress::{compress, compress_with, CompressOptions};
//!
//! let bytes = std::fs::read("photo.png").unwrap();
//! let url = compress(&bytes).unwrap();
//! assert!(url.starts_with("data:image/jpeg;base64,"));
//!
//! let thumb = compress_with(&bytes, &CompressOptions::new(320, 0.5)).unwrap();
//! println!("{}x{} in {} bytes", thumb.width, thumb.height, thumb.byte_len);
//! ```

mod error;
mod options;

use log::debug;
use serde::Serialize;

use crate::decode::{bounded_dimensions, decode_image, sniff_mime};
use crate::encode::{quality_to_jpeg, DataUrl};
use crate::source::ImageSource;
use crate::surface::RenderSurface;

pub use error::{CompressError, Stage};
pub use options::{
    CompressOptions, DEFAULT_MAX_SOURCE_PIXELS, DEFAULT_MAX_WIDTH, DEFAULT_QUALITY,
};

/// The result of a successful compression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressedImage {
    /// `data:image/jpeg;base64,...`
    pub data_url: String,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Width of the decoded input.
    pub source_width: u32,
    /// Height of the decoded input.
    pub source_height: u32,
    /// Size of the JPEG payload in bytes (before base64).
    pub byte_len: usize,
}

impl CompressedImage {
    /// True if the output is smaller than the input.
    pub fn was_downscaled(&self) -> bool {
        (self.width, self.height) != (self.source_width, self.source_height)
    }
}

/// Compress with the default settings (max width 1024, quality 0.7).
pub fn compress(bytes: &[u8]) -> Result<String, CompressError> {
    compress_with(bytes, &CompressOptions::default()).map(|image| image.data_url)
}

/// Compress an in-memory image file.
pub fn compress_with(
    bytes: &[u8],
    options: &CompressOptions,
) -> Result<CompressedImage, CompressError> {
    compress_source(bytes, options)
}

/// Compress an image read from `source`.
///
/// # Errors
///
/// - `CompressError::InvalidOptions` if `options` fails validation
/// - `CompressError::Read` if the source cannot be read
/// - `CompressError::Decode` if the bytes are not a decodable image or the
///   image is larger than `options.max_source_pixels`
/// - `CompressError::RenderSurfaceUnavailable` if the output surface cannot
///   be allocated or drawn into; nothing is encoded in that case
/// - `CompressError::Encode` if JPEG encoding fails
pub fn compress_source<'a, S: ImageSource<'a>>(
    source: S,
    options: &CompressOptions,
) -> Result<CompressedImage, CompressError> {
    let result = run_pipeline(source, options);
    if let Err(err) = &result {
        debug!(
            "Compression failed at {}: {} ({})",
            err.stage().map_or("validation", Stage::as_str),
            err,
            err.code()
        );
    }
    result
}

fn run_pipeline<'a, S: ImageSource<'a>>(
    source: S,
    options: &CompressOptions,
) -> Result<CompressedImage, CompressError> {
    options.validate()?;
    let quality = options.effective_quality();

    debug!("{}: reading input", Stage::Reading);
    let bytes = source.read_bytes()?;

    debug!(
        "{}: {} bytes ({})",
        Stage::Decoding,
        bytes.len(),
        sniff_mime(&bytes).unwrap_or("unknown format")
    );
    let image = decode_image(&bytes, options.max_source_pixels)?;
    drop(bytes);

    let (source_width, source_height) = image.dimensions();
    let (width, height) = bounded_dimensions(source_width, source_height, options.max_width);
    debug!(
        "{}: {}x{} -> {}x{}",
        Stage::Rendering,
        source_width,
        source_height,
        width,
        height
    );
    let mut surface = RenderSurface::allocate(width, height, &options.limits)?;
    surface.draw(&image, options.filter)?;
    drop(image);

    let jpeg_quality = quality_to_jpeg(quality);
    debug!("{}: JPEG quality {}", Stage::Encoding, jpeg_quality);
    let jpeg = surface.encode_jpeg(jpeg_quality)?;
    let byte_len = jpeg.len();

    Ok(CompressedImage {
        data_url: DataUrl::jpeg(jpeg).to_string(),
        width,
        height,
        source_width,
        source_height,
        byte_len,
    })
}
