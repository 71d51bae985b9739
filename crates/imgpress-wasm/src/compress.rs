//! Image compression WASM bindings.
//!
//! This module exposes the imgpress-core compression pipeline to JavaScript.
//!
//! # Functions
//!
//! - [`compress_image`] - Compress to a JPEG data URL
//! - [`compress_image_with`] - Compress with an options object, returning dimensions too
//!
//! # Errors
//!
//! Failures are thrown as `Error` objects whose `name` identifies the kind:
//! `ReadFailure`, `DecodeFailure`, `RenderSurfaceUnavailable`,
//! `EncodeFailure` or `InvalidOptions`.
//!
//! # Example
//!
//! ```typescript
//! import { compress_image, compress_image_with } from '@imgpress/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//!
//! try {
//!   const url = compress_image(bytes); // 1024px wide at most, quality 0.7
//!   img.src = url;
//! } catch (e) {
//!   if (e.name === 'DecodeFailure') showError('Not an image');
//! }
//!
//! const thumb = compress_image_with(bytes, { maxWidth: 320, quality: 0.5 });
//! console.log(`${thumb.width}x${thumb.height}, ${thumb.byteLength} bytes`);
//! ```

use crate::types::JsCompressedImage;
use imgpress_core::{compress_with, CompressError, CompressOptions};
use wasm_bindgen::prelude::*;

/// Compress an image file to a JPEG data URL.
///
/// # Arguments
///
/// * `bytes` - The image file as a `Uint8Array` (JPEG, PNG, GIF, WEBP or BMP)
/// * `max_width` - Upper bound on output width, default 1024
/// * `quality` - JPEG quality in `0.0..=1.0`, default 0.7
///
/// # Returns
///
/// A `data:image/jpeg;base64,...` string.
///
/// # Example
///
/// ```typescript
/// const url = compress_image(bytes, 800, 0.6);
/// ```
#[wasm_bindgen]
pub fn compress_image(
    bytes: &[u8],
    max_width: Option<u32>,
    quality: Option<f32>,
) -> Result<String, JsValue> {
    let options = resolve_options(max_width, quality);
    compress_with(bytes, &options)
        .map(|image| image.data_url)
        .map_err(|e| to_js_error(&e))
}

/// Compress an image file using an options object.
///
/// # Arguments
///
/// * `bytes` - The image file as a `Uint8Array`
/// * `options` - `{ maxWidth?, quality?, filter?, maxSourcePixels?,
///   maxDimension?, maxPixels? }`, or `undefined` for the defaults
///
/// # Returns
///
/// A `JsCompressedImage` with the data URL and output/source dimensions.
#[wasm_bindgen]
pub fn compress_image_with(bytes: &[u8], options: JsValue) -> Result<JsCompressedImage, JsValue> {
    let options = if options.is_undefined() || options.is_null() {
        CompressOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options).map_err(|e| {
            to_js_error(&CompressError::InvalidOptions(e.to_string()))
        })?
    };

    compress_with(bytes, &options)
        .map(JsCompressedImage::from)
        .map_err(|e| to_js_error(&e))
}

/// Build options from the optional positional arguments.
fn resolve_options(max_width: Option<u32>, quality: Option<f32>) -> CompressOptions {
    let defaults = CompressOptions::default();
    CompressOptions::new(
        max_width.unwrap_or(defaults.max_width),
        quality.unwrap_or(defaults.quality),
    )
}

/// Convert a pipeline error into a JS `Error` named after its kind.
fn to_js_error(err: &CompressError) -> JsValue {
    let js_err = js_sys::Error::new(&err.to_string());
    js_err.set_name(err.code());
    js_err.into()
}
