//! Image encoding for imgpress.
//!
//! This module provides functionality for:
//! - Encoding RGB pixels to JPEG with a browser-style `0.0..=1.0` quality
//! - Wrapping encoded bytes as a self-describing `data:` URL
//!
//! # Examples
//!
//! ```ignore
//! use imgpress_core::encode::{encode_jpeg, quality_to_jpeg, DataUrl};
//!
//! let pixels = vec![128u8; 100 * 100 * 3]; // Gray image
//! let jpeg = encode_jpeg(&pixels, 100, 100, quality_to_jpeg(0.7)).unwrap();
//! let url = DataUrl::jpeg(jpeg).to_string();
//! assert!(url.starts_with("data:image/jpeg;base64,"));
//! ```

mod data_url;
mod jpeg;

use thiserror::Error;

pub use data_url::DataUrl;
pub use jpeg::{encode_jpeg, quality_to_jpeg, JPEG_MAX_DIMENSION};

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero or beyond what JPEG can describe
    #[error("Invalid dimensions: {width}x{height} cannot be encoded as JPEG")]
    InvalidDimensions { width: u32, height: u32 },

    /// JPEG encoding failed
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),

    /// A string could not be parsed as a base64 data URL
    #[error("Malformed data URL: {0}")]
    MalformedDataUrl(String),
}
