//! Image decoding for imgpress.
//!
//! This module provides functionality for:
//! - Decoding JPEG, PNG, GIF, WEBP and BMP images from bytes
//! - Reading image dimensions from the header alone, so oversized inputs are
//!   rejected before their pixels are decoded
//! - Width-bounded sizing that never upscales
//!
//! # Architecture
//!
//! Decoding is designed to be used from Web Workers via WASM bindings.
//! All operations are synchronous and single-threaded within WASM.
//!
//! # Examples
//!
//! ```ignore
//! use imgpress_core::decode::{bounded_dimensions, decode_image};
//!
//! let bytes = std::fs::read("photo.png").unwrap();
//! let image = decode_image(&bytes, 40_000_000).unwrap();
//! let (width, height) = bounded_dimensions(image.width, image.height, 1024);
//! println!("Decoded image will render at {}x{}", width, height);
//! ```

mod codec;
mod resize;
mod types;

pub use codec::{decode_image, probe_dimensions, sniff_mime};
pub use resize::{bounded_dimensions, resize};
pub use types::{DecodeError, FilterType, SourceImage};
