//! imgpress Core - Image compression library
//!
//! This crate downsamples image files and re-encodes them as compressed JPEG
//! `data:` URLs, and exposes the build environment flags used by the rest of
//! the application.
//!
//! # Modules
//!
//! - `source` - reading the input file (in-memory or streamed)
//! - `decode` - format sniffing, decoding and width-bounded resizing
//! - `surface` - the off-screen bitmap images are drawn into
//! - `encode` - JPEG encoding and data URL handling
//! - `compress` - the pipeline tying the stages together
//! - `env` - development/production flags

pub mod compress;
pub mod decode;
pub mod encode;
pub mod env;
pub mod source;
pub mod surface;

#[cfg(test)]
pub(crate) mod test_support;

pub use compress::{
    compress, compress_source, compress_with, CompressError, CompressOptions, CompressedImage,
    Stage,
};
pub use env::{EnvFlags, Mode};
