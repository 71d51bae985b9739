//! imgpress WASM - WebAssembly bindings for imgpress
//!
//! This crate exposes imgpress-core image compression and the build
//! environment flags to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `compress` - Image compression to JPEG data URLs
//! - `env` - Development/production flags
//! - `types` - WASM-compatible wrapper types for results
//! - `logging` - Console logger for core log output
//!
//! Panics are reported to the browser console with their message and
//! location via `console_error_panic_hook`.
//!
//! # Usage
//!
//! ```typescript
//! import init, { compress_image } from '@imgpress/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const dataUrl = compress_image(bytes);
//! preview.src = dataUrl;
//! ```

use imgpress_core::EnvFlags;
use wasm_bindgen::prelude::*;

mod compress;
mod env;
mod logging;
mod types;

// Re-export public types
pub use compress::{compress_image, compress_image_with};
pub use env::{build_mode, is_development, is_production};
pub use types::JsCompressedImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    let flags = EnvFlags::detect();
    logging::init(&flags);
    if let Err(e) = flags.validate() {
        log::error!("{}", e);
    }
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
