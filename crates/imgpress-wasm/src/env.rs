//! Environment flag bindings.
//!
//! ```typescript
//! import { is_development, is_production } from '@imgpress/wasm';
//!
//! if (is_development()) enableDebugPanel();
//! ```

use imgpress_core::EnvFlags;
use wasm_bindgen::prelude::*;

/// True when the module was built for development.
#[wasm_bindgen]
pub fn is_development() -> bool {
    EnvFlags::detect().is_development()
}

/// True when the module was built for production.
#[wasm_bindgen]
pub fn is_production() -> bool {
    EnvFlags::detect().is_production()
}

/// Name of the build mode: `development`, `production` or `test`.
#[wasm_bindgen]
pub fn build_mode() -> String {
    EnvFlags::detect().mode().to_string()
}
