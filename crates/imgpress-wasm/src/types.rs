//! WASM-compatible wrapper types for compression results.

use imgpress_core::CompressedImage;
use wasm_bindgen::prelude::*;

/// A compressed image returned to JavaScript.
///
/// Holds the JPEG data URL together with the output and source dimensions.
#[wasm_bindgen]
pub struct JsCompressedImage {
    inner: CompressedImage,
}

#[wasm_bindgen]
impl JsCompressedImage {
    /// The `data:image/jpeg;base64,...` string.
    #[wasm_bindgen(getter, js_name = dataUrl)]
    pub fn data_url(&self) -> String {
        self.inner.data_url.clone()
    }

    /// Output width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Output height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Width of the original image
    #[wasm_bindgen(getter, js_name = sourceWidth)]
    pub fn source_width(&self) -> u32 {
        self.inner.source_width
    }

    /// Height of the original image
    #[wasm_bindgen(getter, js_name = sourceHeight)]
    pub fn source_height(&self) -> u32 {
        self.inner.source_height
    }

    /// Size of the JPEG payload in bytes, before base64 encoding
    #[wasm_bindgen(getter, js_name = byteLength)]
    pub fn byte_length(&self) -> usize {
        self.inner.byte_len
    }
}

impl From<CompressedImage> for JsCompressedImage {
    fn from(inner: CompressedImage) -> Self {
        Self { inner }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_getters() {
        let img = JsCompressedImage::from(CompressedImage {
            data_url: "data:image/jpeg;base64,/9j/".to_string(),
            width: 1024,
            height: 512,
            source_width: 2000,
            source_height: 1000,
            byte_len: 3,
        });

        assert_eq!(img.data_url(), "data:image/jpeg;base64,/9j/");
        assert_eq!((img.width(), img.height()), (1024, 512));
        assert_eq!((img.source_width(), img.source_height()), (2000, 1000));
        assert_eq!(img.byte_length(), 3);
    }
}
