//! In-memory test images.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::encode::DataUrl;

/// Smooth horizontal/vertical gradient, fully opaque.
pub(crate) fn gradient_rgba(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            128,
            255,
        ])
    })
}

/// Gradient with deterministic high-frequency noise, so JPEG quality
/// visibly changes the output size.
pub(crate) fn textured_rgba(width: u32, height: u32) -> RgbaImage {
    let mut state = 0x2545_F491u32;
    RgbaImage::from_fn(width, height, |x, y| {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        let noise = (state & 0x3F) as u8;
        image::Rgba([
            ((x * 191 / width.max(1)) as u8).wrapping_add(noise),
            ((y * 191 / height.max(1)) as u8).wrapping_add(noise / 2),
            (((x + y) * 4) as u8).wrapping_add(noise),
            255,
        ])
    })
}

/// Encode an image in `format`, dropping alpha for formats that lack it.
pub(crate) fn encode_as(img: &RgbaImage, format: ImageFormat) -> Vec<u8> {
    let dynamic = match format {
        ImageFormat::Jpeg => {
            DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(img.clone()).into_rgb8())
        }
        _ => DynamicImage::ImageRgba8(img.clone()),
    };
    let mut buffer = Cursor::new(Vec::new());
    dynamic
        .write_to(&mut buffer, format)
        .expect("test image should encode");
    buffer.into_inner()
}

/// Parse a data URL and decode its payload, returning the detected format.
pub(crate) fn decode_data_url(url: &str) -> (ImageFormat, DynamicImage) {
    let parsed = DataUrl::parse(url).expect("valid data URL");
    let format = image::guess_format(parsed.data()).expect("known image format");
    let decoded = image::load_from_memory(parsed.data()).expect("decodable payload");
    (format, decoded)
}
