//! Lossy JPEG encoding.
//!
//! Quality is accepted on the browser's `0.0..=1.0` scale and mapped onto the
//! encoder's `1..=100` scale with [`quality_to_jpeg`].

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::EncodeError;

/// Largest width or height a baseline JPEG can describe.
pub const JPEG_MAX_DIMENSION: u32 = u16::MAX as u32;

/// Map a `0.0..=1.0` quality hint onto the JPEG encoder's `1..=100` scale.
///
/// Values are rounded to the nearest step; anything at or below `0.005`
/// lands on 1 because the encoder has no quality 0.
pub fn quality_to_jpeg(quality: f32) -> u8 {
    if !quality.is_finite() {
        return 1;
    }
    (quality * 100.0).round().clamp(1.0, 100.0) as u8
}

/// Encode RGB pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - JPEG quality (1-100); values outside the range are clamped
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` for a zero or over-limit
/// dimension, `EncodeError::InvalidPixelData` if the buffer length does not
/// match, and `EncodeError::EncodingFailed` if the encoder itself fails.
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 || width > JPEG_MAX_DIMENSION || height > JPEG_MAX_DIMENSION {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = width as usize * height as usize * 3;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }

    let mut buffer = Cursor::new(Vec::with_capacity(expected / 8));
    JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100))
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    let bytes = buffer.into_inner();
    if bytes.is_empty() {
        return Err(EncodeError::EncodingFailed("encoder produced no output".to_string()));
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> Vec<u8> {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push((x * 255 / width) as u8);
                pixels.push((y * 255 / height) as u8);
                pixels.push(((x ^ y) & 0xFF) as u8);
            }
        }
        pixels
    }

    #[test]
    fn test_quality_to_jpeg() {
        assert_eq!(quality_to_jpeg(0.7), 70);
        assert_eq!(quality_to_jpeg(1.0), 100);
        assert_eq!(quality_to_jpeg(0.93), 93);
        assert_eq!(quality_to_jpeg(0.0), 1);
        assert_eq!(quality_to_jpeg(-3.0), 1);
        assert_eq!(quality_to_jpeg(7.0), 100);
        assert_eq!(quality_to_jpeg(f32::NAN), 1);
    }

    #[test]
    fn test_encode_jpeg_markers() {
        let jpeg = encode_jpeg(&gradient(64, 32), 64, 32, 70).unwrap();

        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
        assert_eq!(&jpeg[jpeg.len() - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_jpeg_decodes_to_same_size() {
        let jpeg = encode_jpeg(&gradient(37, 19), 37, 19, 70).unwrap();
        let decoded = image::load_from_memory(&jpeg).unwrap();

        assert_eq!((decoded.width(), decoded.height()), (37, 19));
    }

    #[test]
    fn test_encode_jpeg_quality_affects_size() {
        let pixels = gradient(128, 128);

        let low = encode_jpeg(&pixels, 128, 128, 10).unwrap();
        let high = encode_jpeg(&pixels, 128, 128, 90).unwrap();

        assert!(high.len() > low.len(), "low={} high={}", low.len(), high.len());
    }

    #[test]
    fn test_encode_jpeg_invalid_pixel_data() {
        let result = encode_jpeg(&[0u8; 10], 2, 2, 70);
        assert!(matches!(
            result,
            Err(EncodeError::InvalidPixelData {
                expected: 12,
                actual: 10
            })
        ));
    }

    #[test]
    fn test_encode_jpeg_zero_dimensions() {
        assert!(matches!(
            encode_jpeg(&[], 0, 10, 70),
            Err(EncodeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            encode_jpeg(&[], 10, 0, 70),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_encode_jpeg_over_limit_dimensions() {
        let result = encode_jpeg(&[], JPEG_MAX_DIMENSION + 1, 1, 70);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: every finite quality maps into 1..=100.
        #[test]
        fn prop_quality_mapping_in_range(quality in -10.0f32..10.0) {
            let q = quality_to_jpeg(quality);
            prop_assert!((1..=100).contains(&q));
        }

        /// Property: the mapping is monotonic.
        #[test]
        fn prop_quality_mapping_monotonic(a in 0.0f32..=1.0, b in 0.0f32..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(quality_to_jpeg(lo) <= quality_to_jpeg(hi));
        }

        /// Property: valid input always produces a JPEG with SOI and EOI markers.
        #[test]
        fn prop_valid_input_produces_valid_jpeg(
            width in 1u32..=40,
            height in 1u32..=40,
            quality in 1u8..=100,
        ) {
            let pixels = vec![90u8; (width * height * 3) as usize];
            let jpeg = encode_jpeg(&pixels, width, height, quality).unwrap();

            prop_assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
            prop_assert_eq!(&jpeg[jpeg.len() - 2..], &[0xFF, 0xD9]);
        }
    }
}
