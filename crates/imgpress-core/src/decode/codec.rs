//! Format-agnostic image decoding.
//!
//! The format is sniffed from the content rather than trusted from a file
//! name or MIME type, so a PNG renamed to `.jpg` still decodes.

use std::io::Cursor;

use image::ImageReader;

use super::{DecodeError, SourceImage};

/// Decode an image of any supported format (JPEG, PNG, GIF, WEBP, BMP).
///
/// The header dimensions are checked against `max_pixels` before any pixel
/// data is decoded. Multi-frame formats yield their first frame.
///
/// # Errors
///
/// Returns `DecodeError::Empty` for an empty buffer,
/// `DecodeError::InvalidFormat` if the content matches no supported format,
/// `DecodeError::TooManyPixels` if the image is larger than `max_pixels`,
/// `DecodeError::CorruptedFile` if the decoder fails part-way, and
/// `DecodeError::ZeroSized` if the decoder produced no pixels.
pub fn decode_image(bytes: &[u8], max_pixels: u64) -> Result<SourceImage, DecodeError> {
    let (header_width, header_height) = probe_dimensions(bytes)?;
    check_pixel_budget(header_width, header_height, max_pixels)?;

    let img = guessed_reader(bytes)?
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let (width, height) = (img.width(), img.height());
    if width == 0 || height == 0 {
        return Err(DecodeError::ZeroSized { width, height });
    }
    // Headers can lie about the size of what follows.
    check_pixel_budget(width, height, max_pixels)?;

    Ok(SourceImage::from_rgba_image(img.into_rgba8()))
}

/// Read the image dimensions from the header without decoding pixel data.
pub fn probe_dimensions(bytes: &[u8]) -> Result<(u32, u32), DecodeError> {
    guessed_reader(bytes)?
        .into_dimensions()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))
}

fn check_pixel_budget(width: u32, height: u32, max_pixels: u64) -> Result<(), DecodeError> {
    if width as u64 * height as u64 > max_pixels {
        return Err(DecodeError::TooManyPixels {
            width,
            height,
            max: max_pixels,
        });
    }
    Ok(())
}

/// MIME type of the image format detected from the leading bytes, if any.
pub fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    image::guess_format(bytes)
        .ok()
        .map(|format| format.to_mime_type())
}

fn guessed_reader(bytes: &[u8]) -> Result<ImageReader<Cursor<&[u8]>>, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::Empty);
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    match reader.format() {
        Some(format) if format.reading_enabled() => Ok(reader),
        _ => Err(DecodeError::InvalidFormat),
    }
}
