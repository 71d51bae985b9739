//! Compression pipeline errors.

use std::fmt;

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;
use crate::source::ReadError;
use crate::surface::SurfaceError;

/// A step of the compression pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Reading,
    Decoding,
    Rendering,
    Encoding,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Reading => "reading",
            Stage::Decoding => "decoding",
            Stage::Rendering => "rendering",
            Stage::Encoding => "encoding",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a compression failed. Exactly one is produced per failed call.
#[derive(Debug, Error)]
pub enum CompressError {
    /// The input could not be read.
    #[error("Failed to read image: {0}")]
    Read(#[from] ReadError),

    /// The input is not a decodable image.
    #[error("Failed to decode image: {0}")]
    Decode(#[from] DecodeError),

    /// The off-screen surface could not be created or drawn into.
    #[error("Rendering surface unavailable: {0}")]
    RenderSurfaceUnavailable(#[from] SurfaceError),

    /// The surface could not be encoded.
    #[error("Failed to encode image: {0}")]
    Encode(#[from] EncodeError),

    /// The options were rejected before any work started.
    #[error("Invalid compression options: {0}")]
    InvalidOptions(String),
}

impl CompressError {
    /// The stage that failed, or `None` if the pipeline never started.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            CompressError::Read(_) => Some(Stage::Reading),
            CompressError::Decode(_) => Some(Stage::Decoding),
            CompressError::RenderSurfaceUnavailable(_) => Some(Stage::Rendering),
            CompressError::Encode(_) => Some(Stage::Encoding),
            CompressError::InvalidOptions(_) => None,
        }
    }

    /// Stable identifier for the failure kind, used as the JS error name.
    pub fn code(&self) -> &'static str {
        match self {
            CompressError::Read(_) => "ReadFailure",
            CompressError::Decode(_) => "DecodeFailure",
            CompressError::RenderSurfaceUnavailable(_) => "RenderSurfaceUnavailable",
            CompressError::Encode(_) => "EncodeFailure",
            CompressError::InvalidOptions(_) => "InvalidOptions",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_stage_order() {
        assert!(Stage::Reading < Stage::Decoding);
        assert!(Stage::Decoding < Stage::Rendering);
        assert!(Stage::Rendering < Stage::Encoding);
    }

    #[test]
    fn test_codes_and_stages() {
        let cases: Vec<(CompressError, &str, Option<Stage>)> = vec![
            (
                ReadError::TooLarge { limit: 1 }.into(),
                "ReadFailure",
                Some(Stage::Reading),
            ),
            (
                DecodeError::InvalidFormat.into(),
                "DecodeFailure",
                Some(Stage::Decoding),
            ),
            (
                SurfaceError::ZeroSized {
                    width: 0,
                    height: 0,
                }
                .into(),
                "RenderSurfaceUnavailable",
                Some(Stage::Rendering),
            ),
            (
                EncodeError::EncodingFailed("boom".to_string()).into(),
                "EncodeFailure",
                Some(Stage::Encoding),
            ),
            (
                CompressError::InvalidOptions("bad".to_string()),
                "InvalidOptions",
                None,
            ),
        ];

        for (err, code, stage) in cases {
            assert_eq!(err.code(), code);
            assert_eq!(err.stage(), stage);
        }
    }

    #[test]
    fn test_display_includes_cause() {
        let err = CompressError::from(DecodeError::InvalidFormat);
        assert_eq!(
            err.to_string(),
            "Failed to decode image: Invalid or unsupported image format"
        );
    }

    #[test]
    fn test_source_chain() {
        let err = CompressError::from(DecodeError::Empty);
        assert!(err.source().is_some());
        assert!(CompressError::InvalidOptions("x".to_string()).source().is_none());
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::Rendering.to_string(), "rendering");
    }
}
