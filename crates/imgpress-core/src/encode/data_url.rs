//! `data:` URL construction and parsing.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::EncodeError;

const SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// A base64 `data:` URL carrying a MIME type and a binary payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    mime: String,
    data: Vec<u8>,
}

impl DataUrl {
    pub fn new(mime: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            data,
        }
    }

    /// Wrap JPEG bytes as `image/jpeg`.
    pub fn jpeg(data: Vec<u8>) -> Self {
        Self::new("image/jpeg", data)
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Parse `data:<mime>;base64,<payload>`.
    ///
    /// Only base64 URLs are accepted; surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self, EncodeError> {
        let trimmed = input.trim();

        let rest = trimmed
            .strip_prefix(SCHEME)
            .ok_or_else(|| EncodeError::MalformedDataUrl("missing data: scheme".to_string()))?;

        let marker = rest
            .find(BASE64_MARKER)
            .ok_or_else(|| EncodeError::MalformedDataUrl("missing ;base64, marker".to_string()))?;

        let mime = &rest[..marker];
        if mime.is_empty() || !mime.contains('/') {
            return Err(EncodeError::MalformedDataUrl(format!(
                "invalid MIME type '{}'",
                mime
            )));
        }

        let payload = &rest[marker + BASE64_MARKER.len()..];
        let data = STANDARD
            .decode(payload)
            .map_err(|e| EncodeError::MalformedDataUrl(format!("invalid base64 payload: {}", e)))?;

        Ok(Self::new(mime, data))
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            SCHEME,
            self.mime,
            BASE64_MARKER,
            STANDARD.encode(&self.data)
        )
    }
}
