//! Input acquisition for the compression pipeline.
//!
//! An [`ImageSource`] yields the complete encoded file. In-memory buffers are
//! borrowed as-is; streamed input (`std::io::Read`) is drained into an owned
//! buffer, which is the only place a read can fail.

use std::borrow::Cow;
use std::io::Read;

use thiserror::Error;

/// Errors raised while reading the input file.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The underlying reader failed.
    #[error("Failed to read image data: {0}")]
    Io(#[from] std::io::Error),

    /// The stream is longer than the configured limit.
    #[error("Image data exceeds the {limit} byte read limit")]
    TooLarge { limit: u64 },
}

/// Something the compressor can read a complete image file from.
pub trait ImageSource<'a> {
    /// Consume the source and return the full file contents.
    fn read_bytes(self) -> Result<Cow<'a, [u8]>, ReadError>;
}

impl<'a> ImageSource<'a> for &'a [u8] {
    fn read_bytes(self) -> Result<Cow<'a, [u8]>, ReadError> {
        Ok(Cow::Borrowed(self))
    }
}

impl<'a> ImageSource<'a> for &'a Vec<u8> {
    fn read_bytes(self) -> Result<Cow<'a, [u8]>, ReadError> {
        Ok(Cow::Borrowed(self.as_slice()))
    }
}

impl<'a> ImageSource<'a> for Vec<u8> {
    fn read_bytes(self) -> Result<Cow<'a, [u8]>, ReadError> {
        Ok(Cow::Owned(self))
    }
}

/// Streamed input drained through `std::io::Read`.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    limit: Option<u64>,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            limit: None,
        }
    }

    /// Fail with `ReadError::TooLarge` instead of reading more than `limit` bytes.
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl<'a, R: Read> ImageSource<'a> for ReaderSource<R> {
    fn read_bytes(self) -> Result<Cow<'a, [u8]>, ReadError> {
        let mut buffer = Vec::new();

        match self.limit {
            Some(limit) => {
                // One byte past the limit tells "exactly at limit" from "over".
                let read = self
                    .reader
                    .take(limit.saturating_add(1))
                    .read_to_end(&mut buffer)?;
                if read as u64 > limit {
                    return Err(ReadError::TooLarge { limit });
                }
            }
            None => {
                let mut reader = self.reader;
                reader.read_to_end(&mut buffer)?;
            }
        }

        Ok(Cow::Owned(buffer))
    }
}
