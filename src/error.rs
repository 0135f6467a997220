//! Failure taxonomy for decode and encode operations.

use std::error::Error as StdError;

/// Error type shared by all decode/encode entry points.
///
/// Every failure causes full rollback of the current call: file handles,
/// engine state, and partially filled buffers are all dropped before the
/// error is returned. Nothing partial survives and nothing is retried.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PngError {
    /// Input does not begin with the 8-byte PNG signature.
    #[error("input does not start with the PNG signature")]
    BadSignature,
    /// Source or image bit depth other than 8 bits per channel.
    #[error("unsupported bit depth {0}, only 8 bits per channel is supported")]
    UnsupportedBitDepth(u8),
    /// Reserving the adapter's own pixel buffer failed.
    #[error("pixel buffer allocation failed")]
    Allocation,
    /// The underlying PNG engine reported a failure (malformed chunk, CRC
    /// mismatch, compression error, ...).
    #[error("codec engine failure: {0}")]
    Engine(#[source] Box<dyn StdError + Send + Sync>),
    /// Acquiring or draining a file/sink substrate failed.
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

impl From<png::DecodingError> for PngError {
    fn from(err: png::DecodingError) -> Self {
        PngError::Engine(Box::new(err))
    }
}

impl From<png::EncodingError> for PngError {
    fn from(err: png::EncodingError) -> Self {
        PngError::Engine(Box::new(err))
    }
}
