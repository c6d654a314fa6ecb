//! Error types for I/O operations.
//!
//! Every failure to obtain pixels from a source file is a
//! [`DecodeError`](IoError::DecodeError), and every failure to produce the
//! destination file is an [`EncodeError`](IoError::EncodeError). That includes
//! missing files, unsupported formats and filesystem errors.

use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// Source image is missing, unreadable, corrupt or in an unsupported format.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Destination image cannot be encoded or written.
    #[error("encode error: {0}")]
    EncodeError(String),
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
