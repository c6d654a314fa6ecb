//! Error types for petal-core operations.
//!
//! # Usage
//!
//! ```rust
//! use petal_core::{Error, RgbaImage};
//!
//! let err = RgbaImage::from_raw(2, 2, vec![0u8; 3]).unwrap_err();
//! assert!(matches!(err, Error::BufferSizeMismatch { .. }));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building or accessing pixel buffers.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid image dimensions.
    ///
    /// Returned when width or height is zero, or the buffer size
    /// calculation would overflow.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Raw buffer length does not match `width * height * 4`.
    #[error("buffer size mismatch for {width}x{height}: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch {
        /// Image width
        width: u32,
        /// Image height
        height: u32,
        /// Expected byte count
        expected: usize,
        /// Actual byte count
        actual: usize,
    },

    /// Pixel coordinates are outside image bounds.
    #[error("pixel ({x}, {y}) out of bounds for image {width}x{height}")]
    OutOfBounds {
        /// X coordinate
        x: u32,
        /// Y coordinate
        y: u32,
        /// Image width
        width: u32,
        /// Image height
        height: u32,
    },
}
