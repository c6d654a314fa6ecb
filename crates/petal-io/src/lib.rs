//! # petal-io
//!
//! Image I/O for petal.
//!
//! Sources and destinations are PNG: lossless and alpha-preserving, which is
//! what the recolor and matte invariants need. Decoded images are always
//! [`RgbaImage`]s.
//!
//! - [`read`] / [`write`] - path-based entry points with format checks
//! - [`png::decode`] / [`png::encode`] - in-memory codec
//! - [`Format`] - extension and magic-byte detection
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use petal_io::{read, write};
//!
//! let image = read("input.png")?;
//! write("output.png", &image)?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod detect;
mod error;
pub mod png;

pub use detect::Format;
pub use error::{IoError, IoResult};

use std::path::Path;

use petal_core::RgbaImage;

/// Reads an image, checking its magic bytes.
///
/// # Errors
///
/// Returns [`IoError::DecodeError`] if:
/// - The file cannot be opened or read
/// - The content is not a PNG stream
/// - The PNG stream is corrupt
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<RgbaImage> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|e| IoError::DecodeError(format!("cannot read {}: {}", path.display(), e)))?;

    let format = Format::from_bytes(&bytes);
    if !format.is_supported() {
        return Err(IoError::DecodeError(format!(
            "{}: {} content is not supported (PNG only)",
            path.display(),
            format.name()
        )));
    }

    png::decode(&bytes).map_err(|e| match e {
        IoError::DecodeError(msg) => IoError::DecodeError(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}

/// Writes an image, choosing the format from the extension.
///
/// # Errors
///
/// Returns [`IoError::EncodeError`] if:
/// - The extension is not `.png`
/// - The file cannot be created or written
pub fn write<P: AsRef<Path>>(path: P, image: &RgbaImage) -> IoResult<()> {
    let path = path.as_ref();
    let format = Format::from_extension(path);
    if !format.is_supported() {
        return Err(IoError::EncodeError(format!(
            "{}: cannot write {} files (PNG only)",
            path.display(),
            format.name()
        )));
    }
    png::write(path, image)
}
