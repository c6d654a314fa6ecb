//! Format detection utilities.
//!
//! Detects image formats from file extensions and magic bytes. Only PNG can be
//! read or written; the other variants exist so that a misnamed or foreign
//! file produces a precise error message instead of a generic one.

use std::path::Path;

/// Image formats petal can recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// PNG format (supported).
    Png,
    /// JPEG format (recognized, lossy and alpha-less, not supported).
    Jpeg,
    /// TIFF format (recognized, not supported).
    Tiff,
    /// GIF format (recognized, not supported).
    Gif,
    /// WebP format (recognized, not supported).
    WebP,
    /// BMP format (recognized, not supported).
    Bmp,
    /// Unknown format.
    Unknown,
}

impl Format {
    /// Detects format from file extension only.
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("png") => Format::Png,
            Some("jpg") | Some("jpeg") => Format::Jpeg,
            Some("tif") | Some("tiff") => Format::Tiff,
            Some("gif") => Format::Gif,
            Some("webp") => Format::WebP,
            Some("bmp") => Format::Bmp,
            _ => Format::Unknown,
        }
    }

    /// Detects format from raw bytes (magic number check).
    pub fn from_bytes(bytes: &[u8]) -> Self {
        // PNG: 0x89 'P' 'N' 'G' CR LF SUB LF
        if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
            return Format::Png;
        }

        // JPEG: 0xFF 0xD8 0xFF
        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Format::Jpeg;
        }

        // TIFF: II (little-endian) or MM (big-endian)
        if bytes.starts_with(&[0x49, 0x49, 0x2A, 0x00])
            || bytes.starts_with(&[0x4D, 0x4D, 0x00, 0x2A])
        {
            return Format::Tiff;
        }

        if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            return Format::Gif;
        }

        // WebP: RIFF....WEBP
        if bytes.len() >= 12 && bytes[0..4] == *b"RIFF" && bytes[8..12] == *b"WEBP" {
            return Format::WebP;
        }

        if bytes.starts_with(b"BM") && bytes.len() >= 14 {
            return Format::Bmp;
        }

        Format::Unknown
    }

    /// Returns true if petal can decode and encode this format.
    pub fn is_supported(&self) -> bool {
        matches!(self, Format::Png)
    }

    /// Human-readable format name.
    pub fn name(&self) -> &'static str {
        match self {
            Format::Png => "PNG",
            Format::Jpeg => "JPEG",
            Format::Tiff => "TIFF",
            Format::Gif => "GIF",
            Format::WebP => "WebP",
            Format::Bmp => "BMP",
            Format::Unknown => "unknown",
        }
    }
}
