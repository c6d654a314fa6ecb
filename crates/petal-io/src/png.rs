//! PNG format support.
//!
//! Every PNG flavour is decoded to RGBA8: palettes and `tRNS` transparency are
//! expanded, 16-bit samples are reduced to 8 bits, gray is replicated into RGB
//! and images without alpha become fully opaque. Output is always 8-bit RGBA.
//!
//! # Example
//!
//! ```rust,ignore
//! use petal_io::png::{decode, encode};
//!
//! let image = decode(&std::fs::read("petal_rose_pink.png")?)?;
//! std::fs::write("petal_rose_copy.png", encode(&image)?)?;
//! ```

use std::io::Cursor;
use std::path::Path;

use petal_core::RgbaImage;
use tracing::{debug, trace};

use crate::{IoError, IoResult};

/// Decodes an in-memory PNG stream to RGBA8.
pub fn decode(bytes: &[u8]) -> IoResult<RgbaImage> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::normalize_to_color8());

    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    trace!(
        width = info.width,
        height = info.height,
        color_type = ?info.color_type,
        bit_depth = ?info.bit_depth,
        "png::decode"
    );

    if info.bit_depth != png::BitDepth::Eight {
        return Err(IoError::DecodeError(format!(
            "unexpected bit depth {:?} after normalization",
            info.bit_depth
        )));
    }

    let samples = &buf[..info.buffer_size()];
    let rgba: Vec<u8> = match info.color_type {
        png::ColorType::Rgba => samples.to_vec(),
        png::ColorType::Rgb => samples
            .chunks_exact(3)
            .flat_map(|c| [c[0], c[1], c[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => samples
            .chunks_exact(2)
            .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
            .collect(),
        png::ColorType::Grayscale => samples.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        png::ColorType::Indexed => {
            return Err(IoError::DecodeError("palette was not expanded".into()));
        }
    };

    let image = RgbaImage::from_raw(info.width, info.height, rgba)
        .map_err(|e| IoError::DecodeError(e.to_string()))?;
    debug!(
        width = image.width(),
        height = image.height(),
        source = ?info.color_type,
        "Decoded PNG"
    );
    Ok(image)
}

/// Writes an image to a PNG file, overwriting any existing file.
///
/// The stream is encoded completely in memory before the file is created, so
/// an encoder failure leaves the destination untouched.
pub fn write<P: AsRef<Path>>(path: P, image: &RgbaImage) -> IoResult<()> {
    let path = path.as_ref();
    let bytes = encode(image)?;
    std::fs::write(path, &bytes)
        .map_err(|e| IoError::EncodeError(format!("cannot write {}: {}", path.display(), e)))?;
    debug!(path = %path.display(), bytes = bytes.len(), "Wrote PNG");
    Ok(())
}

/// Encodes an image as an 8-bit RGBA PNG stream.
pub fn encode(image: &RgbaImage) -> IoResult<Vec<u8>> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::default());

        let mut png_writer = encoder
            .write_header()
            .map_err(|e| IoError::EncodeError(e.to_string()))?;
        png_writer
            .write_image_data(image.as_raw())
            .map_err(|e| IoError::EncodeError(e.to_string()))?;
        png_writer
            .finish()
            .map_err(|e| IoError::EncodeError(e.to_string()))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use petal_core::Rgba8;

    fn encode_raw(
        width: u32,
        height: u32,
        color: png::ColorType,
        depth: png::BitDepth,
        data: &[u8],
    ) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, width, height);
            encoder.set_color(color);
            encoder.set_depth(depth);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
            writer.finish().unwrap();
        }
        out
    }

    #[test]
    fn test_roundtrip_rgba() {
        let width = 16;
        let height = 8;
        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&[(x * 16) as u8, (y * 32) as u8, 64, (x * y) as u8]);
            }
        }
        let image = RgbaImage::from_raw(width, height, data).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roundtrip.png");
        write(&path, &image).expect("Failed to write PNG");
        let loaded = crate::read(&path).expect("Failed to read PNG");

        assert_eq!(loaded, image);
    }

    #[test]
    fn test_rgb_becomes_opaque() {
        let data = [1, 2, 3, 4, 5, 6];
        let bytes = encode_raw(2, 1, png::ColorType::Rgb, png::BitDepth::Eight, &data);
        let image = decode(&bytes).unwrap();
        assert_eq!(image.pixel(0, 0), Rgba8::new(1, 2, 3, 255));
        assert_eq!(image.pixel(1, 0), Rgba8::new(4, 5, 6, 255));
    }

    #[test]
    fn test_gray_alpha_expands() {
        let data = [10, 0, 200, 128];
        let bytes = encode_raw(2, 1, png::ColorType::GrayscaleAlpha, png::BitDepth::Eight, &data);
        let image = decode(&bytes).unwrap();
        assert_eq!(image.pixel(0, 0), Rgba8::new(10, 10, 10, 0));
        assert_eq!(image.pixel(1, 0), Rgba8::new(200, 200, 200, 128));
    }

    #[test]
    fn test_sixteen_bit_is_reduced() {
        // big-endian u16 samples: 0xFF00 -> 0xFF, 0x8000 -> 0x80
        let data = [0xFF, 0x00, 0x80, 0x00, 0x00, 0x10, 0xFF, 0xFF];
        let bytes = encode_raw(1, 1, png::ColorType::Rgba, png::BitDepth::Sixteen, &data);
        let image = decode(&bytes).unwrap();
        assert_eq!(image.pixel(0, 0), Rgba8::new(0xFF, 0x80, 0x00, 0xFF));
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let err = decode(b"definitely not a png").unwrap_err();
        assert!(matches!(err, IoError::DecodeError(_)));
    }

    #[test]
    fn test_missing_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = crate::read(dir.path().join("missing.png")).unwrap_err();
        assert!(matches!(err, IoError::DecodeError(_)));
        assert!(err.to_string().contains("missing.png"));
    }

    #[test]
    fn test_write_to_missing_dir_is_encode_error() {
        let dir = tempfile::tempdir().unwrap();
        let image = RgbaImage::new(1, 1).unwrap();
        let err = write(dir.path().join("no/such/dir/out.png"), &image).unwrap_err();
        assert!(matches!(err, IoError::EncodeError(_)));
    }
}
