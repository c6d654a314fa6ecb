//! RGBA8 image buffer.
//!
//! [`RgbaImage`] is the single container every petal operation reads and
//! writes. It always holds four 8-bit channels per pixel with straight alpha.
//!
//! # Memory Layout
//!
//! Pixels are stored in **row-major** order, top-to-bottom:
//!
//! ```text
//! Memory: [R G B A R G B A ...]  <- Row 0
//!         [R G B A R G B A ...]  <- Row 1
//!         ...
//! ```
//!
//! # Usage
//!
//! ```rust
//! use petal_core::{RgbaImage, Rgba8};
//!
//! let mut img = RgbaImage::filled(4, 2, Rgba8::new(255, 0, 128, 255)).unwrap();
//! img.set_pixel(1, 0, Rgba8::new(0, 0, 0, 0)).unwrap();
//! assert_eq!(img.pixel(1, 0).a, 0);
//! assert_eq!(img.dimensions(), (4, 2));
//! ```

use crate::pixel::CHANNELS;
use crate::{Error, Result, Rgba8};

/// Owned RGBA8 pixel buffer.
///
/// Width and height are always non-zero and the buffer length is always
/// exactly `width * height * 4`.
#[derive(Clone, PartialEq, Eq)]
pub struct RgbaImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbaImage {
    /// Creates a fully transparent black image.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, Rgba8::default())
    }

    /// Creates an image with every pixel set to `pixel`.
    pub fn filled(width: u32, height: u32, pixel: Rgba8) -> Result<Self> {
        let len = buffer_len(width, height)?;
        let data = pixel
            .to_array()
            .iter()
            .copied()
            .cycle()
            .take(len)
            .collect();
        Ok(Self { width, height, data })
    }

    /// Wraps an existing interleaved RGBA buffer.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimensions`] if either dimension is zero
    /// - [`Error::BufferSizeMismatch`] if `data.len() != width * height * 4`
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = buffer_len(width, height)?;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    /// Builds an image from pixels listed in row-major order.
    pub fn from_pixels(width: u32, height: u32, pixels: &[Rgba8]) -> Result<Self> {
        let data = pixels.iter().flat_map(|p| p.to_array()).collect();
        Self::from_raw(width, height, data)
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raw interleaved RGBA bytes.
    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw interleaved RGBA bytes.
    #[inline]
    pub fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds. Use
    /// [`get_pixel`](Self::get_pixel) for a checked read.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        let idx = self.index(x, y);
        Rgba8::from_slice(&self.data[idx..idx + CHANNELS])
    }

    /// Returns the pixel at (x, y), or `None` when out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        (x < self.width && y < self.height).then(|| self.pixel(x, y))
    }

    /// Overwrites the pixel at (x, y).
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Rgba8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(x, y);
        pixel.write_to(&mut self.data[idx..idx + CHANNELS]);
        Ok(())
    }

    /// Iterates over all pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgba8> + '_ {
        self.data.chunks_exact(CHANNELS).map(Rgba8::from_slice)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{}",
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }
}

impl std::fmt::Debug for RgbaImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RgbaImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// Validates dimensions and returns the RGBA byte length.
fn buffer_len(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions {
            width,
            height,
            reason: "width and height must be > 0".into(),
        });
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(CHANNELS))
        .ok_or_else(|| Error::InvalidDimensions {
            width,
            height,
            reason: "buffer size overflows".into(),
        })
}
