//! 8-bit RGBA pixel type.
//!
//! [`Rgba8`] is the unit every petal operation decides on. Channels are
//! straight (not premultiplied) alpha, matching what PNG stores.

/// Number of channels in an [`Rgba8`] pixel.
pub const CHANNELS: usize = 4;

/// A single straight-alpha RGBA pixel with 8 bits per channel.
///
/// # Example
///
/// ```rust
/// use petal_core::Rgba8;
///
/// let pink = Rgba8::new(255, 0, 128, 255);
/// assert!(!pink.is_transparent());
/// assert_eq!(pink.to_array(), [255, 0, 128, 255]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (0 = fully transparent).
    pub a: u8,
}

impl Rgba8 {
    /// Creates a pixel from its four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Reads a pixel from the first four bytes of `chunk`.
    ///
    /// # Panics
    ///
    /// Panics if `chunk` holds fewer than four bytes.
    #[inline]
    pub fn from_slice(chunk: &[u8]) -> Self {
        Self::new(chunk[0], chunk[1], chunk[2], chunk[3])
    }

    /// Writes the pixel into the first four bytes of `chunk`.
    #[inline]
    pub fn write_to(self, chunk: &mut [u8]) {
        chunk[..CHANNELS].copy_from_slice(&self.to_array());
    }

    /// Returns the channels as `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns `(r, g, b)` without alpha.
    #[inline]
    pub const fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Returns a copy with RGB replaced and alpha kept.
    #[inline]
    pub const fn with_rgb(self, r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, self.a)
    }

    /// Returns a copy with alpha replaced and RGB kept.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// True when alpha is zero.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Rgba8> for [u8; 4] {
    fn from(p: Rgba8) -> Self {
        p.to_array()
    }
}
