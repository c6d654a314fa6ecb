//! RGB <-> HSV conversion.
//!
//! Hexcone model with all three components normalized:
//!
//! | Component | Range |
//! |-----------|-------|
//! | hue `h` | `[0, 1)` (red at 0, green at 1/3, blue at 2/3) |
//! | saturation `s` | `[0, 1]` |
//! | value `v` | `[0, 1]` |
//!
//! Alpha never takes part in the conversion; callers carry it separately.
//!
//! # Example
//!
//! ```rust
//! use petal_color::Hsv;
//!
//! let hsv = Hsv::from_rgb8(255, 0, 128);
//! assert!(hsv.h > 0.9); // pink sits just below the red seam
//! assert_eq!(hsv.to_rgb8(), (255, 0, 128));
//! ```

use petal_core::Rgba8;

/// A color in normalized HSV.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    /// Hue in `[0, 1)`.
    pub h: f32,
    /// Saturation in `[0, 1]`.
    pub s: f32,
    /// Value in `[0, 1]`.
    pub v: f32,
}

impl Hsv {
    /// Creates an HSV triple without normalizing it.
    #[inline]
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Converts normalized RGB (`[0, 1]` per channel) to HSV.
    pub fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let v = max;

        if max == min {
            return Self::new(0.0, 0.0, v);
        }

        let delta = max - min;
        let s = delta / max;

        let rc = (max - r) / delta;
        let gc = (max - g) / delta;
        let bc = (max - b) / delta;

        let h = if r == max {
            bc - gc
        } else if g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        Self::new(wrap_hue(h / 6.0), s, v)
    }

    /// Converts 8-bit RGB to HSV.
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Converts the RGB part of a pixel to HSV.
    #[inline]
    pub fn from_pixel(pixel: Rgba8) -> Self {
        Self::from_rgb8(pixel.r, pixel.g, pixel.b)
    }

    /// Converts to normalized RGB.
    ///
    /// The triple is [normalized](Self::normalized) first, so out-of-range
    /// input still produces channels in `[0, 1]`.
    pub fn to_rgb(self) -> (f32, f32, f32) {
        let Self { h, s, v } = self.normalized();

        if s == 0.0 {
            return (v, v, v);
        }

        let h6 = h * 6.0;
        let sector = h6.floor();
        let f = h6 - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        match sector as u32 % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        }
    }

    /// Converts to 8-bit RGB, rounding to nearest and clamping to `[0, 255]`.
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let (r, g, b) = self.to_rgb();
        (quantize(r), quantize(g), quantize(b))
    }

    /// Wraps hue into `[0, 1)` and clamps saturation and value into `[0, 1]`.
    ///
    /// Non-finite components become 0.
    pub fn normalized(self) -> Self {
        Self {
            h: if self.h.is_finite() { wrap_hue(self.h) } else { 0.0 },
            s: clamp_unit(self.s),
            v: clamp_unit(self.v),
        }
    }
}

/// Wraps a hue into `[0, 1)`.
///
/// ```rust
/// use petal_color::hsv::wrap_hue;
///
/// assert_eq!(wrap_hue(1.25), 0.25);
/// assert_eq!(wrap_hue(-0.25), 0.75);
/// assert_eq!(wrap_hue(1.0), 0.0);
/// ```
#[inline]
pub fn wrap_hue(h: f32) -> f32 {
    let w = h.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if w >= 1.0 { 0.0 } else { w }
}

#[inline]
fn clamp_unit(x: f32) -> f32 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

/// Maps a `[0, 1]` channel to `[0, 255]` with round-to-nearest.
#[inline]
pub fn quantize(x: f32) -> u8 {
    (clamp_unit(x) * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_primaries() {
        let red = Hsv::from_rgb8(255, 0, 0);
        assert_abs_diff_eq!(red.h, 0.0);
        assert_abs_diff_eq!(red.s, 1.0);
        assert_abs_diff_eq!(red.v, 1.0);

        assert_abs_diff_eq!(Hsv::from_rgb8(0, 255, 0).h, 1.0 / 3.0, epsilon = 1e-6);
        assert_abs_diff_eq!(Hsv::from_rgb8(0, 0, 255).h, 2.0 / 3.0, epsilon = 1e-6);
    }

    #[test]
    fn test_pink_hue() {
        // (255, 0, 128): h = 1 - (128/255)/6
        let hsv = Hsv::from_rgb8(255, 0, 128);
        assert_abs_diff_eq!(hsv.h, 1.0 - (128.0 / 255.0) / 6.0, epsilon = 1e-6);
        assert_abs_diff_eq!(hsv.s, 1.0);
        assert_abs_diff_eq!(hsv.v, 1.0);
    }

    #[test]
    fn test_gray_has_zero_hue_and_saturation() {
        let gray = Hsv::from_rgb8(100, 100, 100);
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);
        assert_abs_diff_eq!(gray.v, 100.0 / 255.0, epsilon = 1e-6);
        assert_eq!(gray.to_rgb8(), (100, 100, 100));
    }

    #[test]
    fn test_every_8bit_gray_and_hue_edge_roundtrips() {
        for i in 0..=255u8 {
            for &(r, g, b) in &[(i, 0, 0), (255, i, 0), (0, i, 255), (i, i, i), (255, 0, i)] {
                assert_eq!(Hsv::from_rgb8(r, g, b).to_rgb8(), (r, g, b));
            }
        }
    }

    #[test]
    fn test_normalized_wraps_and_clamps() {
        let n = Hsv::new(1.5, 2.0, -0.5).normalized();
        assert_abs_diff_eq!(n.h, 0.5);
        assert_eq!(n.s, 1.0);
        assert_eq!(n.v, 0.0);

        let nan = Hsv::new(f32::NAN, f32::NAN, f32::INFINITY).normalized();
        assert_eq!(nan.h, 0.0);
        assert_eq!(nan.s, 0.0);
        assert_eq!(nan.v, 1.0);
    }

    #[test]
    fn test_wrap_hue_tiny_negative() {
        let w = wrap_hue(-1e-9);
        assert!((0.0..1.0).contains(&w));
    }

    #[test]
    fn test_quantize_rounds() {
        assert_eq!(quantize(0.5), 128);
        assert_eq!(quantize(0.498), 127);
        assert_eq!(quantize(1.2), 255);
        assert_eq!(quantize(-3.0), 0);
    }
}
