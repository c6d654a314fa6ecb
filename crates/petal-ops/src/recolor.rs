//! Selective hue recoloring.
//!
//! A pixel is *eligible* when its alpha is non-zero and its hue lies in the
//! configured [`HueBand`]. Eligible pixels go through
//! RGB -> HSV -> [`HueTransform`] -> normalize -> RGB with round-to-nearest;
//! alpha is never modified. Every other pixel is copied bit for bit.
//!
//! # Example
//!
//! ```rust
//! use petal_color::HueBand;
//! use petal_core::{Rgba8, RgbaImage};
//! use petal_ops::policy::TransformPolicy;
//! use petal_ops::recolor::recolor;
//!
//! let src = RgbaImage::from_pixels(2, 1, &[
//!     Rgba8::new(255, 0, 128, 255),
//!     Rgba8::new(255, 0, 128, 0),
//! ]).unwrap();
//! let band = HueBand::wrapping(0.17, 0.83).unwrap();
//! let policy = TransformPolicy::set_hue(0.02, 1.5, 0.6).unwrap();
//!
//! let (out, stats) = recolor(&src, &band, &policy);
//! assert_ne!(out.pixel(0, 0), src.pixel(0, 0));
//! assert_eq!(out.pixel(0, 0).a, 255);
//! assert_eq!(out.pixel(1, 0), Rgba8::new(255, 0, 128, 0));
//! assert_eq!(stats.eligible, 1);
//! ```

use std::ops::Add;

use petal_color::{Hsv, HueBand};
use petal_core::pixel::CHANNELS;
use petal_core::{Rgba8, RgbaImage};
use tracing::{debug, trace};

use crate::parallel::{fold_rows, fold_rows_ref};
use crate::policy::HueTransform;

/// Pixel counts gathered during a recolor pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecolorStats {
    /// Pixels in the image.
    pub total: usize,
    /// Pixels skipped because alpha was 0.
    pub transparent: usize,
    /// Opaque or translucent pixels whose hue was in the band.
    pub eligible: usize,
    /// Eligible pixels whose RGB actually changed.
    pub changed: usize,
}

impl RecolorStats {
    /// Share of all pixels that were eligible, in `[0, 1]`.
    pub fn eligible_fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.eligible as f64 / self.total as f64
        }
    }
}

impl Add for RecolorStats {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            total: self.total + rhs.total,
            transparent: self.transparent + rhs.transparent,
            eligible: self.eligible + rhs.eligible,
            changed: self.changed + rhs.changed,
        }
    }
}

/// True if `pixel` would be recolored under `band`.
#[inline]
pub fn is_eligible(pixel: Rgba8, band: &HueBand) -> bool {
    !pixel.is_transparent() && band.contains(Hsv::from_pixel(pixel).h)
}

/// Recolors a single pixel.
///
/// Returns the input unchanged when it is transparent or outside the band.
#[inline]
pub fn recolor_pixel<T>(pixel: Rgba8, band: &HueBand, transform: &T) -> Rgba8
where
    T: HueTransform + ?Sized,
{
    if pixel.is_transparent() {
        return pixel;
    }
    let hsv = Hsv::from_pixel(pixel);
    if !band.contains(hsv.h) {
        return pixel;
    }
    let (r, g, b) = transform.apply(hsv).normalized().to_rgb8();
    pixel.with_rgb(r, g, b)
}

/// Recolors `image` in place and returns the pass statistics.
pub fn recolor_in_place<T>(image: &mut RgbaImage, band: &HueBand, transform: &T) -> RecolorStats
where
    T: HueTransform + ?Sized,
{
    trace!(width = image.width(), height = image.height(), %band, "recolor::recolor_in_place");

    let stride = image.stride();
    let stats = fold_rows(image.as_raw_mut(), stride, |row| {
        let mut stats = RecolorStats::default();
        for chunk in row.chunks_exact_mut(CHANNELS) {
            stats.total += 1;
            let src = Rgba8::from_slice(chunk);
            if src.is_transparent() {
                stats.transparent += 1;
                continue;
            }
            let hsv = Hsv::from_pixel(src);
            if !band.contains(hsv.h) {
                continue;
            }
            stats.eligible += 1;
            let (r, g, b) = transform.apply(hsv).normalized().to_rgb8();
            let out = src.with_rgb(r, g, b);
            if out != src {
                stats.changed += 1;
                out.write_to(chunk);
            }
        }
        stats
    });

    debug!(
        total = stats.total,
        transparent = stats.transparent,
        eligible = stats.eligible,
        changed = stats.changed,
        "Recolor pass complete"
    );
    stats
}

/// Returns a recolored copy of `image` together with the pass statistics.
pub fn recolor<T>(image: &RgbaImage, band: &HueBand, transform: &T) -> (RgbaImage, RecolorStats)
where
    T: HueTransform + ?Sized,
{
    let mut out = image.clone();
    let stats = recolor_in_place(&mut out, band, transform);
    (out, stats)
}

/// Counts what a recolor pass would select, without modifying anything.
///
/// `changed` is always 0 in the result.
pub fn analyze(image: &RgbaImage, band: &HueBand) -> RecolorStats {
    fold_rows_ref(image.as_raw(), image.stride(), |row| {
        let mut stats = RecolorStats::default();
        for chunk in row.chunks_exact(CHANNELS) {
            stats.total += 1;
            let px = Rgba8::from_slice(chunk);
            if px.is_transparent() {
                stats.transparent += 1;
            } else if band.contains(Hsv::from_pixel(px).h) {
                stats.eligible += 1;
            }
        }
        stats
    })
}
