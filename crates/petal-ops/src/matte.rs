//! Background matting by brightness and saturation thresholds.
//!
//! Flat, bright, near-neutral backgrounds (white studio backdrops, light gray
//! paper) are made transparent. A pixel is background when either test hits:
//!
//! - **near-white**: every channel `>= white_threshold`
//! - **gray** (optional): `|r - g| < tolerance`, `|g - b| < tolerance` and
//!   `r > min_brightness`
//!
//! Background pixels get alpha 0. Their RGB is kept unless
//! [`MatteOptions::clear_color`] is set, in which case they become `(0, 0, 0, 0)`.

use std::ops::Add;

use petal_core::pixel::CHANNELS;
use petal_core::{Rgba8, RgbaImage};
use tracing::{debug, trace};

use crate::parallel::{fold_rows, fold_rows_ref};

/// Low-saturation, high-brightness test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrayTest {
    /// Maximum channel spread (exclusive) between r/g and g/b.
    pub tolerance: u8,
    /// Red must be strictly above this.
    pub min_brightness: u8,
}

impl Default for GrayTest {
    fn default() -> Self {
        Self {
            tolerance: 10,
            min_brightness: 200,
        }
    }
}

/// Matte predicate parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatteOptions {
    /// Channels at or above this count as white.
    pub white_threshold: u8,
    /// Optional gray test; `None` disables it.
    pub gray: Option<GrayTest>,
    /// Zero RGB of matted pixels as well as alpha.
    pub clear_color: bool,
}

impl Default for MatteOptions {
    fn default() -> Self {
        Self {
            white_threshold: 250,
            gray: Some(GrayTest::default()),
            clear_color: false,
        }
    }
}

impl MatteOptions {
    /// Options with only the near-white test enabled.
    pub fn white_only(white_threshold: u8) -> Self {
        Self {
            white_threshold,
            gray: None,
            clear_color: false,
        }
    }
}

/// Pixel counts gathered during a matte pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatteStats {
    /// Pixels in the image.
    pub total: usize,
    /// Pixels classified as background.
    pub matted: usize,
}

impl MatteStats {
    /// Share of pixels that were matted, in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.matted as f64 / self.total as f64
        }
    }
}

impl Add for MatteStats {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            total: self.total + rhs.total,
            matted: self.matted + rhs.matted,
        }
    }
}

/// True if `pixel` is background under `opts`. Alpha is not consulted.
#[inline]
pub fn is_background(pixel: Rgba8, opts: &MatteOptions) -> bool {
    let Rgba8 { r, g, b, .. } = pixel;
    let t = opts.white_threshold;
    if r >= t && g >= t && b >= t {
        return true;
    }
    match opts.gray {
        Some(gray) => {
            r.abs_diff(g) < gray.tolerance
                && g.abs_diff(b) < gray.tolerance
                && r > gray.min_brightness
        }
        None => false,
    }
}

#[inline]
fn matte_pixel(pixel: Rgba8, opts: &MatteOptions) -> Rgba8 {
    if opts.clear_color {
        Rgba8::default()
    } else {
        pixel.with_alpha(0)
    }
}

/// Mattes `image` in place and returns the pass statistics.
pub fn matte_in_place(image: &mut RgbaImage, opts: &MatteOptions) -> MatteStats {
    trace!(width = image.width(), height = image.height(), ?opts, "matte::matte_in_place");

    let stride = image.stride();
    let stats = fold_rows(image.as_raw_mut(), stride, |row| {
        let mut stats = MatteStats::default();
        for chunk in row.chunks_exact_mut(CHANNELS) {
            stats.total += 1;
            let px = Rgba8::from_slice(chunk);
            if is_background(px, opts) {
                stats.matted += 1;
                matte_pixel(px, opts).write_to(chunk);
            }
        }
        stats
    });

    debug!(total = stats.total, matted = stats.matted, "Matte pass complete");
    stats
}

/// Returns a matted copy of `image` together with the pass statistics.
pub fn matte(image: &RgbaImage, opts: &MatteOptions) -> (RgbaImage, MatteStats) {
    let mut out = image.clone();
    let stats = matte_in_place(&mut out, opts);
    (out, stats)
}

/// Counts background pixels without modifying anything.
pub fn analyze(image: &RgbaImage, opts: &MatteOptions) -> MatteStats {
    fold_rows_ref(image.as_raw(), image.stride(), |row| {
        let mut stats = MatteStats::default();
        for chunk in row.chunks_exact(CHANNELS) {
            stats.total += 1;
            if is_background(Rgba8::from_slice(chunk), opts) {
                stats.matted += 1;
            }
        }
        stats
    })
}
