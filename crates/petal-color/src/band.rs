//! Hue bands: predicates selecting a region of the hue circle.
//!
//! A [`HueBand`] is an explicit union of at most two [`HueInterval`]s. Bands
//! that cross the red seam at hue 0/1 are stored as two intervals, one on each
//! side of the seam, rather than as a single inequality.
//!
//! # Endpoints
//!
//! Configured thresholds are exclusive. The seam itself is inclusive on both
//! sides, so a wrapping band always contains pure red (`h == 0`).
//!
//! ```text
//! wrapping(0.17, 0.83):   [0 ....... 0.17)           (0.83 ....... 1]
//! between(0.25, 0.5):                  (0.25 .. 0.5)
//! ```
//!
//! # Example
//!
//! ```rust
//! use petal_color::HueBand;
//!
//! let reds = HueBand::wrapping(0.17, 0.83).unwrap();
//! assert!(reds.contains(0.999));
//! assert!(reds.contains(0.001));
//! assert!(!reds.contains(0.5));
//! ```

use std::fmt;
use std::ops::Bound;

use crate::{ColorError, ColorResult};

/// One contiguous span of hue values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueInterval {
    /// Lower bound.
    pub lower: Bound<f32>,
    /// Upper bound.
    pub upper: Bound<f32>,
}

impl HueInterval {
    /// Interval with both ends excluded.
    pub const fn open(lower: f32, upper: f32) -> Self {
        Self {
            lower: Bound::Excluded(lower),
            upper: Bound::Excluded(upper),
        }
    }

    /// True if `h` lies inside the interval.
    pub fn contains(&self, h: f32) -> bool {
        let above = match self.lower {
            Bound::Included(lo) => h >= lo,
            Bound::Excluded(lo) => h > lo,
            Bound::Unbounded => true,
        };
        let below = match self.upper {
            Bound::Included(hi) => h <= hi,
            Bound::Excluded(hi) => h < hi,
            Bound::Unbounded => true,
        };
        above && below
    }
}

/// Hue selection predicate made of one or two intervals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueBand {
    first: HueInterval,
    second: Option<HueInterval>,
}

impl HueBand {
    /// Band selecting hues *outside* `[low, high]`, i.e. `h < low || h > high`.
    ///
    /// This is the shape of a band centred on red: it wraps through the seam.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidBand`] if a threshold is not a finite value in
    /// `[0, 1]` or `low > high`.
    pub fn wrapping(low: f32, high: f32) -> ColorResult<Self> {
        check_threshold("low_threshold", low)?;
        check_threshold("high_threshold", high)?;
        if low > high {
            return Err(ColorError::InvalidBand(format!(
                "low_threshold {low} is greater than high_threshold {high}"
            )));
        }
        Ok(Self {
            first: HueInterval {
                lower: Bound::Included(0.0),
                upper: Bound::Excluded(low),
            },
            second: Some(HueInterval {
                lower: Bound::Excluded(high),
                upper: Bound::Included(1.0),
            }),
        })
    }

    /// Band selecting hues strictly between `start` and `end`.
    ///
    /// When `start > end` the band runs forward through the seam and is
    /// equivalent to [`wrapping(end, start)`](Self::wrapping).
    pub fn between(start: f32, end: f32) -> ColorResult<Self> {
        check_threshold("start", start)?;
        check_threshold("end", end)?;
        if start > end {
            return Self::wrapping(end, start);
        }
        Ok(Self {
            first: HueInterval::open(start, end),
            second: None,
        })
    }

    /// Band selecting every hue.
    pub fn all() -> Self {
        Self {
            first: HueInterval {
                lower: Bound::Unbounded,
                upper: Bound::Unbounded,
            },
            second: None,
        }
    }

    /// True if hue `h` is selected.
    pub fn contains(&self, h: f32) -> bool {
        self.first.contains(h) || self.second.is_some_and(|i| i.contains(h))
    }

    /// The intervals making up the band.
    pub fn intervals(&self) -> impl Iterator<Item = &HueInterval> {
        std::iter::once(&self.first).chain(self.second.as_ref())
    }
}

impl fmt::Display for HueBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        for interval in self.intervals() {
            let lo = match interval.lower {
                Bound::Included(v) if v > 0.0 => Some(format!("h >= {v}")),
                Bound::Excluded(v) => Some(format!("h > {v}")),
                _ => None,
            };
            let hi = match interval.upper {
                Bound::Included(v) if v < 1.0 => Some(format!("h <= {v}")),
                Bound::Excluded(v) => Some(format!("h < {v}")),
                _ => None,
            };
            let part = match (lo, hi) {
                (Some(lo), Some(hi)) => format!("{lo} and {hi}"),
                (Some(one), None) | (None, Some(one)) => one,
                (None, None) => "any hue".to_string(),
            };
            parts.push(part);
        }
        write!(f, "{}", parts.join(" or "))
    }
}

fn check_threshold(name: &str, value: f32) -> ColorResult<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ColorError::InvalidBand(format!(
            "{name} must be within [0, 1], got {value}"
        )));
    }
    Ok(())
}
