//! Transform policies: how an eligible pixel's HSV is remapped.
//!
//! Anything implementing [`HueTransform`] can drive a recolor pass. The
//! concrete [`TransformPolicy`] covers the common case of a hue mapping plus
//! saturation and value multipliers; plain closures work too:
//!
//! ```rust
//! use petal_color::Hsv;
//! use petal_ops::policy::{HueTransform, TransformPolicy};
//!
//! let deep_red = TransformPolicy::set_hue(0.02, 1.5, 0.6).unwrap();
//! let out = deep_red.apply(Hsv::new(0.9, 0.8, 1.0));
//! assert_eq!(out.h, 0.02);
//! assert_eq!(out.s, 1.0); // 0.8 * 1.5 clamped
//!
//! let desaturate = |hsv: Hsv| Hsv { s: 0.0, ..hsv };
//! assert_eq!(desaturate.apply(Hsv::new(0.5, 1.0, 1.0)).s, 0.0);
//! ```

use petal_color::Hsv;
use petal_color::hsv::wrap_hue;
use serde::{Deserialize, Serialize};

use crate::{OpsError, OpsResult};

/// A pure, deterministic `(h, s, v) -> (h', s', v')` mapping.
///
/// Implementations may return out-of-range values; the recolor pass wraps hue
/// and clamps saturation and value before converting back to RGB.
pub trait HueTransform: Sync {
    /// Maps one HSV triple.
    fn apply(&self, hsv: Hsv) -> Hsv;
}

impl<F> HueTransform for F
where
    F: Fn(Hsv) -> Hsv + Sync,
{
    fn apply(&self, hsv: Hsv) -> Hsv {
        self(hsv)
    }
}

/// Linear hue segment: `h' = (h - origin) * scale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinearHue {
    /// Hue subtracted before scaling.
    pub origin: f32,
    /// Scale applied after subtracting `origin`.
    pub scale: f32,
}

impl LinearHue {
    fn map(&self, h: f32) -> f32 {
        (h - self.origin) * self.scale
    }

    fn is_finite(&self) -> bool {
        self.origin.is_finite() && self.scale.is_finite()
    }
}

/// What happens to the hue of an eligible pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HueMapping {
    /// Hue is left as is.
    Keep,
    /// Hue is replaced by a fixed target.
    Set(f32),
    /// Hue is squeezed towards a target region with one linear segment on each
    /// side of `split`. Used to fold a band around red into a narrow red range.
    Compress {
        /// Hues below this use `below`, the rest use `above`.
        split: f32,
        /// Segment for `h < split`.
        below: LinearHue,
        /// Segment for `h >= split`.
        above: LinearHue,
    },
}

impl HueMapping {
    fn map(&self, h: f32) -> f32 {
        match *self {
            HueMapping::Keep => h,
            HueMapping::Set(target) => target,
            HueMapping::Compress { split, below, above } => {
                if h < split {
                    below.map(h)
                } else {
                    above.map(h)
                }
            }
        }
    }

    fn validate(&self) -> OpsResult<()> {
        match *self {
            HueMapping::Keep => Ok(()),
            HueMapping::Set(target) if target.is_finite() => Ok(()),
            HueMapping::Set(target) => Err(OpsError::InvalidConfiguration(format!(
                "target_hue must be finite, got {target}"
            ))),
            HueMapping::Compress { split, below, above } => {
                if split.is_finite() && below.is_finite() && above.is_finite() {
                    Ok(())
                } else {
                    Err(OpsError::InvalidConfiguration(
                        "hue compression parameters must be finite".into(),
                    ))
                }
            }
        }
    }
}

/// Hue mapping plus saturation and value multipliers.
///
/// Construct through [`new`](Self::new) or the shorthand constructors so the
/// parameters are validated once, before any pixel is touched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformPolicy {
    hue: HueMapping,
    saturation_multiplier: f32,
    value_multiplier: f32,
}

impl TransformPolicy {
    /// Creates a validated policy.
    ///
    /// # Errors
    ///
    /// [`OpsError::InvalidConfiguration`] if a multiplier is negative or not
    /// finite, or the hue mapping has non-finite parameters.
    pub fn new(
        hue: HueMapping,
        saturation_multiplier: f32,
        value_multiplier: f32,
    ) -> OpsResult<Self> {
        hue.validate()?;
        check_multiplier("saturation_multiplier", saturation_multiplier)?;
        check_multiplier("value_multiplier", value_multiplier)?;
        Ok(Self {
            hue,
            saturation_multiplier,
            value_multiplier,
        })
    }

    /// Policy that sets every eligible hue to `target`.
    pub fn set_hue(
        target: f32,
        saturation_multiplier: f32,
        value_multiplier: f32,
    ) -> OpsResult<Self> {
        Self::new(HueMapping::Set(target), saturation_multiplier, value_multiplier)
    }

    /// Policy that leaves pixels unchanged.
    pub fn identity() -> Self {
        Self {
            hue: HueMapping::Keep,
            saturation_multiplier: 1.0,
            value_multiplier: 1.0,
        }
    }

    /// The hue mapping.
    pub fn hue(&self) -> HueMapping {
        self.hue
    }

    /// Saturation multiplier.
    pub fn saturation_multiplier(&self) -> f32 {
        self.saturation_multiplier
    }

    /// Value multiplier.
    pub fn value_multiplier(&self) -> f32 {
        self.value_multiplier
    }
}

impl Default for TransformPolicy {
    fn default() -> Self {
        Self::identity()
    }
}

impl HueTransform for TransformPolicy {
    fn apply(&self, hsv: Hsv) -> Hsv {
        Hsv::new(
            wrap_hue(self.hue.map(hsv.h)),
            hsv.s * self.saturation_multiplier,
            hsv.v * self.value_multiplier,
        )
        .normalized()
    }
}

fn check_multiplier(name: &str, value: f32) -> OpsResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(OpsError::InvalidConfiguration(format!(
            "{name} must be a finite non-negative number, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_set_hue_clamps_saturation() {
        let policy = TransformPolicy::set_hue(0.02, 1.5, 0.6).unwrap();
        let out = policy.apply(Hsv::new(0.95, 0.9, 1.0));
        assert_abs_diff_eq!(out.h, 0.02);
        assert_abs_diff_eq!(out.s, 1.0);
        assert_abs_diff_eq!(out.v, 0.6);
    }

    #[test]
    fn test_set_hue_wraps_target() {
        let policy = TransformPolicy::set_hue(1.25, 1.0, 1.0).unwrap();
        assert_abs_diff_eq!(policy.apply(Hsv::new(0.5, 0.5, 0.5)).h, 0.25);
    }

    #[test]
    fn test_compress_maps_both_sides_of_seam() {
        let policy = TransformPolicy::new(
            HueMapping::Compress {
                split: 0.5,
                below: LinearHue { origin: 0.0, scale: 0.06 },
                above: LinearHue { origin: 0.83, scale: 0.24 },
            },
            1.0,
            1.0,
        )
        .unwrap();
        assert_abs_diff_eq!(policy.apply(Hsv::new(0.1, 1.0, 1.0)).h, 0.006, epsilon = 1e-6);
        assert_abs_diff_eq!(policy.apply(Hsv::new(0.93, 1.0, 1.0)).h, 0.024, epsilon = 1e-6);
    }

    #[test]
    fn test_keep_is_identity() {
        let hsv = Hsv::new(0.3, 0.4, 0.5);
        assert_eq!(TransformPolicy::identity().apply(hsv), hsv);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(TransformPolicy::set_hue(0.0, -1.0, 1.0).unwrap_err().is_invalid_configuration());
        assert!(TransformPolicy::set_hue(0.0, 1.0, f32::NAN).is_err());
        assert!(TransformPolicy::set_hue(f32::INFINITY, 1.0, 1.0).is_err());
        assert!(
            TransformPolicy::new(
                HueMapping::Compress {
                    split: f32::NAN,
                    below: LinearHue { origin: 0.0, scale: 1.0 },
                    above: LinearHue { origin: 0.0, scale: 1.0 },
                },
                1.0,
                1.0
            )
            .is_err()
        );
    }

    #[test]
    fn test_closure_transform() {
        let invert_hue = |hsv: Hsv| Hsv { h: hsv.h + 0.5, ..hsv };
        let out = invert_hue.apply(Hsv::new(0.25, 1.0, 1.0));
        assert_abs_diff_eq!(out.h, 0.75);
    }
}
