//! Recolor recipes: band + policy parameters as plain data.
//!
//! A [`Recipe`] is the serializable form of a recolor configuration. It is
//! what YAML recipe files deserialize into, what [`Preset`]s expand to, and
//! what the CLI overlays its flags onto before building the validated
//! [`HueBand`] and [`TransformPolicy`].
//!
//! ```yaml
//! hue_band:
//!   low_threshold: 0.17
//!   high_threshold: 0.83
//! transform:
//!   target_hue: 0.02
//!   saturation_multiplier: 1.5
//!   value_multiplier: 0.6
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use petal_color::HueBand;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::policy::{HueMapping, LinearHue, TransformPolicy};
use crate::{OpsError, OpsResult};

/// Hue band thresholds. A hue is eligible iff `h < low || h > high`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HueBandConfig {
    /// Hues strictly below this are eligible.
    pub low_threshold: f32,
    /// Hues strictly above this are eligible.
    pub high_threshold: f32,
}

/// Two-segment hue compression parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HueCompressConfig {
    /// Hues below `split` use `below`.
    pub split: f32,
    /// Segment for hues below `split`.
    pub below: LinearHue,
    /// Segment for the remaining hues.
    pub above: LinearHue,
}

/// Transform parameters.
///
/// `target_hue` and `hue_compress` are mutually exclusive; with neither the
/// hue is kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransformConfig {
    /// Fixed output hue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_hue: Option<f32>,
    /// Piecewise-linear hue compression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hue_compress: Option<HueCompressConfig>,
    /// Saturation multiplier (result clamped to 1).
    #[serde(default = "unit")]
    pub saturation_multiplier: f32,
    /// Value multiplier (result clamped to 1).
    #[serde(default = "unit")]
    pub value_multiplier: f32,
}

fn unit() -> f32 {
    1.0
}

/// Complete recolor configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Recipe {
    /// Which hues are eligible.
    pub hue_band: HueBandConfig,
    /// How eligible pixels are remapped.
    pub transform: TransformConfig,
}

impl Recipe {
    /// Parses a recipe from YAML text.
    pub fn from_yaml(yaml: &str) -> OpsResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads a recipe file.
    pub fn load<P: AsRef<Path>>(path: P) -> OpsResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            OpsError::InvalidConfiguration(format!("cannot read recipe {}: {}", path.display(), e))
        })?;
        let recipe = Self::from_yaml(&text)?;
        debug!(path = %path.display(), ?recipe, "Loaded recipe");
        Ok(recipe)
    }

    /// Serializes the recipe to YAML.
    pub fn to_yaml(&self) -> OpsResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Builds the validated hue band.
    pub fn band(&self) -> OpsResult<HueBand> {
        Ok(HueBand::wrapping(
            self.hue_band.low_threshold,
            self.hue_band.high_threshold,
        )?)
    }

    /// Builds the validated transform policy.
    pub fn policy(&self) -> OpsResult<TransformPolicy> {
        let t = &self.transform;
        let hue = match (t.target_hue, t.hue_compress) {
            (Some(_), Some(_)) => {
                return Err(OpsError::InvalidConfiguration(
                    "target_hue and hue_compress cannot both be set".into(),
                ));
            }
            (Some(target), None) => HueMapping::Set(target),
            (None, Some(c)) => HueMapping::Compress {
                split: c.split,
                below: c.below,
                above: c.above,
            },
            (None, None) => HueMapping::Keep,
        };
        TransformPolicy::new(hue, t.saturation_multiplier, t.value_multiplier)
    }

    /// Builds both band and policy.
    pub fn build(&self) -> OpsResult<(HueBand, TransformPolicy)> {
        Ok((self.band()?, self.policy()?))
    }
}

impl Default for Recipe {
    fn default() -> Self {
        Preset::DeepRed.recipe()
    }
}

/// Built-in recipes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Pinks and reds become a dark saturated red (hue 0.02, s x1.5, v x0.6).
    #[default]
    DeepRed,
    /// Pinks are folded into the red range (s x1.2, v x0.9).
    PinkToRed,
}

impl Preset {
    /// All presets.
    pub const ALL: [Preset; 2] = [Preset::DeepRed, Preset::PinkToRed];

    /// Preset name as used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Preset::DeepRed => "deep-red",
            Preset::PinkToRed => "pink-to-red",
        }
    }

    /// Expands the preset into a recipe.
    pub fn recipe(&self) -> Recipe {
        let hue_band = HueBandConfig {
            low_threshold: 0.17,
            high_threshold: 0.83,
        };
        let transform = match self {
            Preset::DeepRed => TransformConfig {
                target_hue: Some(0.02),
                hue_compress: None,
                saturation_multiplier: 1.5,
                value_multiplier: 0.6,
            },
            Preset::PinkToRed => TransformConfig {
                target_hue: None,
                hue_compress: Some(HueCompressConfig {
                    split: 0.5,
                    below: LinearHue { origin: 0.0, scale: 0.06 },
                    above: LinearHue { origin: 0.83, scale: 0.24 },
                }),
                saturation_multiplier: 1.2,
                value_multiplier: 0.9,
            },
        };
        Recipe { hue_band, transform }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Preset::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<_> = Preset::ALL.iter().map(Preset::name).collect();
                OpsError::InvalidConfiguration(format!(
                    "unknown preset '{}'. Options: {}",
                    s,
                    names.join(", ")
                ))
            })
    }
}
