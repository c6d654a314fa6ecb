//! CLI command implementations

pub mod inspect;
pub mod matte;
pub mod recolor;

use anyhow::{Context, Result};
use petal_core::RgbaImage;
use petal_ops::Recipe;
use petal_ops::matte::{GrayTest, MatteOptions};
use std::path::Path;

use crate::{BandArgs, MatteOptionArgs};

/// Load image from path
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    petal_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Resolves the base recipe and applies band overrides.
///
/// Precedence: explicit flags, then `--config`, then `--preset`, then deep-red.
pub fn resolve_recipe(args: &BandArgs) -> Result<Recipe> {
    let mut recipe = match &args.config {
        Some(path) => Recipe::load(path)
            .with_context(|| format!("Failed to load recipe: {}", path.display()))?,
        None => args.preset.unwrap_or_default().recipe(),
    };
    if let Some(low) = args.low {
        recipe.hue_band.low_threshold = low;
    }
    if let Some(high) = args.high {
        recipe.hue_band.high_threshold = high;
    }
    Ok(recipe)
}

/// Builds matte options from flags.
pub fn matte_options(args: &MatteOptionArgs, clear_color: bool) -> MatteOptions {
    MatteOptions {
        white_threshold: args.white_threshold,
        gray: (!args.no_gray).then_some(GrayTest {
            tolerance: args.gray_tolerance,
            min_brightness: args.gray_min,
        }),
        clear_color,
    }
}

/// Format a share as a percentage
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}
