//! Recolor command
//!
//! Remaps every pixel whose hue lies in the band; alpha and out-of-band
//! pixels are kept bit for bit.

use crate::RecolorArgs;
use anyhow::{Context, Result, bail};
use petal_ops::Recipe;
use petal_ops::pipeline::recolor_file;
use tracing::{info, trace};

pub fn run(args: RecolorArgs, verbose: u8) -> Result<()> {
    trace!(input = ?args.input, output = ?args.output, "recolor::run");

    let recipe = build_recipe(&args)?;
    if args.dump_recipe {
        print!("{}", recipe.to_yaml()?);
        return Ok(());
    }

    let (Some(input), Some(output)) = (&args.input, &args.output) else {
        bail!("recolor needs an INPUT and --output unless --dump-recipe is given");
    };

    let (band, policy) = recipe.build().context("Invalid recolor settings")?;
    info!(%band, ?policy, "Recoloring");

    if verbose > 0 {
        println!("Recoloring {} (band: {})", input.display(), band);
    }

    let stats = recolor_file(input, output, &band, &policy)
        .with_context(|| format!("Failed to recolor: {}", input.display()))?;

    if verbose > 0 {
        println!(
            "{} of {} pixels in band ({}), {} changed, {} transparent skipped",
            stats.eligible,
            stats.total,
            super::format_percent(stats.eligible_fraction()),
            stats.changed,
            stats.transparent
        );
        println!("Saved to {}", output.display());
    }

    Ok(())
}

/// Overlays transform flags on the resolved recipe.
fn build_recipe(args: &RecolorArgs) -> Result<Recipe> {
    let mut recipe = super::resolve_recipe(&args.band)?;
    let transform = &mut recipe.transform;

    if let Some(target) = args.target_hue {
        transform.target_hue = Some(target);
        transform.hue_compress = None;
    }
    if args.keep_hue {
        transform.target_hue = None;
        transform.hue_compress = None;
    }
    if let Some(s) = args.saturation {
        transform.saturation_multiplier = s;
    }
    if let Some(v) = args.value {
        transform.value_multiplier = v;
    }
    Ok(recipe)
}
