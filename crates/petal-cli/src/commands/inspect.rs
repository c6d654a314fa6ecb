//! Inspect command
//!
//! Prints what a recolor or matte pass would select. Nothing is written.

use crate::InspectArgs;
use anyhow::{Context, Result};
use petal_ops::{matte, recolor};
use tracing::{debug, trace};

pub fn run(args: InspectArgs, verbose: u8) -> Result<()> {
    trace!(files = args.input.len(), "inspect::run");

    let recipe = super::resolve_recipe(&args.band)?;
    let band = recipe.band().context("Invalid hue band")?;
    let opts = super::matte_options(&args.matte, false);
    debug!(%band, ?opts, "Inspecting");

    for (idx, path) in args.input.iter().enumerate() {
        let image = super::load_image(path)?;
        let rs = recolor::analyze(&image, &band);
        let ms = matte::analyze(&image, &opts);
        let pixels = image.pixel_count();
        let share = |n: usize| super::format_percent(n as f64 / pixels as f64);

        if idx > 0 {
            println!();
        }
        println!("{}", path.display());
        println!("  Size:        {}x{} ({} pixels)", image.width(), image.height(), pixels);
        println!("  Transparent: {} ({})", rs.transparent, share(rs.transparent));
        println!("  In band:     {} ({})", rs.eligible, share(rs.eligible));
        println!("  Background:  {} ({})", ms.matted, share(ms.matted));

        if verbose > 0 {
            println!("  Hue band:    {}", band);
            println!("  White >=     {}", opts.white_threshold);
        }
    }

    Ok(())
}
