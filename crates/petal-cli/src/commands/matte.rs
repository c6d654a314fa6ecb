//! Matte command
//!
//! Makes near-white and light gray backdrop pixels transparent.

use crate::MatteArgs;
use anyhow::{Context, Result};
use petal_ops::pipeline::matte_file;
use tracing::{info, trace};

pub fn run(args: MatteArgs, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), output = %args.output.display(), "matte::run");

    let opts = super::matte_options(&args.matte, args.clear_color);
    info!(?opts, "Matting background");

    if verbose > 0 {
        println!("Matting {} (white >= {})", args.input.display(), opts.white_threshold);
    }

    let stats = matte_file(&args.input, &args.output, &opts)
        .with_context(|| format!("Failed to matte: {}", args.input.display()))?;

    if verbose > 0 {
        println!(
            "{} of {} pixels made transparent ({})",
            stats.matted,
            stats.total,
            super::format_percent(stats.fraction())
        );
        println!("Saved to {}", args.output.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MatteOptionArgs;
    use petal_core::{Rgba8, RgbaImage};

    #[test]
    fn test_run_clear_color() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.png");
        let src = RgbaImage::from_pixels(
            2,
            1,
            &[Rgba8::new(252, 253, 254, 255), Rgba8::new(10, 20, 30, 255)],
        )
        .unwrap();
        petal_io::write(&input, &src).unwrap();

        let args = MatteArgs {
            input,
            output: output.clone(),
            matte: MatteOptionArgs {
                white_threshold: 250,
                gray_tolerance: 10,
                gray_min: 200,
                no_gray: false,
            },
            clear_color: true,
        };
        run(args, 1).unwrap();

        let out = petal_io::read(&output).unwrap();
        assert_eq!(out.pixel(0, 0), Rgba8::new(0, 0, 0, 0));
        assert_eq!(out.pixel(1, 0), Rgba8::new(10, 20, 30, 255));
    }

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let args = MatteArgs {
            input: dir.path().join("missing.png"),
            output: dir.path().join("out.png"),
            matte: MatteOptionArgs {
                white_threshold: 250,
                gray_tolerance: 10,
                gray_min: 200,
                no_gray: true,
            },
            clear_color: false,
        };
        let err = run(args, 0).unwrap_err();
        assert!(err.to_string().contains("missing.png"));
        assert!(!dir.path().join("out.png").exists());
    }
}
