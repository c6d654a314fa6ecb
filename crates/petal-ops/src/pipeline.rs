//! File-to-file operations: decode, transform in memory, encode.
//!
//! Each call reads exactly one source and writes exactly one destination.
//! The whole image is processed before the destination is touched, so a
//! failure at any stage leaves no partial output behind.

use std::path::Path;

use petal_color::HueBand;
use tracing::{info, trace};

use crate::OpsResult;
use crate::matte::{MatteOptions, MatteStats, matte_in_place};
use crate::policy::HueTransform;
use crate::recolor::{RecolorStats, recolor_in_place};

/// Recolors `input` and writes the result to `output`.
///
/// # Errors
///
/// - decode errors for a missing, unreadable or non-PNG `input`
/// - encode errors when `output` cannot be written
pub fn recolor_file<T>(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    band: &HueBand,
    transform: &T,
) -> OpsResult<RecolorStats>
where
    T: HueTransform + ?Sized,
{
    let (input, output) = (input.as_ref(), output.as_ref());
    trace!(input = %input.display(), output = %output.display(), "pipeline::recolor_file");

    let mut image = petal_io::read(input)?;
    let stats = recolor_in_place(&mut image, band, transform);
    petal_io::write(output, &image)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        eligible = stats.eligible,
        total = stats.total,
        "Recolored image"
    );
    Ok(stats)
}

/// Mattes `input` and writes the result to `output`.
pub fn matte_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    opts: &MatteOptions,
) -> OpsResult<MatteStats> {
    let (input, output) = (input.as_ref(), output.as_ref());
    trace!(input = %input.display(), output = %output.display(), "pipeline::matte_file");

    let mut image = petal_io::read(input)?;
    let stats = matte_in_place(&mut image, opts);
    petal_io::write(output, &image)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        matted = stats.matted,
        total = stats.total,
        "Matted image"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::TransformPolicy;
    use petal_core::{Rgba8, RgbaImage};

    #[test]
    fn test_missing_input_is_decode_error_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.png");
        let band = HueBand::wrapping(0.17, 0.83).unwrap();
        let identity = TransformPolicy::identity();
        let err = recolor_file(dir.path().join("nope.png"), &out, &band, &identity).unwrap_err();
        assert!(err.is_decode());
        assert!(!out.exists());
    }

    #[test]
    fn test_bad_output_extension_is_encode_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        let white = RgbaImage::filled(2, 2, Rgba8::new(255, 255, 255, 255)).unwrap();
        petal_io::write(&input, &white).unwrap();

        let err =
            matte_file(&input, dir.path().join("out.bmp"), &MatteOptions::default()).unwrap_err();
        assert!(err.is_encode());
    }
}
