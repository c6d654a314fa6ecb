//! Integration tests for petal crates.
//!
//! End-to-end checks that go through real PNG files: decode, recolor or
//! matte, encode, and read back.

#[cfg(test)]
mod tests {
    use petal_color::{Hsv, HueBand};
    use petal_core::{Rgba8, RgbaImage};
    use petal_ops::matte::MatteOptions;
    use petal_ops::pipeline::{matte_file, recolor_file};
    use petal_ops::recolor::is_eligible;
    use petal_ops::{Preset, Recipe, TransformPolicy};
    use std::path::Path;
    use tempfile::tempdir;

    /// A 24x16 "flower on a white sheet": pink petals, green stem, white
    /// backdrop, light gray shadow and a transparent top row.
    fn flower() -> RgbaImage {
        let (w, h) = (24u32, 16u32);
        let mut img = RgbaImage::filled(w, h, Rgba8::new(255, 255, 255, 255)).unwrap();
        for y in 0..h {
            for x in 0..w {
                let px = if y == 0 {
                    Rgba8::new(255, 0, 128, 0)
                } else if (4..10).contains(&x) && (2..8).contains(&y) {
                    Rgba8::new(255, (x * 10) as u8, 150 + y as u8 * 5, 255)
                } else if x == 7 && y >= 8 {
                    Rgba8::new(30, 160, 40, 255)
                } else if x > 16 && y > 10 {
                    Rgba8::new(215, 212, 218, 200)
                } else {
                    continue;
                };
                img.set_pixel(x, y, px).unwrap();
            }
        }
        img
    }

    fn write_flower(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("flower.png");
        petal_io::write(&path, &flower()).unwrap();
        path
    }

    #[test]
    fn test_recolor_scenario_through_files() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.png");
        let src = RgbaImage::from_pixels(
            2,
            1,
            &[Rgba8::new(255, 0, 128, 255), Rgba8::new(255, 0, 128, 0)],
        )
        .unwrap();
        petal_io::write(&input, &src).unwrap();

        let (band, policy) = Preset::DeepRed.recipe().build().unwrap();
        let stats = recolor_file(&input, &output, &band, &policy).unwrap();

        let out = petal_io::read(&output).unwrap();
        assert_eq!(out.dimensions(), (2, 1));
        assert_eq!(out.pixel(0, 0), Rgba8::new(153, 18, 0, 255));
        assert_eq!(out.pixel(1, 0), Rgba8::new(255, 0, 128, 0));
        assert_eq!(stats.eligible, 1);
        assert_eq!(stats.transparent, 1);
    }

    #[test]
    fn test_recolor_preserves_shape_alpha_and_out_of_band() {
        let dir = tempdir().unwrap();
        let input = write_flower(dir.path());
        let output = dir.path().join("red.png");

        let (band, policy) = Preset::DeepRed.recipe().build().unwrap();
        let stats = recolor_file(&input, &output, &band, &policy).unwrap();

        let src = flower();
        let out = petal_io::read(&output).unwrap();
        assert_eq!(out.dimensions(), src.dimensions());
        assert_eq!(stats.total, src.pixel_count());
        for (s, o) in src.pixels().zip(out.pixels()) {
            assert_eq!(s.a, o.a);
            if !is_eligible(s, &band) {
                assert_eq!(s, o);
            }
        }
        // stem stays green
        assert_eq!(out.pixel(7, 12), Rgba8::new(30, 160, 40, 255));
    }

    #[test]
    fn test_recolor_is_deterministic_on_disk() {
        let dir = tempdir().unwrap();
        let input = write_flower(dir.path());
        let a = dir.path().join("a.png");
        let b = dir.path().join("b.png");

        let (band, policy) = Preset::PinkToRed.recipe().build().unwrap();
        recolor_file(&input, &a, &band, &policy).unwrap();
        recolor_file(&input, &b, &band, &policy).unwrap();

        assert_eq!(std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());
    }

    #[test]
    fn test_matte_then_recolor_skips_backdrop() {
        let dir = tempdir().unwrap();
        let input = write_flower(dir.path());
        let cut = dir.path().join("cut.png");
        let red = dir.path().join("red.png");

        let ms = matte_file(&input, &cut, &MatteOptions::default()).unwrap();
        assert!(ms.matted > 0);

        let (band, policy) = Preset::DeepRed.recipe().build().unwrap();
        recolor_file(&cut, &red, &band, &policy).unwrap();

        let out = petal_io::read(&red).unwrap();
        // backdrop: alpha 0, RGB untouched by both passes
        assert_eq!(out.pixel(0, 15), Rgba8::new(255, 255, 255, 0));
        // shadow matted by the gray test
        assert_eq!(out.pixel(20, 14), Rgba8::new(215, 212, 218, 0));
        // petals recolored towards hue 0.02
        let petal = out.pixel(5, 3);
        assert_eq!(petal.a, 255);
        assert!((Hsv::from_pixel(petal).h - 0.02).abs() < 0.01);
    }

    #[test]
    fn test_matte_white_only_keeps_shadow() {
        let dir = tempdir().unwrap();
        let input = write_flower(dir.path());
        let output = dir.path().join("cut.png");

        matte_file(&input, &output, &MatteOptions::white_only(250)).unwrap();

        let out = petal_io::read(&output).unwrap();
        assert_eq!(out.pixel(20, 14), Rgba8::new(215, 212, 218, 200));
        assert_eq!(out.pixel(0, 15).a, 0);
    }

    #[test]
    fn test_recipe_file_drives_recolor() {
        let dir = tempdir().unwrap();
        let input = write_flower(dir.path());
        let recipe_path = dir.path().join("recipe.yaml");
        std::fs::write(
            &recipe_path,
            "hue_band:\n  low_threshold: 0.5\n  high_threshold: 0.5\n\
             transform:\n  value_multiplier: 0.0\n",
        )
        .unwrap();

        let (band, policy) = Recipe::load(&recipe_path).unwrap().build().unwrap();
        let output = dir.path().join("dark.png");
        recolor_file(&input, &output, &band, &policy).unwrap();

        // every non-transparent pixel except hue exactly 0.5 goes black
        let out = petal_io::read(&output).unwrap();
        assert_eq!(out.pixel(7, 12), Rgba8::new(0, 0, 0, 255));
        assert_eq!(out.pixel(0, 0), Rgba8::new(255, 0, 128, 0));
    }

    #[test]
    fn test_closure_transform_through_files() {
        let dir = tempdir().unwrap();
        let input = write_flower(dir.path());
        let output = dir.path().join("gray.png");
        let desaturate = |hsv: Hsv| Hsv { s: 0.0, ..hsv };

        let stats = recolor_file(&input, &output, &HueBand::all(), &desaturate).unwrap();

        let out = petal_io::read(&output).unwrap();
        assert_eq!(out.pixel(7, 12), Rgba8::new(160, 160, 160, 255));
        assert_eq!(stats.transparent, 24);
    }

    #[test]
    fn test_missing_input_is_decode_error() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out.png");
        let err = recolor_file(
            dir.path().join("missing.png"),
            &output,
            &HueBand::all(),
            &TransformPolicy::identity(),
        )
        .unwrap_err();
        assert!(err.is_decode());
        assert!(!output.exists());
    }

    #[test]
    fn test_non_png_input_is_decode_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("photo.png");
        std::fs::write(&input, [0xFF, 0xD8, 0xFF, 0xE0, 0, 0x10, b'J', b'F', b'I', b'F']).unwrap();
        let output = dir.path().join("out.png");

        let err = matte_file(&input, &output, &MatteOptions::default()).unwrap_err();
        assert!(err.is_decode());
        assert!(!output.exists());
    }

    #[test]
    fn test_unwritable_output_is_encode_error() {
        let dir = tempdir().unwrap();
        let input = write_flower(dir.path());
        let output = dir.path().join("no_such_dir").join("out.png");

        let (band, policy) = Preset::DeepRed.recipe().build().unwrap();
        let err = recolor_file(&input, &output, &band, &policy).unwrap_err();
        assert!(err.is_encode());
        assert!(!output.exists());
    }
}
