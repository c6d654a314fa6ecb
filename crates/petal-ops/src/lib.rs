//! # petal-ops
//!
//! Per-pixel operations for sprite and texture cleanup.
//!
//! # Modules
//!
//! - [`recolor`] - Selective hue recoloring within a hue band
//! - [`matte`] - Background removal by brightness/saturation thresholds
//! - [`policy`] - Transform policies driving the recolor pass
//! - [`recipe`] - Serializable recolor configuration and presets
//! - [`pipeline`] - File-to-file wrappers
//!
//! # Example
//!
//! ```rust,ignore
//! use petal_ops::recipe::Preset;
//! use petal_ops::pipeline::recolor_file;
//!
//! let (band, policy) = Preset::DeepRed.recipe().build()?;
//! let stats = recolor_file("petal_rose_pink.png", "petal_rose_deep_red.png", &band, &policy)?;
//! println!("{} of {} pixels recolored", stats.eligible, stats.total);
//! ```
//!
//! All passes are single-shot: each pixel is decided independently, rows run
//! in parallel when the `parallel` feature is on (default), and results are
//! identical either way.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod parallel;
pub mod matte;
pub mod pipeline;
pub mod policy;
pub mod recipe;
pub mod recolor;

pub use error::{OpsError, OpsResult};
pub use matte::{MatteOptions, MatteStats};
pub use policy::{HueMapping, HueTransform, TransformPolicy};
pub use recipe::{Preset, Recipe};
pub use recolor::RecolorStats;
