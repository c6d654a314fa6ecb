//! # petal-core
//!
//! Core types shared by every petal crate:
//!
//! - [`Rgba8`] - straight-alpha 8-bit RGBA pixel
//! - [`RgbaImage`] - owned row-major RGBA8 buffer
//! - [`Error`] / [`Result`] - buffer construction errors
//!
//! ## Crate Structure
//!
//! ```text
//! petal-core (this crate)
//!    ^
//!    +-- petal-color (HSV, hue bands)
//!    +-- petal-io (PNG decode/encode)
//!    +-- petal-ops (recolor, matte)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod pixel;

pub use error::{Error, Result};
pub use image::RgbaImage;
pub use pixel::Rgba8;
