//! # petal-color
//!
//! Color math for selective recoloring.
//!
//! # Modules
//!
//! - [`hsv`] - RGB <-> HSV conversion with normalized components
//! - [`band`] - Hue-band predicates that handle the 0/1 seam
//!
//! # Example
//!
//! ```rust
//! use petal_color::{Hsv, HueBand};
//!
//! let band = HueBand::wrapping(0.17, 0.83).unwrap();
//! let hsv = Hsv::from_rgb8(255, 0, 128);
//! assert!(band.contains(hsv.h));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod band;
pub mod hsv;

pub use band::{HueBand, HueInterval};
pub use error::{ColorError, ColorResult};
pub use hsv::Hsv;
