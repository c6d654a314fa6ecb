//! Error types for color predicates.

use thiserror::Error;

/// Error type for hue band construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// Hue band thresholds are out of range or inconsistent.
    #[error("invalid hue band: {0}")]
    InvalidBand(String),
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
