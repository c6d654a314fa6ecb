//! Error types for image operations.

use petal_color::ColorError;
use petal_io::IoError;
use thiserror::Error;

/// Error type for image operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Hue band or transform parameters cannot produce meaningful output.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Source could not be decoded or destination could not be encoded.
    #[error(transparent)]
    Io(#[from] IoError),

    /// Recipe file is not valid YAML for a recipe.
    #[error("recipe parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl OpsError {
    /// True for unreadable, missing or unsupported sources.
    pub fn is_decode(&self) -> bool {
        matches!(self, OpsError::Io(IoError::DecodeError(_)))
    }

    /// True when the destination could not be written.
    pub fn is_encode(&self) -> bool {
        matches!(self, OpsError::Io(IoError::EncodeError(_)))
    }

    /// True for bad band, policy or recipe parameters.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, OpsError::InvalidConfiguration(_) | OpsError::Yaml(_))
    }
}

impl From<ColorError> for OpsError {
    fn from(e: ColorError) -> Self {
        match e {
            ColorError::InvalidBand(msg) => OpsError::InvalidConfiguration(msg),
        }
    }
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;
