//! Error types of the crate.

use nalgebra::Vector3;
use thiserror::Error;

/// Errors that can occur while loading or building a volume.
#[derive(Error, Debug)]
pub enum VolumeError {
    /// Path does not point to a regular file.
    #[error("path does not lead to a file: {0}")]
    NotAFile(String),

    /// Underlying I/O failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Data could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// Data length does not match declared dimensions.
    #[error("expected {expected} bytes of samples, found {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// At least one axis has zero length.
    #[error("volume dimensions must be positive, got {0:?}")]
    EmptyDimensions(Vector3<usize>),
}

/// Errors of render configuration.
#[derive(Error, Debug, PartialEq)]
pub enum RenderError {
    /// Soft tissue opacity is not a number within <0;1>.
    #[error("soft tissue opacity must be within <0;1>, got {0}")]
    InvalidOpacity(f32),

    /// Light position is not finite.
    #[error("light source position must be finite, got {0}")]
    InvalidLightSource(f64),
}

pub type Result<T> = std::result::Result<T, VolumeError>;
