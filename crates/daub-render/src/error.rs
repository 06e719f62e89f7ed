//! Render and image I/O errors.

use thiserror::Error;

/// Errors from rasterization and image I/O.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
