use warpkit_image::ImageError;

use crate::parallel::ParallelError;

/// An error type for matrix construction and warping.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum WarpError {
    /// Error when an input parameter is out of its valid range or not finite.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Error when the requested output has no pixels.
    #[error("Invalid output dimensions {0}x{1}")]
    InvalidDimensions(usize, usize),

    /// Error when the control points are collinear.
    #[error("Degenerate geometry: the control points are collinear")]
    DegenerateGeometry,

    /// Error when the transformation matrix cannot be inverted.
    #[error("Singular transform with determinant {0}")]
    SingularTransform(f64),

    /// Error when the output would exceed the configured pixel ceiling.
    #[error("Output of {pixels} pixels exceeds the maximum of {max}")]
    OutputTooLarge {
        /// Requested number of output pixels.
        pixels: f64,
        /// Configured ceiling.
        max: usize,
    },

    /// Error from the image container.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error from the parallel executor.
    #[error(transparent)]
    Parallel(#[from] ParallelError),
}
