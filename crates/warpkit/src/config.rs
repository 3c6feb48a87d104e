use warpkit_imgproc::{
    interpolation::{BorderMode, InterpolationMode},
    parallel::ExecutionStrategy,
};

/// Default ceiling on the number of output pixels (~100 megapixels).
pub const DEFAULT_MAX_OUTPUT_PIXELS: usize = 100_000_000;

/// Configuration shared by every transformation of a [`crate::Transformer`].
///
/// The configuration is owned by the caller and never mutated by the
/// transformations.
///
/// # Example
///
/// ```
/// use warpkit::TransformConfig;
/// use warpkit::imgproc::interpolation::{BorderMode, InterpolationMode};
///
/// let config = TransformConfig::default()
///     .with_interpolation(InterpolationMode::Nearest)
///     .with_border(BorderMode::Replicate);
///
/// assert_eq!(config.interpolation, InterpolationMode::Nearest);
/// assert_eq!(config.border, BorderMode::Replicate);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TransformConfig {
    /// Interpolation used to resample the source image.
    pub interpolation: InterpolationMode,
    /// Policy for positions outside of the source image.
    pub border: BorderMode,
    /// Largest number of pixels an output image may have.
    pub max_output_pixels: usize,
    /// How the rows of the output are scheduled.
    pub strategy: ExecutionStrategy,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            interpolation: InterpolationMode::Bilinear,
            border: BorderMode::Constant(0.0),
            max_output_pixels: DEFAULT_MAX_OUTPUT_PIXELS,
            strategy: ExecutionStrategy::ParallelRows,
        }
    }
}

impl TransformConfig {
    /// Sets the interpolation mode.
    pub fn with_interpolation(mut self, interpolation: InterpolationMode) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Sets the border mode.
    pub fn with_border(mut self, border: BorderMode) -> Self {
        self.border = border;
        self
    }

    /// Sets the output pixel ceiling.
    pub fn with_max_output_pixels(mut self, max_output_pixels: usize) -> Self {
        self.max_output_pixels = max_output_pixels;
        self
    }

    /// Sets the execution strategy.
    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}
