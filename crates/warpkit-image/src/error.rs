/// An error type for the image module.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ImageError {
    /// Error when the image has no pixels.
    #[error("Image size must be non-zero, got {0}x{1}")]
    InvalidImageSize(usize, usize),

    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),
}
