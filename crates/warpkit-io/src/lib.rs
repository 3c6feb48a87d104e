#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the io module.
pub mod error;

/// High-level image reading and writing functions.
///
/// See [`functional::read_image_any`] for automatic format detection.
pub mod functional;

pub use error::IoError;
pub use functional::GenericImage;
