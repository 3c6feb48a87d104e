//! Pixel interpolation methods for image transformations.
//!
//! This module provides the interpolation kernels and border handling used
//! when resampling images during geometric transformations.
//!
//! # Interpolation Modes
//!
//! - **Nearest**: Fastest, uses nearest pixel value (no interpolation)
//! - **Bilinear**: Smooth linear interpolation between adjacent pixels
//!
//! # Border Modes
//!
//! Positions that fall outside of the source image are resolved with a
//! [`BorderMode`]: a constant fill, clamp to edge, mirror or wrap around.

mod bilinear;
mod border;
pub(crate) mod interpolate;
mod nearest;

pub use border::BorderMode;
pub use interpolate::{interpolate_pixel, InterpolationMode};
