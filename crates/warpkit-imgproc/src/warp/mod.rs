//! Geometric image transformations using affine warps.
//!
//! This module provides:
//!
//! - [`AffineMatrix`] construction for scaling, rotation, translation and
//!   three point correspondences
//! - Affine matrix inversion and composition
//! - [`warp_affine`], the inverse-mapping resampler used by every transform
//!
//! # Examples
//!
//! Rotating an image by 45 degrees:
//!
//! ```
//! use warpkit_image::Image;
//! use warpkit_imgproc::interpolation::{BorderMode, InterpolationMode};
//! use warpkit_imgproc::warp::{warp_affine, AffineMatrix};
//!
//! let src = Image::<u8, 1>::from_size_val([64, 64].into(), 255).unwrap();
//! let mut dst = Image::<u8, 1>::from_size_val(src.size(), 0).unwrap();
//!
//! let m = AffineMatrix::from_rotation(45.0, (32.0, 32.0)).unwrap();
//! warp_affine(&src, &mut dst, &m, InterpolationMode::Bilinear, BorderMode::default()).unwrap();
//!
//! // the corners are rotated out of the frame and take the border value
//! assert_eq!(dst.get([0, 0, 0]), Some(&0));
//! assert_eq!(dst.get([32, 32, 0]), Some(&255));
//! ```

mod affine;
mod error;
mod matrix;

pub use affine::{warp_affine, warp_affine_with};
pub use error::WarpError;
pub use matrix::{points_are_collinear, AffineMatrix};
