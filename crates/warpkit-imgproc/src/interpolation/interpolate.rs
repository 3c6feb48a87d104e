use super::bilinear::bilinear_interpolation;
use super::border::BorderMode;
use super::nearest::nearest_neighbor_interpolation;
use warpkit_image::{Image, ImageDtype};

/// Interpolation mode for the resampling operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationMode {
    /// Bilinear interpolation
    #[default]
    Bilinear,
    /// Nearest neighbor interpolation
    Nearest,
}

impl InterpolationMode {
    /// Whether the kernel footprint at `(u, v)` touches at least one pixel of a
    /// `cols x rows` image.
    ///
    /// Outside of the footprint every sample comes from the border.
    #[inline]
    pub fn footprint_overlaps(&self, u: f64, v: f64, cols: usize, rows: usize) -> bool {
        let (cols, rows) = (cols as f64, rows as f64);
        match self {
            InterpolationMode::Nearest => {
                let (iu, iv) = (u.round(), v.round());
                iu >= 0.0 && iu < cols && iv >= 0.0 && iv < rows
            }
            InterpolationMode::Bilinear => u > -1.0 && u < cols && v > -1.0 && v < rows,
        }
    }
}

/// Reads the pixel at integer position `(x, y)` as f32 values, resolving
/// positions outside of the image with `border`.
#[inline]
pub(crate) fn sample_pixel<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    x: isize,
    y: isize,
    border: BorderMode,
) -> [f32; C] {
    let mapped = border
        .map_index(x, image.cols())
        .zip(border.map_index(y, image.rows()));

    match mapped {
        Some((ix, iy)) => {
            let mut pixel = [0.0; C];
            pixel
                .iter_mut()
                .zip(image.pixel(ix, iy))
                .for_each(|(p, &s)| *p = s.into());
            pixel
        }
        None => [border.constant_value().unwrap_or_default(); C],
    }
}

/// Kernel for interpolating a pixel value
///
/// # Arguments
///
/// * `image` - The input image container with shape (height, width, C).
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `interpolation` - The interpolation mode to use.
/// * `border` - The border mode for samples outside of the image.
///
/// # Returns
///
/// The interpolated channel values.
pub fn interpolate_pixel<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    u: f64,
    v: f64,
    interpolation: InterpolationMode,
    border: BorderMode,
) -> [f32; C] {
    match interpolation {
        InterpolationMode::Bilinear => bilinear_interpolation(image, u, v, border),
        InterpolationMode::Nearest => nearest_neighbor_interpolation(image, u, v, border),
    }
}
