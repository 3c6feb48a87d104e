use warpkit_image::{Image, ImageDtype};

use super::border::BorderMode;
use super::interpolate::sample_pixel;

/// Kernel for nearest neighbor interpolation
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `border` - The border mode applied when the rounded position is outside the image.
///
/// # Returns
///
/// The interpolated pixel values.
pub(crate) fn nearest_neighbor_interpolation<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    u: f64,
    v: f64,
    border: BorderMode,
) -> [f32; C] {
    // f64::round rounds half away from zero
    let iu = u.round() as isize;
    let iv = v.round() as isize;

    sample_pixel(image, iu, iv, border)
}
