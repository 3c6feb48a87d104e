use warpkit_image::{Image, ImageDtype};

use super::border::BorderMode;
use super::interpolate::sample_pixel;

/// Kernel for bilinear interpolation
///
/// Each of the four neighbours is looked up independently, so neighbours that
/// fall outside the image take their value from the border mode. Coordinates
/// far away from the image are folded back first.
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `border` - The border mode applied to out of bounds neighbours.
///
/// # Returns
///
/// The interpolated pixel values.
pub(crate) fn bilinear_interpolation<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    u: f64,
    v: f64,
    border: BorderMode,
) -> [f32; C] {
    let u = border.fold_coordinate(u, image.cols());
    let v = border.fold_coordinate(v, image.rows());

    let u0 = u.floor();
    let v0 = v.floor();

    let frac_u = (u - u0) as f32;
    let frac_v = (v - v0) as f32;

    let frac_uu = 1.0 - frac_u;
    let frac_vv = 1.0 - frac_v;

    let w00 = frac_uu * frac_vv;
    let w10 = frac_u * frac_vv;
    let w01 = frac_uu * frac_v;
    let w11 = frac_u * frac_v;

    let (iu0, iv0) = (u0 as isize, v0 as isize);

    let p00 = sample_pixel(image, iu0, iv0, border);
    let p10 = sample_pixel(image, iu0 + 1, iv0, border);
    let p01 = sample_pixel(image, iu0, iv0 + 1, border);
    let p11 = sample_pixel(image, iu0 + 1, iv0 + 1, border);

    let mut pixel = [0.0; C];
    for k in 0..C {
        pixel[k] = p00[k] * w00 + p10[k] * w10 + p01[k] * w01 + p11[k] * w11;
    }

    pixel
}
