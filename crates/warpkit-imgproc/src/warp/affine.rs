use warpkit_image::{Image, ImageDtype};

use super::error::WarpError;
use super::matrix::AffineMatrix;
use crate::interpolation::{interpolate_pixel, BorderMode, InterpolationMode};
use crate::parallel::{self, ExecutionStrategy};

/// Applies an affine transformation to an image.
///
/// Every pixel of `dst` is mapped back into `src` with the inverse of `m` and
/// resampled with the given interpolation. The size of `dst` is the output size.
///
/// # Arguments
///
/// * `src` - The input image with shape (height, width, channels).
/// * `dst` - The output image with shape (new_height, new_width, channels).
/// * `m` - The 2x3 affine transformation matrix, mapping source to destination.
/// * `interpolation` - The interpolation mode to use.
/// * `border` - The border mode for positions outside of `src`.
///
/// # Errors
///
/// [`WarpError::InvalidParameters`] when the matrix is not finite and
/// [`WarpError::SingularTransform`] when it cannot be inverted. `dst` is left
/// untouched in both cases.
///
/// # Example
///
/// ```
/// use warpkit_image::{Image, ImageSize};
/// use warpkit_imgproc::interpolation::{BorderMode, InterpolationMode};
/// use warpkit_imgproc::warp::{warp_affine, AffineMatrix};
///
/// let src = Image::<_, 3>::from_size_val(
///    ImageSize {
///       width: 4,
///      height: 5,
///  },
///  1f32,
/// ).unwrap();
///
/// let new_size = ImageSize {
///    width: 4,
///   height: 5,
/// };
///
/// let mut dst = Image::<_, 3>::from_size_val(new_size, 0.0).unwrap();
///
/// warp_affine(
///     &src,
///     &mut dst,
///     &AffineMatrix::identity(),
///     InterpolationMode::Nearest,
///     BorderMode::default(),
/// )
/// .unwrap();
///
/// assert_eq!(dst.size().width, 4);
/// assert_eq!(dst.size().height, 5);
/// assert_eq!(dst.as_slice(), src.as_slice());
/// ```
pub fn warp_affine<T: ImageDtype, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    m: &AffineMatrix,
    interpolation: InterpolationMode,
    border: BorderMode,
) -> Result<(), WarpError> {
    warp_affine_with(
        src,
        dst,
        m,
        interpolation,
        border,
        ExecutionStrategy::default(),
    )
}

/// Applies an affine transformation to an image with an explicit execution strategy.
///
/// See [`warp_affine`].
pub fn warp_affine_with<T: ImageDtype, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    m: &AffineMatrix,
    interpolation: InterpolationMode,
    border: BorderMode,
    strategy: ExecutionStrategy,
) -> Result<(), WarpError> {
    if !m.is_finite() {
        return Err(WarpError::InvalidParameters(format!(
            "matrix must be finite, got {:?}",
            m.coeffs()
        )));
    }

    // invert affine transform matrix to find corresponding positions in src from dst
    let m_inv = m.inverse()?;

    log::debug!(
        "warp_affine: {} -> {}, m: {:?}, {:?}, {:?}",
        src.size(),
        dst.size(),
        m.coeffs(),
        interpolation,
        border
    );

    let (src_cols, src_rows) = (src.cols(), src.rows());
    let dst_cols = dst.cols();
    let fill = border.constant_value().map(T::from_f32);

    // each row of dst is independent, the source is only read
    parallel::par_iter_rows_indexed(
        dst.as_slice_mut(),
        C * dst_cols,
        strategy,
        |y, dst_row| {
            dst_row
                .chunks_exact_mut(C)
                .enumerate()
                .for_each(|(x, dst_pixel)| {
                    let (u, v) = m_inv.transform_point(x as f64, y as f64);

                    // the whole kernel reads from a constant border
                    if let Some(fill) = fill {
                        if !interpolation.footprint_overlaps(u, v, src_cols, src_rows) {
                            dst_pixel.fill(fill);
                            return;
                        }
                    }

                    let pixel = interpolate_pixel(src, u, v, interpolation, border);
                    dst_pixel
                        .iter_mut()
                        .zip(pixel.iter())
                        .for_each(|(d, &p)| *d = T::from_f32(p));
                });
        },
    )?;

    Ok(())
}
