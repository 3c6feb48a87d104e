use rayon::prelude::*;

use warpkit_image::{Image, ImageDtype};
use warpkit_imgproc::warp::{warp_affine_with, WarpError};

use crate::config::TransformConfig;
use crate::request::TransformRequest;

/// Runs [`TransformRequest`]s against images.
///
/// The transformer only holds its configuration: every call validates its
/// parameters, builds the matrix, allocates a fresh output image and warps
/// into it. Nothing is kept between calls.
///
/// # Example
///
/// ```
/// use warpkit::image::Image;
/// use warpkit::Transformer;
///
/// let image = Image::<u8, 3>::from_size_val([40, 30].into(), 128).unwrap();
/// let transformer = Transformer::default();
///
/// let scaled = transformer.scale(&image, 1.5, 0.5).unwrap();
/// assert_eq!(scaled.width(), 60);
/// assert_eq!(scaled.height(), 15);
///
/// let rotated = transformer.rotate(&image, 30.0, None).unwrap();
/// assert_eq!(rotated.size(), image.size());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    config: TransformConfig,
}

impl Transformer {
    /// Create a transformer with the given configuration.
    pub fn new(config: TransformConfig) -> Self {
        Self { config }
    }

    /// The configuration of the transformer.
    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Applies a transformation to an image.
    ///
    /// # Arguments
    ///
    /// * `image` - The source image with 1, 3 or 4 channels.
    /// * `request` - The transformation to apply.
    ///
    /// # Returns
    ///
    /// A newly allocated image with the transformed content.
    ///
    /// # Errors
    ///
    /// Every validation error is reported before the output is allocated, see
    /// [`WarpError`].
    pub fn apply<T: ImageDtype, const C: usize>(
        &self,
        image: &Image<T, C>,
        request: &TransformRequest,
    ) -> Result<Image<T, C>, WarpError> {
        if !matches!(C, 1 | 3 | 4) {
            return Err(WarpError::InvalidParameters(format!(
                "unsupported number of channels {C}, expected 1, 3 or 4"
            )));
        }

        let m = request.matrix(image.size())?;
        let new_size = request.output_size(image.size(), self.config.max_output_pixels)?;
        // warp_affine checks this too, fail before allocating the output
        m.inverse()?;

        log::debug!(
            "{}: {} -> {}, {:?}",
            request.name(),
            image.size(),
            new_size,
            request
        );

        let border = request.sampling_border(self.config.border);
        let fill = border
            .constant_value()
            .map(T::from_f32)
            .unwrap_or_default();
        let mut dst = Image::from_size_val(new_size, fill)?;

        warp_affine_with(
            image,
            &mut dst,
            &m,
            self.config.interpolation,
            border,
            self.config.strategy,
        )?;

        Ok(dst)
    }

    /// Applies the same transformation to every image of a batch in parallel.
    ///
    /// The results are independent and returned in the order of the inputs.
    pub fn apply_batch<T: ImageDtype, const C: usize>(
        &self,
        images: &[Image<T, C>],
        request: &TransformRequest,
    ) -> Vec<Result<Image<T, C>, WarpError>> {
        log::debug!("{} batch of {} images", request.name(), images.len());
        images
            .par_iter()
            .map(|image| self.apply(image, request))
            .collect()
    }

    /// Scales an image by `sx` horizontally and `sy` vertically.
    ///
    /// The output has `round(width * sx) x round(height * sy)` pixels. The
    /// source is sampled with [`BorderMode::Replicate`] whatever the configured
    /// border, so the edges of an upscaled image are not blended with a fill.
    ///
    /// [`BorderMode::Replicate`]: warpkit_imgproc::interpolation::BorderMode::Replicate
    pub fn scale<T: ImageDtype, const C: usize>(
        &self,
        image: &Image<T, C>,
        sx: f64,
        sy: f64,
    ) -> Result<Image<T, C>, WarpError> {
        self.apply(image, &TransformRequest::Scale { sx, sy })
    }

    /// Rotates an image counter-clockwise by `angle_deg` degrees around `center`.
    ///
    /// The image center `(width / 2, height / 2)` is used when `center` is `None`.
    pub fn rotate<T: ImageDtype, const C: usize>(
        &self,
        image: &Image<T, C>,
        angle_deg: f64,
        center: Option<(f64, f64)>,
    ) -> Result<Image<T, C>, WarpError> {
        self.apply(image, &TransformRequest::Rotate { angle_deg, center })
    }

    /// Shifts an image by `(dx, dy)` pixels.
    pub fn translate<T: ImageDtype, const C: usize>(
        &self,
        image: &Image<T, C>,
        dx: f64,
        dy: f64,
    ) -> Result<Image<T, C>, WarpError> {
        self.apply(image, &TransformRequest::Translate { dx, dy })
    }

    /// Warps an image with the affine map taking each `src` point onto the `dst` point.
    pub fn affine_from_points<T: ImageDtype, const C: usize>(
        &self,
        image: &Image<T, C>,
        src: [[f64; 2]; 3],
        dst: [[f64; 2]; 3],
    ) -> Result<Image<T, C>, WarpError> {
        self.apply(image, &TransformRequest::Affine { src, dst })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TransformConfig;
    use warpkit_imgproc::interpolation::{BorderMode, InterpolationMode};

    #[test]
    fn rejects_unsupported_channels() -> Result<(), WarpError> {
        let image = Image::<u8, 2>::from_size_val([4, 4].into(), 0)?;
        let res = Transformer::default().translate(&image, 1.0, 1.0);
        assert!(matches!(res, Err(WarpError::InvalidParameters(_))));
        Ok(())
    }

    #[test]
    fn fill_value_follows_border() -> Result<(), WarpError> {
        let image = Image::<u8, 1>::from_size_val([4, 4].into(), 10)?;
        let transformer = Transformer::new(
            TransformConfig::default()
                .with_interpolation(InterpolationMode::Nearest)
                .with_border(BorderMode::Constant(200.0)),
        );

        let shifted = transformer.translate(&image, 2.0, 0.0)?;
        assert_eq!(shifted.pixel(0, 0), &[200]);
        assert_eq!(shifted.pixel(1, 3), &[200]);
        assert_eq!(shifted.pixel(2, 0), &[10]);
        Ok(())
    }

    #[test]
    fn upscaling_keeps_uniform_images_uniform() -> Result<(), WarpError> {
        let image = Image::<u8, 1>::from_size_val([4, 4].into(), 255)?;

        for interpolation in [InterpolationMode::Bilinear, InterpolationMode::Nearest] {
            let transformer =
                Transformer::new(TransformConfig::default().with_interpolation(interpolation));
            for factor in [2.0, 3.0] {
                let scaled = transformer.scale(&image, factor, factor)?;
                assert_eq!(scaled.width(), 4 * factor as usize);
                assert!(
                    scaled.as_slice().iter().all(|&v| v == 255),
                    "{interpolation:?} x{factor}"
                );
            }
        }
        Ok(())
    }

    #[test]
    fn output_ceiling() -> Result<(), WarpError> {
        let image = Image::<u8, 1>::from_size_val([10, 10].into(), 0)?;
        let transformer = Transformer::new(TransformConfig::default().with_max_output_pixels(399));

        let res = transformer.scale(&image, 2.0, 2.0);
        assert_eq!(
            res,
            Err(WarpError::OutputTooLarge {
                pixels: 400.0,
                max: 399
            })
        );
        assert!(transformer.scale(&image, 1.9, 2.0).is_ok());
        Ok(())
    }

    #[test]
    fn batch_keeps_order_and_errors() -> Result<(), WarpError> {
        let images = vec![
            Image::<u8, 1>::from_size_val([4, 2].into(), 1)?,
            Image::<u8, 1>::from_size_val([1, 1].into(), 2)?,
            Image::<u8, 1>::from_size_val([6, 6].into(), 3)?,
        ];
        let request = TransformRequest::Scale { sx: 0.5, sy: 1.0 };

        let results = Transformer::default().apply_batch(&images, &request);
        assert_eq!(results.len(), 3);

        let first = results[0].as_ref().map_err(Clone::clone)?;
        assert_eq!(first.size(), [2, 2].into());

        // 1 * 0.5 rounds to 1
        let second = results[1].as_ref().map_err(Clone::clone)?;
        assert_eq!(second.size(), [1, 1].into());

        let third = results[2].as_ref().map_err(Clone::clone)?;
        assert_eq!(third.size(), [3, 6].into());
        Ok(())
    }

    #[test]
    fn batch_reports_per_image_errors() -> Result<(), WarpError> {
        let images = vec![
            Image::<u8, 1>::from_size_val([1, 1].into(), 0)?,
            Image::<u8, 1>::from_size_val([8, 8].into(), 0)?,
        ];
        let request = TransformRequest::Scale { sx: 0.2, sy: 0.2 };

        let results = Transformer::default().apply_batch(&images, &request);
        assert_eq!(results[0], Err(WarpError::InvalidDimensions(0, 0)));
        assert!(results[1].is_ok());
        Ok(())
    }
}
