use warpkit_image::ImageSize;
use warpkit_imgproc::interpolation::BorderMode;
use warpkit_imgproc::warp::{points_are_collinear, AffineMatrix, WarpError};

/// A single geometric transformation, as requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransformRequest {
    /// Resize by independent horizontal and vertical factors, both > 0.
    Scale {
        /// Horizontal factor.
        sx: f64,
        /// Vertical factor.
        sy: f64,
    },
    /// Rotate counter-clockwise around a center, keeping the canvas size.
    Rotate {
        /// Angle in degrees.
        angle_deg: f64,
        /// Rotation center, the image center `(width / 2, height / 2)` when `None`.
        center: Option<(f64, f64)>,
    },
    /// Shift by signed, possibly fractional, pixel offsets.
    Translate {
        /// Horizontal offset.
        dx: f64,
        /// Vertical offset.
        dy: f64,
    },
    /// Map three source points onto three destination points.
    Affine {
        /// Non-collinear source points.
        src: [[f64; 2]; 3],
        /// Destination points.
        dst: [[f64; 2]; 3],
    },
}

impl TransformRequest {
    /// A preset mapping three corners of a square onto a sheared triangle.
    ///
    /// `(50, 50), (200, 50), (50, 200)` map onto `(10, 100), (200, 50), (100, 250)`.
    pub fn reference_affine() -> Self {
        TransformRequest::Affine {
            src: [[50.0, 50.0], [200.0, 50.0], [50.0, 200.0]],
            dst: [[10.0, 100.0], [200.0, 50.0], [100.0, 250.0]],
        }
    }

    /// Short name of the transformation family.
    pub fn name(&self) -> &'static str {
        match self {
            TransformRequest::Scale { .. } => "scale",
            TransformRequest::Rotate { .. } => "rotate",
            TransformRequest::Translate { .. } => "translate",
            TransformRequest::Affine { .. } => "affine",
        }
    }

    /// Builds the source to destination matrix for an image of the given size.
    ///
    /// # Errors
    ///
    /// Parameter validation errors from [`AffineMatrix`]. Collinear
    /// destination points of an affine request are rejected with
    /// [`WarpError::DegenerateGeometry`] as they cannot be warped.
    ///
    /// # Example
    ///
    /// ```
    /// use warpkit::TransformRequest;
    ///
    /// let request = TransformRequest::Rotate { angle_deg: 0.0, center: None };
    /// let m = request.matrix([10, 6].into()).unwrap();
    /// assert_eq!(m.transform_point(3.0, 4.0), (3.0, 4.0));
    /// ```
    pub fn matrix(&self, size: ImageSize) -> Result<AffineMatrix, WarpError> {
        match *self {
            TransformRequest::Scale { sx, sy } => AffineMatrix::from_scale(sx, sy),
            TransformRequest::Rotate { angle_deg, center } => {
                let center = center.unwrap_or_else(|| default_center(size));
                AffineMatrix::from_rotation(angle_deg, center)
            }
            TransformRequest::Translate { dx, dy } => AffineMatrix::from_translation(dx, dy),
            TransformRequest::Affine { src, dst } => {
                let m = AffineMatrix::from_points(src, dst)?;
                if points_are_collinear(&dst) {
                    return Err(WarpError::DegenerateGeometry);
                }
                Ok(m)
            }
        }
    }

    /// The border used to sample the source for this request.
    ///
    /// Scaling resamples the whole image onto a new grid, so the last rows and
    /// columns always clamp to the edge like a resize does. Every other
    /// transformation keeps the configured border.
    pub fn sampling_border(&self, configured: BorderMode) -> BorderMode {
        match self {
            TransformRequest::Scale { .. } => BorderMode::Replicate,
            _ => configured,
        }
    }

    /// The size of the output image for an input of the given size.
    ///
    /// Scaling rounds `width * sx` and `height * sy` half away from zero, every
    /// other transformation keeps the input size.
    ///
    /// # Errors
    ///
    /// [`WarpError::InvalidParameters`] for invalid scale factors,
    /// [`WarpError::InvalidDimensions`] when a dimension rounds to zero and
    /// [`WarpError::OutputTooLarge`] when the area exceeds `max_pixels`.
    pub fn output_size(&self, size: ImageSize, max_pixels: usize) -> Result<ImageSize, WarpError> {
        let (width, height) = match *self {
            TransformRequest::Scale { sx, sy } => {
                // validates the factors
                AffineMatrix::from_scale(sx, sy)?;
                (
                    (size.width as f64 * sx).round(),
                    (size.height as f64 * sy).round(),
                )
            }
            _ => (size.width as f64, size.height as f64),
        };

        let pixels = width * height;
        if pixels > max_pixels as f64 {
            return Err(WarpError::OutputTooLarge {
                pixels,
                max: max_pixels,
            });
        }

        let (width, height) = (width as usize, height as usize);
        if width == 0 || height == 0 {
            return Err(WarpError::InvalidDimensions(width, height));
        }

        Ok(ImageSize { width, height })
    }
}

/// The default rotation center, halving the size with integer division.
fn default_center(size: ImageSize) -> (f64, f64) {
    ((size.width / 2) as f64, (size.height / 2) as f64)
}
