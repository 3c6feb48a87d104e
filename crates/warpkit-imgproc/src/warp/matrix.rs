use std::f64::consts::PI;

use super::error::WarpError;

/// Relative tolerance used to decide that a 2x2 linear part is singular.
const SINGULAR_EPS: f64 = 1e-12;

/// Relative tolerance used to decide that three control points are collinear.
const COLLINEAR_EPS: f64 = 1e-9;

/// A 2x3 affine transformation matrix.
///
/// The matrix is stored row-major as `[a, b, tx, c, d, ty]` and maps a point
/// `(x, y)` to
///
/// ```text
/// x' = a * x + b * y + tx
/// y' = c * x + d * y + ty
/// ```
///
/// The constructors describe the source to destination mapping. The warp
/// inverts the matrix to find, for every destination pixel, where to sample in
/// the source image.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AffineMatrix([f64; 6]);

impl Default for AffineMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f64; 6]> for AffineMatrix {
    fn from(coeffs: [f64; 6]) -> Self {
        Self(coeffs)
    }
}

fn check_finite(name: &str, values: &[f64]) -> Result<(), WarpError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(WarpError::InvalidParameters(format!(
            "{name} must be finite, got {values:?}"
        )))
    }
}

impl AffineMatrix {
    /// The identity transformation.
    pub fn identity() -> Self {
        Self([1.0, 0.0, 0.0, 0.0, 1.0, 0.0])
    }

    /// Create a matrix from the raw coefficients `[a, b, tx, c, d, ty]`.
    pub fn new(coeffs: [f64; 6]) -> Self {
        Self(coeffs)
    }

    /// The raw coefficients `[a, b, tx, c, d, ty]`.
    pub fn coeffs(&self) -> &[f64; 6] {
        &self.0
    }

    /// Returns a scaling matrix `[[sx, 0, 0], [0, sy, 0]]`.
    ///
    /// # Errors
    ///
    /// Zero, negative or non-finite factors are a degenerate scale and return
    /// [`WarpError::InvalidParameters`].
    ///
    /// # Example
    ///
    /// ```
    /// use warpkit_imgproc::warp::AffineMatrix;
    ///
    /// let m = AffineMatrix::from_scale(2.0, 0.5).unwrap();
    /// assert_eq!(m.transform_point(3.0, 4.0), (6.0, 2.0));
    /// ```
    pub fn from_scale(sx: f64, sy: f64) -> Result<Self, WarpError> {
        check_finite("scale factors", &[sx, sy])?;
        if sx <= 0.0 || sy <= 0.0 {
            return Err(WarpError::InvalidParameters(format!(
                "degenerate scale ({sx}, {sy}), factors must be > 0"
            )));
        }
        Ok(Self([sx, 0.0, 0.0, 0.0, sy, 0.0]))
    }

    /// Returns a 2x3 matrix for a 2D rotation around a center point.
    ///
    /// The rotation matrix is defined as:
    ///
    /// | alpha  beta  tx |
    /// | -beta  alpha ty |
    ///
    /// where:
    ///
    /// alpha = cos(angle)
    /// beta = sin(angle)
    /// tx = (1 - alpha) * center.x - beta * center.y
    /// ty = beta * center.x + (1 - alpha) * center.y
    ///
    /// # Arguments
    ///
    /// * `angle` - The angle of rotation in degrees, positive is counter-clockwise.
    /// * `center` - The center point of the rotation.
    ///
    /// # Example
    ///
    /// ```
    /// use warpkit_imgproc::warp::AffineMatrix;
    ///
    /// let m = AffineMatrix::from_rotation(90.0, (0.0, 0.0)).unwrap();
    /// let (x, y) = m.transform_point(1.0, 0.0);
    /// assert!(x.abs() < 1e-12);
    /// assert!((y + 1.0).abs() < 1e-12);
    /// ```
    pub fn from_rotation(angle: f64, center: (f64, f64)) -> Result<Self, WarpError> {
        check_finite("rotation parameters", &[angle, center.0, center.1])?;

        let angle = angle * PI / 180.0;
        let alpha = angle.cos();
        let beta = angle.sin();

        let tx = (1.0 - alpha) * center.0 - beta * center.1;
        let ty = beta * center.0 + (1.0 - alpha) * center.1;
        check_finite("rotation offsets", &[tx, ty])?;

        Ok(Self([alpha, beta, tx, -beta, alpha, ty]))
    }

    /// Returns a translation matrix `[[1, 0, dx], [0, 1, dy]]`.
    pub fn from_translation(dx: f64, dy: f64) -> Result<Self, WarpError> {
        check_finite("translation offsets", &[dx, dy])?;
        Ok(Self([1.0, 0.0, dx, 0.0, 1.0, dy]))
    }

    /// Computes the affine matrix that maps each `src[i]` exactly onto `dst[i]`.
    ///
    /// The six coefficients are the solution of the linear system made of
    /// the two equations per point pair.
    ///
    /// # Errors
    ///
    /// Returns [`WarpError::DegenerateGeometry`] when the source points are
    /// collinear and [`WarpError::InvalidParameters`] when any coordinate is not
    /// finite.
    ///
    /// # Example
    ///
    /// ```
    /// use warpkit_imgproc::warp::AffineMatrix;
    ///
    /// let src = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
    /// let dst = [[5.0, 5.0], [7.0, 5.0], [5.0, 8.0]];
    /// let m = AffineMatrix::from_points(src, dst).unwrap();
    /// assert_eq!(m.coeffs(), &[2.0, 0.0, 5.0, 0.0, 3.0, 5.0]);
    /// ```
    pub fn from_points(src: [[f64; 2]; 3], dst: [[f64; 2]; 3]) -> Result<Self, WarpError> {
        check_finite("source points", &src.concat())?;
        check_finite("destination points", &dst.concat())?;

        if points_are_collinear(&src) {
            return Err(WarpError::DegenerateGeometry);
        }

        let [[x0, y0], [x1, y1], [x2, y2]] = src;
        let (dx1, dy1) = (x1 - x0, y1 - y0);
        let (dx2, dy2) = (x2 - x0, y2 - y0);
        let det = dx1 * dy2 - dx2 * dy1;

        // solve one row of the matrix with cramer's rule on the point differences
        let solve_row = |w0: f64, w1: f64, w2: f64| {
            let (dw1, dw2) = (w1 - w0, w2 - w0);
            let p = (dw1 * dy2 - dw2 * dy1) / det;
            let q = (dx1 * dw2 - dx2 * dw1) / det;
            (p, q, w0 - p * x0 - q * y0)
        };

        let (a, b, tx) = solve_row(dst[0][0], dst[1][0], dst[2][0]);
        let (c, d, ty) = solve_row(dst[0][1], dst[1][1], dst[2][1]);
        check_finite("solved coefficients", &[a, b, tx, c, d, ty])?;

        Ok(Self([a, b, tx, c, d, ty]))
    }

    /// The determinant `a * d - b * c` of the linear part.
    pub fn determinant(&self) -> f64 {
        let [a, b, _, c, d, _] = self.0;
        a * d - b * c
    }

    /// Whether every coefficient is finite.
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }

    /// Inverts the matrix.
    ///
    /// # Errors
    ///
    /// Returns [`WarpError::SingularTransform`] when the determinant is zero
    /// relative to the magnitude of the linear part.
    pub fn inverse(&self) -> Result<Self, WarpError> {
        let [a, b, c, d, e, f] = self.0;

        let determinant = self.determinant();
        let norm = a.abs().max(b.abs()).max(d.abs()).max(e.abs());
        if !determinant.is_finite() || determinant.abs() <= SINGULAR_EPS * norm * norm {
            return Err(WarpError::SingularTransform(determinant));
        }
        let inv_determinant = 1.0 / determinant;

        let new_a = e * inv_determinant;
        let new_b = -b * inv_determinant;
        let new_d = -d * inv_determinant;
        let new_e = a * inv_determinant;
        let new_c = -(new_a * c + new_b * f);
        let new_f = -(new_d * c + new_e * f);

        Ok(Self([new_a, new_b, new_c, new_d, new_e, new_f]))
    }

    /// Applies the transformation to a point.
    #[inline]
    pub fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
        let m = &self.0;
        let u = m[0] * x + m[1] * y + m[2];
        let v = m[3] * x + m[4] * y + m[5];
        (u, v)
    }

    /// Composes two transformations: the result applies `self` first and then `next`.
    pub fn then(&self, next: &AffineMatrix) -> Self {
        let [a1, b1, t1, c1, d1, s1] = self.0;
        let [a2, b2, t2, c2, d2, s2] = next.0;
        Self([
            a2 * a1 + b2 * c1,
            a2 * b1 + b2 * d1,
            a2 * t1 + b2 * s1 + t2,
            c2 * a1 + d2 * c1,
            c2 * b1 + d2 * d1,
            c2 * t1 + d2 * s1 + s2,
        ])
    }
}

/// Whether three points lie on a line.
///
/// The determinant of the point differences is compared against a tolerance
/// relative to the spread of the points.
pub fn points_are_collinear(points: &[[f64; 2]; 3]) -> bool {
    let [[x0, y0], [x1, y1], [x2, y2]] = *points;
    let (dx1, dy1) = (x1 - x0, y1 - y0);
    let (dx2, dy2) = (x2 - x0, y2 - y0);

    let extent = [dx1, dy1, dx2, dy2]
        .iter()
        .fold(1.0f64, |acc, v| acc.max(v.abs()));
    let det = dx1 * dy2 - dx2 * dy1;

    det.abs() <= COLLINEAR_EPS * extent * extent
}
