/// A border type for sampling outside of the image.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderMode {
    /// Every channel outside the image takes a single, constant value.
    ///
    /// Example: ...d c b a | 0 0 0 0...
    Constant(f32),

    /// Takes the outermost row or column of pixels and repeats it (clamp to edge).
    ///
    /// Example: ...d c b a | a a a a...
    Replicate,

    /// Reflects the pixel values at the boundary, starting with the pixel 'next' to the edge.
    ///
    /// Example: ...d c b a | b c d e...
    Reflect101,

    /// Wraps the content from the opposite side.
    ///
    /// Example: ...d c b a | w x y z...
    Wrap,
}

impl Default for BorderMode {
    fn default() -> Self {
        BorderMode::Constant(0.0)
    }
}

impl BorderMode {
    /// The fill value when the border is constant.
    pub fn constant_value(&self) -> Option<f32> {
        match self {
            BorderMode::Constant(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    fn reflect101(i: isize, len: usize) -> usize {
        if len == 1 {
            return 0;
        }
        let period = 2 * len as isize - 2;
        let r = i.rem_euclid(period);
        if r < len as isize {
            r as usize
        } else {
            (period - r) as usize
        }
    }

    /// Brings a continuous coordinate far outside of `[0, len)` back next to
    /// the image without changing the samples the border mode produces.
    ///
    /// Coordinates within `[-2, len + 1]` are returned unchanged, so the
    /// integer neighbours of the result always fit in an `isize`. Non-finite
    /// coordinates are treated as outside of the image.
    #[inline]
    pub(crate) fn fold_coordinate(&self, u: f64, len: usize) -> f64 {
        let (lo, hi) = (-2.0, len as f64 + 1.0);
        if (lo..=hi).contains(&u) {
            return u;
        }
        if !u.is_finite() {
            return lo;
        }
        match self {
            BorderMode::Constant(_) | BorderMode::Replicate => u.clamp(lo, hi),
            BorderMode::Reflect101 if len == 1 => lo,
            BorderMode::Reflect101 => u.rem_euclid(2.0 * len as f64 - 2.0),
            BorderMode::Wrap => u.rem_euclid(len as f64),
        }
    }

    /// Maps index `i` to a valid index within `[0, len)` according to the border mode.
    ///
    /// Indices already inside the range are returned unchanged. `Constant`
    /// returns `None` for indices outside the range, the caller then uses the
    /// fill value.
    ///
    /// # Arguments
    /// - `i`: The (possibly out-of-range) coordinate index.
    /// - `len`: The valid length of the dimension, must be non-zero.
    #[inline]
    pub fn map_index(&self, i: isize, len: usize) -> Option<usize> {
        if i >= 0 && (i as usize) < len {
            return Some(i as usize);
        }
        match self {
            BorderMode::Constant(_) => None,
            BorderMode::Replicate => Some(i.clamp(0, len as isize - 1) as usize),
            BorderMode::Reflect101 => Some(Self::reflect101(i, len)),
            BorderMode::Wrap => Some(i.rem_euclid(len as isize) as usize),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BorderMode;

    #[test]
    fn constant_outside_is_none() {
        let mode = BorderMode::Constant(7.0);
        assert_eq!(mode.map_index(-1, 5), None);
        assert_eq!(mode.map_index(5, 5), None);
        assert_eq!(mode.map_index(3, 5), Some(3));
        assert_eq!(mode.constant_value(), Some(7.0));
    }

    #[test]
    fn replicate_clamps() {
        let mode = BorderMode::Replicate;
        assert_eq!(mode.map_index(-3, 5), Some(0));
        assert_eq!(mode.map_index(4, 5), Some(4));
        assert_eq!(mode.map_index(99, 5), Some(4));
        assert_eq!(mode.constant_value(), None);
    }

    #[test]
    fn wrap_is_circular() {
        let mode = BorderMode::Wrap;
        assert_eq!(mode.map_index(-1, 5), Some(4));
        assert_eq!(mode.map_index(-6, 5), Some(4));
        assert_eq!(mode.map_index(5, 5), Some(0));
        assert_eq!(mode.map_index(12, 5), Some(2));
    }

    #[test]
    fn fold_keeps_nearby_coordinates() {
        for mode in [
            BorderMode::Constant(0.0),
            BorderMode::Replicate,
            BorderMode::Reflect101,
            BorderMode::Wrap,
        ] {
            for u in [-2.0, -0.5, 0.0, 2.25, 5.0, 6.0] {
                assert_eq!(mode.fold_coordinate(u, 5), u);
            }
        }
    }

    #[test]
    fn fold_far_coordinates() {
        assert_eq!(BorderMode::Replicate.fold_coordinate(-1e20, 5), -2.0);
        assert_eq!(BorderMode::Replicate.fold_coordinate(1e20, 5), 6.0);
        assert_eq!(BorderMode::Constant(1.0).fold_coordinate(1e300, 5), 6.0);

        // period 5 for wrap and 8 for reflect101
        assert_eq!(BorderMode::Wrap.fold_coordinate(12.5, 5), 2.5);
        assert_eq!(BorderMode::Wrap.fold_coordinate(-7.5, 5), 2.5);
        assert_eq!(BorderMode::Reflect101.fold_coordinate(19.0, 5), 3.0);
        assert_eq!(BorderMode::Reflect101.fold_coordinate(-13.0, 5), 3.0);
        assert_eq!(BorderMode::Reflect101.fold_coordinate(40.0, 1), -2.0);

        for mode in [BorderMode::Wrap, BorderMode::Reflect101] {
            let u = mode.fold_coordinate(-1e20, 5);
            assert!((0.0..8.0).contains(&u), "{mode:?} folded to {u}");
        }
        assert_eq!(BorderMode::Wrap.fold_coordinate(f64::NAN, 5), -2.0);
    }

    #[test]
    fn reflect101_mirrors_without_edge() {
        let mode = BorderMode::Reflect101;
        let cases = [(-3, 3), (-1, 1), (0, 0), (4, 4), (5, 3), (7, 1), (8, 0)];
        for (i, expected) in cases {
            assert_eq!(mode.map_index(i, 5), Some(expected), "index {i}");
        }
        assert_eq!(mode.map_index(-4, 1), Some(0));
    }
}
