use std::ops::Deref;

use super::InterpError;

/// Strictly increasing, finite grid coordinates along one axis.
///
/// An axis with a single breakpoint is allowed; the interpolant is then
/// constant along that axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakpoints(Vec<f64>);

/// Location of a coordinate relative to an axis.
///
/// `fraction` is the position within `[lower, upper]`, and lies outside
/// `[0, 1]` when the coordinate is beyond the first or last breakpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Segment {
    pub(super) lower: usize,
    pub(super) upper: usize,
    pub(super) fraction: f64,
    pub(super) inv_width: f64,
}

impl Breakpoints {
    /// Creates breakpoints from explicit coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`InterpError::EmptyAxis`] if `values` is empty, or
    /// [`InterpError::NotIncreasing`] if any value is not finite or not
    /// greater than its predecessor.
    pub fn new(values: Vec<f64>) -> Result<Self, InterpError> {
        if values.is_empty() {
            return Err(InterpError::EmptyAxis);
        }

        if let Some(index) = values.iter().position(|x| !x.is_finite()) {
            return Err(InterpError::NotIncreasing { index });
        }

        if let Some(index) = values.windows(2).position(|pair| pair[1] <= pair[0]) {
            return Err(InterpError::NotIncreasing { index: index + 1 });
        }

        Ok(Self(values))
    }

    /// Creates `num` evenly spaced breakpoints from `start` to `stop`, inclusive.
    ///
    /// A single breakpoint is `[start]`.
    ///
    /// ```
    /// use heatpipe_models::support::interp::Breakpoints;
    ///
    /// let energy = Breakpoints::linspace(16.0, 32.0, 3).unwrap();
    /// assert_eq!(energy.as_slice(), &[16.0, 24.0, 32.0]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if `num` is zero or the resulting coordinates are not
    /// strictly increasing (for example, `stop <= start` with `num > 1`).
    pub fn linspace(start: f64, stop: f64, num: usize) -> Result<Self, InterpError> {
        let values = match num {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                #[allow(clippy::cast_precision_loss)]
                let step = (stop - start) / (num - 1) as f64;
                #[allow(clippy::cast_precision_loss)]
                let mut values: Vec<f64> = (0..num).map(|i| start + i as f64 * step).collect();
                values[num - 1] = stop;
                values
            }
        };
        Self::new(values)
    }

    /// Returns the coordinates as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Returns the first breakpoint.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.0[0]
    }

    /// Returns the last breakpoint.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.0[self.0.len() - 1]
    }

    /// Returns true if `x` lies within `[min, max]`.
    #[must_use]
    pub fn spans(&self, x: f64) -> bool {
        (self.min()..=self.max()).contains(&x)
    }

    /// Locates the segment used to interpolate at `x`.
    ///
    /// Segments are half-open (`x_i < x <= x_{i+1}`) and clamped to the first
    /// and last segment, so coordinates beyond the axis extrapolate linearly.
    /// The first breakpoint belongs to the first segment.
    pub(super) fn segment(&self, x: f64) -> Segment {
        let n = self.0.len();
        if n == 1 {
            return Segment {
                lower: 0,
                upper: 0,
                fraction: 0.0,
                inv_width: 0.0,
            };
        }

        let lower = self
            .0
            .partition_point(|&b| b < x)
            .saturating_sub(1)
            .min(n - 2);
        let upper = lower + 1;
        let width = self.0[upper] - self.0[lower];

        Segment {
            lower,
            upper,
            fraction: (x - self.0[lower]) / width,
            inv_width: width.recip(),
        }
    }
}

impl Deref for Breakpoints {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn linspace_matches_reference_axes() {
        let extra = Breakpoints::linspace(1.0, 2.0, 6).unwrap();
        let expected = [1.0, 1.2, 1.4, 1.6, 1.8, 2.0];
        assert_eq!(extra.len(), 6);
        for (x, e) in extra.iter().zip(expected) {
            assert_relative_eq!(*x, e, epsilon = 1e-12);
        }

        let ratio = Breakpoints::linspace(0.25, 1.0, 4).unwrap();
        assert_eq!(ratio.as_slice(), &[0.25, 0.5, 0.75, 1.0]);

        let single = Breakpoints::linspace(0.006, 0.006, 1).unwrap();
        assert_eq!(single.as_slice(), &[0.006]);
    }

    #[test]
    fn rejects_invalid_axes() {
        assert_eq!(Breakpoints::new(vec![]), Err(InterpError::EmptyAxis));
        assert_eq!(Breakpoints::linspace(0.0, 1.0, 0), Err(InterpError::EmptyAxis));
        assert_eq!(
            Breakpoints::new(vec![0.0, 1.0, 1.0]),
            Err(InterpError::NotIncreasing { index: 2 })
        );
        assert_eq!(
            Breakpoints::new(vec![0.0, f64::NAN]),
            Err(InterpError::NotIncreasing { index: 1 })
        );
        assert!(Breakpoints::linspace(2.0, 1.0, 3).is_err());
    }

    #[test]
    fn segments_end_at_breakpoints_and_are_clamped() {
        let bp = Breakpoints::new(vec![0.0, 1.0, 3.0]).unwrap();

        let s = bp.segment(0.5);
        assert_eq!((s.lower, s.upper), (0, 1));
        assert_relative_eq!(s.fraction, 0.5);

        // Interior breakpoints end the previous segment.
        let s = bp.segment(1.0);
        assert_eq!((s.lower, s.upper), (0, 1));
        assert_relative_eq!(s.fraction, 1.0);
        assert_relative_eq!(s.inv_width, 1.0);

        let s = bp.segment(0.0);
        assert_eq!((s.lower, s.upper), (0, 1));
        assert_relative_eq!(s.fraction, 0.0);

        // The last breakpoint stays in the last segment.
        let s = bp.segment(3.0);
        assert_eq!((s.lower, s.upper), (1, 2));
        assert_relative_eq!(s.fraction, 1.0);

        // Beyond the axis the end segments continue.
        assert_relative_eq!(bp.segment(-1.0).fraction, -1.0);
        assert_relative_eq!(bp.segment(5.0).fraction, 2.0);
    }

    #[test]
    fn containment() {
        let bp = Breakpoints::linspace(16.0, 32.0, 3).unwrap();
        assert!(bp.spans(16.0));
        assert!(bp.spans(32.0));
        assert!(!bp.spans(33.0));
        assert_relative_eq!(bp.min(), 16.0);
        assert_relative_eq!(bp.max(), 32.0);
    }
}
