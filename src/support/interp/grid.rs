use ndarray::ArrayD;

use super::{Breakpoints, InterpError};

/// Behavior for coordinates outside the breakpoint range of an axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Extrapolation {
    /// Continue the first or last segment linearly.
    #[default]
    Enabled,
    /// Reject the point with [`InterpError::OutOfBounds`].
    Disabled,
}

/// Interpolated value and its gradient with respect to each axis coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub value: f64,
    pub gradient: Vec<f64>,
}

/// Tabulated values on a rectilinear grid.
///
/// The value array has one dimension per axis, with the length of each
/// dimension equal to the number of breakpoints on that axis.
#[derive(Debug, Clone)]
pub struct StructuredGrid {
    axes: Vec<Breakpoints>,
    values: ArrayD<f64>,
}

impl StructuredGrid {
    /// Creates a grid from its axes and tabulated values.
    ///
    /// # Errors
    ///
    /// Returns [`InterpError::ShapeMismatch`] if the value shape does not
    /// match the breakpoint counts.
    pub fn new(axes: Vec<Breakpoints>, values: ArrayD<f64>) -> Result<Self, InterpError> {
        let expected: Vec<usize> = axes.iter().map(|axis| axis.len()).collect();
        if values.shape() != expected.as_slice() {
            return Err(InterpError::ShapeMismatch {
                expected,
                actual: values.shape().to_vec(),
            });
        }

        Ok(Self { axes, values })
    }

    /// Returns the grid axes.
    #[must_use]
    pub fn axes(&self) -> &[Breakpoints] {
        &self.axes
    }

    /// Returns the tabulated values.
    #[must_use]
    pub fn values(&self) -> &ArrayD<f64> {
        &self.values
    }

    /// Interpolates at `point` with piecewise multilinear interpolation.
    ///
    /// The gradient is exact for the interpolant. On an interior breakpoint it
    /// is the one-sided derivative of the segment that ends there, as in
    /// SciPy's `slinear` method.
    ///
    /// # Errors
    ///
    /// Returns an error if `point` has the wrong number of coordinates, any
    /// coordinate is NaN or infinite, or a coordinate is out of range while
    /// extrapolation is disabled.
    pub fn evaluate(
        &self,
        point: &[f64],
        extrapolation: Extrapolation,
    ) -> Result<Evaluation, InterpError> {
        if point.len() != self.axes.len() {
            return Err(InterpError::Dimension {
                expected: self.axes.len(),
                actual: point.len(),
            });
        }

        let segments = self
            .axes
            .iter()
            .zip(point)
            .enumerate()
            .map(|(axis, (breakpoints, &x))| {
                if x.is_nan() {
                    return Err(InterpError::NotANumber { axis });
                }
                if x.is_infinite() {
                    return Err(InterpError::NotFinite { axis });
                }
                if !breakpoints.spans(x) {
                    if extrapolation == Extrapolation::Disabled {
                        return Err(InterpError::OutOfBounds {
                            axis,
                            value: x,
                            min: breakpoints.min(),
                            max: breakpoints.max(),
                        });
                    }
                    log::trace!("extrapolating on axis {axis}: {x} outside breakpoints");
                }
                Ok(breakpoints.segment(x))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let ndim = segments.len();
        let mut value = 0.0;
        let mut gradient = vec![0.0; ndim];

        let mut index = vec![0; ndim];
        let mut weights = vec![0.0; ndim];
        let mut slopes = vec![0.0; ndim];

        // Each bit of `corner` selects the lower or upper breakpoint on one axis.
        for corner in 0..(1_usize << ndim) {
            for (axis, segment) in segments.iter().enumerate() {
                if (corner >> axis) & 1 == 1 {
                    index[axis] = segment.upper;
                    weights[axis] = segment.fraction;
                    slopes[axis] = segment.inv_width;
                } else {
                    index[axis] = segment.lower;
                    weights[axis] = 1.0 - segment.fraction;
                    slopes[axis] = -segment.inv_width;
                }
            }

            let corner_value = self.values[index.as_slice()];
            value += weights.iter().product::<f64>() * corner_value;

            for (axis, slope) in slopes.iter().enumerate() {
                let others: f64 = weights
                    .iter()
                    .enumerate()
                    .filter(|&(other, _)| other != axis)
                    .map(|(_, weight)| weight)
                    .product();
                gradient[axis] += others * slope * corner_value;
            }
        }

        Ok(Evaluation { value, gradient })
    }
}
