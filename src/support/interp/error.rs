use thiserror::Error;

/// Errors that can occur while building or evaluating a structured grid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpError {
    /// An axis has no breakpoints.
    #[error("axis must have at least one breakpoint")]
    EmptyAxis,

    /// Breakpoints are not finite and strictly increasing.
    #[error("breakpoints must be finite and strictly increasing (index {index})")]
    NotIncreasing {
        /// Index of the first offending breakpoint.
        index: usize,
    },

    /// The value array shape does not match the axis lengths.
    #[error("value shape {actual:?} does not match breakpoint lengths {expected:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// A point has the wrong number of coordinates.
    #[error("point has {actual} coordinates but grid has {expected} axes")]
    Dimension { expected: usize, actual: usize },

    /// A coordinate is not a number.
    #[error("coordinate on axis {axis} is not a number")]
    NotANumber { axis: usize },

    /// A coordinate is infinite.
    #[error("coordinate on axis {axis} is not finite")]
    NotFinite { axis: usize },

    /// A coordinate lies outside its axis and extrapolation is disabled.
    #[error("coordinate {value} on axis {axis} is outside [{min}, {max}]")]
    OutOfBounds {
        axis: usize,
        value: f64,
        min: f64,
        max: f64,
    },
}
