//! Linear interpolation on structured grids of training data.
//!
//! Surrogate models in this crate are tables of simulation results sampled on
//! a rectilinear grid: one strictly increasing [`Breakpoints`] axis per input
//! and an N-dimensional array of values. [`StructuredGrid::evaluate`] performs
//! piecewise multilinear ("slinear") interpolation and returns the gradient of
//! the interpolant alongside the value.
//!
//! # Example
//!
//! ```
//! use heatpipe_models::support::interp::{Breakpoints, Extrapolation, StructuredGrid};
//! use ndarray::array;
//!
//! let x = Breakpoints::linspace(0.0, 1.0, 2).unwrap();
//! let y = Breakpoints::new(vec![0.0, 2.0]).unwrap();
//! let values = array![[0.0, 2.0], [1.0, 3.0]].into_dyn(); // v = x + y
//!
//! let grid = StructuredGrid::new(vec![x, y], values).unwrap();
//! let eval = grid.evaluate(&[0.5, 1.0], Extrapolation::Enabled).unwrap();
//!
//! assert!((eval.value - 1.5).abs() < 1e-12);
//! assert!((eval.gradient[0] - 1.0).abs() < 1e-12);
//! assert!((eval.gradient[1] - 1.0).abs() < 1e-12);
//! ```

mod breakpoints;
mod error;
mod grid;

pub use breakpoints::Breakpoints;
pub use error::InterpError;
pub use grid::{Evaluation, Extrapolation, StructuredGrid};
