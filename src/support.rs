//! Supporting utilities used by models.
//!
//! - [`constraint`]: Validated numeric values.
//! - [`interp`]: Linear interpolation on structured grids of training data.
//! - [`partials`]: Sparse Jacobians with diagonal blocks over a batch of nodes.
//! - [`units`]: Extensions to [`uom`].

pub mod constraint;
pub mod interp;
pub mod partials;
pub mod units;
