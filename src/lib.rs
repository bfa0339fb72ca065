//! # Heat Pipe Models
//!
//! Thermal models for heat-pipe cooled battery packs, written as
//! [`twine_core::Model`] implementations that also expose exact partial
//! derivatives for gradient-based design optimization.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Batches and partials
//!
//! Every model evaluates a fixed-size batch of `N` independent operating
//! points (nodes). Outputs at node `i` depend only on inputs at node `i`, so
//! each declared Jacobian block is diagonal. See
//! [`support::partials::DiagonalJacobian`].
//!
//! Note: Modules in [`support`] are part of the public API because they're
//! useful, but their APIs are not stable.

pub mod models;
pub mod support;
