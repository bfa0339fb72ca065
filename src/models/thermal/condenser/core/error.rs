use std::fmt;

use thiserror::Error;
use uom::si::f64::{HeatTransfer, Length};

use crate::support::constraint::ConstraintError;

use super::CondenserInputVar;

/// Cylindrical layer of the condenser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Container wall, from `r_i` out to `D_od / 2`.
    Wall,
    /// Wick, from `D_v / 2` out to `r_i`.
    Wick,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wall => f.write_str("wall"),
            Self::Wick => f.write_str("wick"),
        }
    }
}

/// Errors that can occur while evaluating the condenser at a single node.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CondenserError {
    /// An input is outside its physical range.
    #[error("invalid {input}: {source}")]
    InvalidInput {
        input: CondenserInputVar,
        #[source]
        source: ConstraintError,
    },

    /// A layer has zero or negative thickness.
    #[error("{layer} outer radius {outer:?} must exceed inner radius {inner:?}")]
    Geometry {
        layer: Layer,
        outer: Length,
        inner: Length,
    },

    /// The vapor pressure term makes condensation non-physical.
    ///
    /// Occurs when `P_v · v_fg ≥ 2 · h_fg`.
    #[error("interfacial heat transfer coefficient must be positive: {h_interface:?}")]
    NonPositiveInterfaceCoefficient { h_interface: HeatTransfer },
}
