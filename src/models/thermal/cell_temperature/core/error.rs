use std::path::PathBuf;

use ndarray_npy::ReadNpyError;
use thiserror::Error;

use crate::support::interp::InterpError;

use super::{CellTemperatureInputVar, CellTemperatureOutputVar};

/// Errors that can occur while loading or validating training data.
#[derive(Debug, Error)]
pub enum TrainingDataError {
    /// An axis range does not produce valid breakpoints.
    #[error("invalid {input} breakpoints")]
    Axis {
        input: CellTemperatureInputVar,
        #[source]
        source: InterpError,
    },

    /// A training table could not be read.
    #[error("failed to read {table} training data from {}", .path.display())]
    Read {
        table: CellTemperatureOutputVar,
        path: PathBuf,
        #[source]
        source: ReadNpyError,
    },

    /// A training table does not fit the configured grid.
    #[error("invalid {table} training table")]
    Grid {
        table: CellTemperatureOutputVar,
        #[source]
        source: InterpError,
    },

    /// A training table contains NaN or an infinite value after cleaning.
    #[error("{table} training data is not finite at index {index:?}")]
    NonFinite {
        table: CellTemperatureOutputVar,
        index: Vec<usize>,
    },
}

/// Error raised when any node of a batch fails to evaluate.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("cell temperature evaluation failed at node {node}")]
pub struct CellTemperatureError {
    /// Index of the first failing node.
    pub node: usize,

    #[source]
    pub source: InterpError,
}
