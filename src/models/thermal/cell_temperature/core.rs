//! Peak temperatures of the cells next to a cell in thermal runaway.
//!
//! The metamodel interpolates two tables of simulation results over the grid
//! `(energy, extra, ratio)`. Failed simulation cases are stored as a marker
//! value and replaced by a conservative temperature when the tables are built
//! (see [`Sentinel`]).

mod config;
mod error;
mod input;
mod output;
mod training_data;
mod variables;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{AxisRange, CellTemperatureConfig, Sentinel, TableConfig};
pub use error::{CellTemperatureError, TrainingDataError};
pub use input::CellTemperatureInput;
pub use output::CellTemperatureOutput;
pub use training_data::TrainingData;
pub use variables::{CellTemperatureInputVar, CellTemperatureOutputVar, declared_partials};

use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use crate::support::interp::{Evaluation, Extrapolation, InterpError};

/// Interpolated temperatures and gradients at a single node.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NodeEvaluation {
    cell2: Evaluation,
    cell3: Evaluation,
}

impl NodeEvaluation {
    fn table(&self, var: CellTemperatureOutputVar) -> &Evaluation {
        match var {
            CellTemperatureOutputVar::Cell2 => &self.cell2,
            CellTemperatureOutputVar::Cell3 => &self.cell3,
        }
    }

    pub(crate) fn output(&self) -> CellTemperatureOutput {
        CellTemperatureOutput {
            cell2: ThermodynamicTemperature::new::<kelvin>(self.cell2.value),
            cell3: ThermodynamicTemperature::new::<kelvin>(self.cell3.value),
        }
    }

    /// Partial of `of` with respect to `wrt`, in K per grid unit of `wrt`.
    pub(crate) fn partial(&self, of: CellTemperatureOutputVar, wrt: CellTemperatureInputVar) -> f64 {
        self.table(of).gradient[wrt.axis()]
    }
}

/// Interpolates both tables at a single node.
///
/// # Errors
///
/// Returns an [`InterpError`] if an input is NaN, or out of range while
/// extrapolation is disabled.
pub(crate) fn evaluate(
    data: &TrainingData,
    input: &CellTemperatureInput,
    extrapolation: Extrapolation,
) -> Result<NodeEvaluation, InterpError> {
    let point = input.coordinates();

    Ok(NodeEvaluation {
        cell2: data
            .table(CellTemperatureOutputVar::Cell2)
            .evaluate(&point, extrapolation)?,
        cell3: data
            .table(CellTemperatureOutputVar::Cell3)
            .evaluate(&point, extrapolation)?,
    })
}
