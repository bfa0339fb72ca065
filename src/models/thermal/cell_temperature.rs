//! Metamodel of neighbor-cell temperatures in a battery pack thermal runaway.
//!
//! [`CellTemperatureMetamodel`] interpolates tabulated simulation results to
//! predict the peak temperature of the second and third cells next to a cell
//! in thermal runaway, for a batch of `N` design points.
//!
//! # Example
//!
//! ```
//! use heatpipe_models::models::thermal::cell_temperature::{
//!     CellTemperatureConfig, CellTemperatureInput, CellTemperatureInputVar,
//!     CellTemperatureMetamodel, CellTemperatureOutputVar, TrainingData,
//! };
//! use ndarray::{ArrayD, IxDyn};
//! use uom::si::{
//!     energy::kilojoule,
//!     f64::{Energy, Length, Ratio},
//!     length::millimeter,
//!     ratio::ratio,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! let config = CellTemperatureConfig::default();
//! let cell2 = ArrayD::from_elem(IxDyn(&[3, 6, 4]), 650.0);
//! let cell3 = ArrayD::from_elem(IxDyn(&[3, 6, 4]), 420.0);
//! let data = TrainingData::from_arrays(&config, cell2, cell3).unwrap();
//!
//! let model = CellTemperatureMetamodel::<1>::new(data, config.extrapolation);
//! let input = CellTemperatureInput {
//!     energy: Energy::new::<kilojoule>(20.0),
//!     extra: Length::new::<millimeter>(1.5),
//!     ratio: Ratio::new::<ratio>(0.5),
//! };
//!
//! let [output] = model.compute(&[input]).unwrap();
//! assert!((output.cell2.get::<kelvin>() - 650.0).abs() < 1e-9);
//!
//! let jacobian = model.compute_partials(&[input]).unwrap();
//! let slope = jacobian
//!     .get(CellTemperatureOutputVar::Cell3, CellTemperatureInputVar::Energy, 0)
//!     .unwrap();
//! assert!(slope.abs() < 1e-9);
//! ```

pub(crate) mod core;

pub use self::core::{
    AxisRange, CellTemperatureConfig, CellTemperatureError, CellTemperatureInput,
    CellTemperatureInputVar, CellTemperatureOutput, CellTemperatureOutputVar, Sentinel,
    TableConfig, TrainingData, TrainingDataError, declared_partials,
};

use std::path::Path;

use twine_core::Model;

use crate::support::{interp::Extrapolation, partials::DiagonalJacobian};

use self::core::{NodeEvaluation, evaluate};

/// Jacobian of [`CellTemperatureMetamodel`] over a batch of `N` nodes.
///
/// Entries are in K per kJ, K per mm, and K per unit ratio.
pub type CellTemperatureJacobian<const N: usize> =
    DiagonalJacobian<CellTemperatureOutputVar, CellTemperatureInputVar, N>;

/// Cell temperature metamodel over a batch of `N` design points.
///
/// # Minimum Node Count
///
/// The node count `N` must be at least 1.
/// This constraint is enforced at compile time via const assertions.
#[derive(Debug, Clone)]
pub struct CellTemperatureMetamodel<const N: usize> {
    data: TrainingData,
    extrapolation: Extrapolation,
}

impl<const N: usize> CellTemperatureMetamodel<N> {
    /// Creates a metamodel from prepared training data.
    #[must_use]
    pub fn new(data: TrainingData, extrapolation: Extrapolation) -> Self {
        const {
            assert!(N >= 1, "cell temperature batch requires at least 1 node");
        };

        Self {
            data,
            extrapolation,
        }
    }

    /// Loads the training tables from `dir` and creates a metamodel.
    ///
    /// # Errors
    ///
    /// Returns a [`TrainingDataError`] if the tables cannot be read or do not
    /// fit the configured grid.
    pub fn load(
        config: &CellTemperatureConfig,
        dir: impl AsRef<Path>,
    ) -> Result<Self, TrainingDataError> {
        let data = TrainingData::load(config, dir)?;
        Ok(Self::new(data, config.extrapolation))
    }

    /// Returns the training data.
    #[must_use]
    pub fn data(&self) -> &TrainingData {
        &self.data
    }

    /// Predicts both cell temperatures at every node.
    ///
    /// # Errors
    ///
    /// Returns a [`CellTemperatureError`] for the first node with a NaN input,
    /// or with an input outside the grid while extrapolation is disabled.
    pub fn compute(
        &self,
        inputs: &[CellTemperatureInput; N],
    ) -> Result<[CellTemperatureOutput; N], CellTemperatureError> {
        let nodes = self.evaluate_nodes(inputs)?;
        Ok(std::array::from_fn(|node| nodes[node].output()))
    }

    /// Computes the partial derivatives of both outputs at every node.
    ///
    /// Every output depends on every input, so all six blocks are declared.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`CellTemperatureMetamodel::compute`].
    pub fn compute_partials(
        &self,
        inputs: &[CellTemperatureInput; N],
    ) -> Result<CellTemperatureJacobian<N>, CellTemperatureError> {
        let nodes = self.evaluate_nodes(inputs)?;
        Ok(DiagonalJacobian::from_fn(
            declared_partials(),
            |of, wrt, node| nodes[node].partial(of, wrt),
        ))
    }

    fn evaluate_nodes(
        &self,
        inputs: &[CellTemperatureInput],
    ) -> Result<Vec<NodeEvaluation>, CellTemperatureError> {
        inputs
            .iter()
            .enumerate()
            .map(|(node, input)| {
                evaluate(&self.data, input, self.extrapolation)
                    .map_err(|source| CellTemperatureError { node, source })
            })
            .collect()
    }
}

impl<const N: usize> Model for CellTemperatureMetamodel<N> {
    type Input = [CellTemperatureInput; N];
    type Output = [CellTemperatureOutput; N];
    type Error = CellTemperatureError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.compute(input)
    }
}
