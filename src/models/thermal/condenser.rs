//! Heat pipe condenser thermal resistance.
//!
//! [`CondenserResistance`] evaluates a batch of `N` condenser operating points
//! and supplies the exact Jacobian needed by gradient-based optimizers.
//! Node `i` outputs depend only on node `i` inputs, so every declared block of
//! the Jacobian is diagonal.
//!
//! # Example
//!
//! ```
//! use std::f64::consts::PI;
//!
//! use heatpipe_models::models::thermal::condenser::{
//!     AccommodationCoefficient, CondenserInput, CondenserInputVar, CondenserOutputVar,
//!     CondenserResistance,
//! };
//! use heatpipe_models::support::units::{KelvinPerWatt, SpecificEnthalpy, SpecificGasConstant};
//! use uom::si::{
//!     area::square_meter,
//!     available_energy::joule_per_kilogram,
//!     f64::{Area, Length, Pressure, SpecificVolume, ThermalConductivity, ThermodynamicTemperature},
//!     length::millimeter,
//!     pressure::pascal,
//!     specific_heat_capacity::joule_per_kilogram_kelvin,
//!     specific_volume::cubic_meter_per_kilogram,
//!     thermal_conductivity::watt_per_meter_kelvin,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! let input = CondenserInput {
//!     accommodation: AccommodationCoefficient::unity(),
//!     latent_heat: SpecificEnthalpy::new::<joule_per_kilogram>(2.382e6),
//!     temperature: ThermodynamicTemperature::new::<kelvin>(323.15),
//!     specific_volume: SpecificVolume::new::<cubic_meter_per_kilogram>(12.03),
//!     gas_constant: SpecificGasConstant::new::<joule_per_kilogram_kelvin>(461.5),
//!     vapor_pressure: Pressure::new::<pascal>(12_350.0),
//!     outer_diameter: Length::new::<millimeter>(6.0),
//!     inner_radius: Length::new::<millimeter>(2.5),
//!     wall_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(11.4),
//!     length: Length::new::<millimeter>(20.0),
//!     vapor_diameter: Length::new::<millimeter>(3.6),
//!     wick_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(1.5),
//!     interface_area: Area::new::<square_meter>(PI * 0.0036 * 0.02),
//! };
//!
//! let outputs = CondenserResistance::<2>::compute(&[input, input]).unwrap();
//! assert!(outputs[0].total_resistance().kelvin_per_watt() > 0.0);
//!
//! let jacobian = CondenserResistance::<2>::compute_partials(&[input, input]).unwrap();
//! let d_rwc_d_kw = jacobian
//!     .diagonal(CondenserOutputVar::WallResistance, CondenserInputVar::WallConductivity)
//!     .unwrap();
//! assert!(d_rwc_d_kw.iter().all(|d| *d < 0.0));
//! ```

pub(crate) mod core;

pub use self::core::{
    AccommodationCoefficient, CondenserError, CondenserInput, CondenserInputVar,
    CondenserOutput, CondenserOutputVar, Layer, declared_partials,
};

use thiserror::Error;
use twine_core::Model;

use crate::support::partials::DiagonalJacobian;

use self::core::{evaluate_outputs, evaluate_partials};

/// Jacobian of [`CondenserResistance`] over a batch of `N` nodes.
pub type CondenserJacobian<const N: usize> =
    DiagonalJacobian<CondenserOutputVar, CondenserInputVar, N>;

/// Error raised when any node of a batch fails to evaluate.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("condenser evaluation failed at node {node}")]
pub struct CondenserResistanceError {
    /// Index of the first failing node.
    pub node: usize,

    /// Underlying node error.
    #[source]
    pub source: CondenserError,
}

/// Condenser thermal resistance over a batch of `N` operating points.
///
/// # Minimum Node Count
///
/// The node count `N` must be at least 1.
/// This constraint is enforced at compile time via const assertions.
#[derive(Debug, Clone, Copy, Default)]
pub struct CondenserResistance<const N: usize>;

impl<const N: usize> CondenserResistance<N> {
    /// Computes the interface coefficient and layer resistances at every node.
    ///
    /// # Errors
    ///
    /// Returns a [`CondenserResistanceError`] for the first node whose inputs
    /// are out of range or non-physical.
    pub fn compute(
        inputs: &[CondenserInput; N],
    ) -> Result<[CondenserOutput; N], CondenserResistanceError> {
        const {
            assert!(N >= 1, "condenser batch requires at least 1 node");
        };

        let outputs = evaluate_nodes(inputs, evaluate_outputs)?;
        Ok(std::array::from_fn(|node| outputs[node]))
    }

    /// Computes the declared partial derivatives at every node.
    ///
    /// The returned Jacobian declares exactly the pairs yielded by
    /// [`declared_partials`], each as a diagonal block.
    ///
    /// # Errors
    ///
    /// Returns a [`CondenserResistanceError`] for the first node whose inputs
    /// are out of range or non-physical.
    pub fn compute_partials(
        inputs: &[CondenserInput; N],
    ) -> Result<CondenserJacobian<N>, CondenserResistanceError> {
        const {
            assert!(N >= 1, "condenser batch requires at least 1 node");
        };

        let partials = evaluate_nodes(inputs, evaluate_partials)?;
        Ok(DiagonalJacobian::from_fn(
            declared_partials(),
            |of, wrt, node| partials[node].get(of, wrt),
        ))
    }
}

fn evaluate_nodes<T>(
    inputs: &[CondenserInput],
    evaluate: impl Fn(&CondenserInput) -> Result<T, CondenserError>,
) -> Result<Vec<T>, CondenserResistanceError> {
    inputs
        .iter()
        .enumerate()
        .map(|(node, input)| {
            evaluate(input).map_err(|source| CondenserResistanceError { node, source })
        })
        .collect()
}

impl<const N: usize> Model for CondenserResistance<N> {
    type Input = [CondenserInput; N];
    type Output = [CondenserOutput; N];
    type Error = CondenserResistanceError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Self::compute(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::{constraint::ConstraintError, units::KelvinPerWatt};

    use super::core::test_support::water_condenser;

    fn batch() -> [CondenserInput; 3] {
        let base = water_condenser();
        [
            base,
            base.with_value(CondenserInputVar::Length, 0.04).unwrap(),
            base.with_value(CondenserInputVar::Alpha, 0.5).unwrap(),
        ]
    }

    #[test]
    fn nodes_are_independent() {
        let inputs = batch();
        let outputs = CondenserResistance::<3>::compute(&inputs).unwrap();

        for (input, output) in inputs.iter().zip(&outputs) {
            let single = CondenserResistance::<1>::compute(&[*input]).unwrap();
            assert_eq!(single[0], *output);
        }

        // Doubling the length halves both conduction resistances.
        assert_relative_eq!(
            outputs[1].wall_resistance.kelvin_per_watt(),
            0.5 * outputs[0].wall_resistance.kelvin_per_watt(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            outputs[1].wick_resistance.kelvin_per_watt(),
            0.5 * outputs[0].wick_resistance.kelvin_per_watt(),
            max_relative = 1e-12
        );

        // Halving alpha from 1 scales 2a/(2-a) from 2 to 2/3.
        assert_relative_eq!(
            outputs[2].value(CondenserOutputVar::InterfaceCoefficient),
            outputs[0].value(CondenserOutputVar::InterfaceCoefficient) / 3.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn jacobian_declares_diagonal_blocks() {
        let jacobian = CondenserResistance::<3>::compute_partials(&batch()).unwrap();

        assert_eq!(jacobian.len(), 21);
        assert!(jacobian.is_declared(
            CondenserOutputVar::InterfaceResistance,
            CondenserInputVar::InterfaceArea
        ));
        assert!(!jacobian.is_declared(
            CondenserOutputVar::WallResistance,
            CondenserInputVar::WickConductivity
        ));
        assert!(!jacobian.is_declared(
            CondenserOutputVar::InterfaceCoefficient,
            CondenserInputVar::InterfaceArea
        ));

        let dense = jacobian
            .dense(CondenserOutputVar::WickResistance, CondenserInputVar::Length)
            .unwrap();
        assert_eq!(dense.dim(), (3, 3));
        for row in 0..3 {
            for col in 0..3 {
                if row == col {
                    assert!(dense[[row, col]] < 0.0);
                } else {
                    assert_eq!(dense[[row, col]], 0.0);
                }
            }
        }
    }

    #[test]
    fn jacobian_matches_single_node_partials() {
        let inputs = batch();
        let jacobian = CondenserResistance::<3>::compute_partials(&inputs).unwrap();

        for (node, input) in inputs.iter().enumerate() {
            let single = CondenserResistance::<1>::compute_partials(&[*input]).unwrap();
            for (of, wrt) in declared_partials() {
                assert_eq!(jacobian.get(of, wrt, node), single.get(of, wrt, 0));
            }
        }
    }

    #[test]
    fn model_call_delegates_to_compute() {
        let inputs = batch();
        let model = CondenserResistance::<3>;

        assert_eq!(
            model.call(&inputs).unwrap(),
            CondenserResistance::<3>::compute(&inputs).unwrap()
        );
    }

    #[test]
    fn reports_failing_node() {
        let mut inputs = batch();
        inputs[2] = inputs[2]
            .with_value(CondenserInputVar::GasConstant, -461.5)
            .unwrap();

        let err = CondenserResistance::<3>::compute(&inputs).unwrap_err();
        assert_eq!(
            err,
            CondenserResistanceError {
                node: 2,
                source: CondenserError::InvalidInput {
                    input: CondenserInputVar::GasConstant,
                    source: ConstraintError::Negative,
                },
            }
        );
        assert_eq!(
            CondenserResistance::<3>::compute_partials(&inputs).unwrap_err(),
            err
        );
    }
}
