//! Condenser thermal resistance network of a heat pipe.
//!
//! Heat released at the wick/vapor interface reaches the outer wall surface
//! through three resistances in series:
//!
//! - the interface itself, `R_interc = 1 / (h_interc · A_interc)`,
//! - conduction through the saturated wick, `R_wkc`,
//! - conduction through the container wall, `R_wc`.
//!
//! Every output comes with exact partial derivatives with respect to the
//! inputs it depends on (see [`CondenserOutputVar::dependencies`]).

mod conduction;
mod error;
mod input;
mod interface;
mod output;
mod partials;
mod variables;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{CondenserError, Layer};
pub use input::{AccommodationCoefficient, CondenserInput};
pub use output::CondenserOutput;
pub use variables::{CondenserInputVar, CondenserOutputVar, declared_partials};

pub(crate) use partials::CondenserPartials;

use uom::si::{f64::HeatTransfer, heat_transfer::watt_per_square_meter_kelvin};

use crate::support::units::{KelvinPerWatt, ThermalResistance};

/// Validated interface coefficient for a node.
///
/// # Errors
///
/// Returns [`CondenserError::NonPositiveInterfaceCoefficient`] when the vapor
/// pressure term cancels condensation.
fn interface_coefficient(input: &CondenserInput) -> Result<f64, CondenserError> {
    let h = input.interface().coefficient();
    if h > 0.0 {
        Ok(h)
    } else {
        Err(CondenserError::NonPositiveInterfaceCoefficient {
            h_interface: HeatTransfer::new::<watt_per_square_meter_kelvin>(h),
        })
    }
}

/// Evaluates the condenser outputs at a single node.
///
/// # Errors
///
/// Returns a [`CondenserError`] if the input is out of range, the layer
/// geometry is inverted, or the interface coefficient is not positive.
pub(crate) fn evaluate_outputs(input: &CondenserInput) -> Result<CondenserOutput, CondenserError> {
    input.validate()?;

    let h = interface_coefficient(input)?;
    let area = input.value(CondenserInputVar::InterfaceArea);

    Ok(CondenserOutput {
        interface_coefficient: HeatTransfer::new::<watt_per_square_meter_kelvin>(h),
        wall_resistance: ThermalResistance::from_kelvin_per_watt(input.wall().resistance()),
        wick_resistance: ThermalResistance::from_kelvin_per_watt(input.wick().resistance()),
        interface_resistance: ThermalResistance::from_kelvin_per_watt((h * area).recip()),
    })
}

/// Evaluates the condenser partial derivatives at a single node.
///
/// # Errors
///
/// Returns the same errors as [`evaluate_outputs`].
pub(crate) fn evaluate_partials(
    input: &CondenserInput,
) -> Result<CondenserPartials, CondenserError> {
    input.validate()?;

    let h = interface_coefficient(input)?;
    let area = input.value(CondenserInputVar::InterfaceArea);

    Ok(CondenserPartials {
        interface: input.interface().gradient(),
        wall: input.wall().gradient(),
        wick: input.wick().gradient(),
        resistance_per_coefficient: -1.0 / (h * h * area),
        resistance_per_area: -1.0 / (h * area * area),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use approx::assert_relative_eq;
    use uom::si::{f64::HeatTransfer, heat_transfer::watt_per_square_meter_kelvin};

    use crate::support::constraint::ConstraintError;

    use super::test_support::water_condenser;

    #[test]
    fn water_condenser_outputs() {
        let out = evaluate_outputs(&water_condenser()).unwrap();

        assert_relative_eq!(
            out.interface_coefficient
                .get::<watt_per_square_meter_kelvin>(),
            2_921_502.243_339_593,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            out.wall_resistance.kelvin_per_watt(),
            0.127_269_197_350_735_1,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            out.wick_resistance.kelvin_per_watt(),
            1.742_768_202_813_019_6,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            out.interface_resistance.kelvin_per_watt(),
            0.001_513_252_523_259_366,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            out.total_resistance().kelvin_per_watt(),
            0.127_269_197_350_735_1 + 1.742_768_202_813_019_6 + 0.001_513_252_523_259_366,
            max_relative = 1e-12
        );
    }

    /// Central differences in SI base units, stepping each input by a
    /// relative `1e-6`.
    fn finite_difference(
        input: &CondenserInput,
        of: CondenserOutputVar,
        wrt: CondenserInputVar,
    ) -> f64 {
        let x = input.value(wrt);
        let step = 1e-6 * x;
        let plus = input.with_value(wrt, x + step).unwrap();
        let minus = input.with_value(wrt, x - step).unwrap();

        let f_plus = evaluate_outputs(&plus).unwrap().value(of);
        let f_minus = evaluate_outputs(&minus).unwrap().value(of);
        (f_plus - f_minus) / (2.0 * step)
    }

    #[test]
    fn declared_partials_match_finite_differences() {
        let input = water_condenser()
            .with_value(CondenserInputVar::Alpha, 0.9)
            .unwrap();
        let partials = evaluate_partials(&input).unwrap();

        for (of, wrt) in declared_partials() {
            let analytic = partials.get(of, wrt);
            let numeric = finite_difference(&input, of, wrt);
            assert_relative_eq!(analytic, numeric, max_relative = 1e-6);
        }
    }

    #[test]
    fn undeclared_partials_are_zero() {
        let input = water_condenser();
        let partials = evaluate_partials(&input).unwrap();

        for of in CondenserOutputVar::ALL {
            for wrt in CondenserInputVar::ALL {
                if of.dependencies().contains(&wrt) {
                    continue;
                }
                assert_eq!(partials.get(of, wrt), 0.0, "{of} wrt {wrt}");
            }
        }
    }

    #[test]
    fn wall_inner_radius_partial_is_exact() {
        let input = water_condenser();
        let partials = evaluate_partials(&input).unwrap();

        let r_i = 0.0025;
        let expected = -1.0 / (r_i * 2.0 * PI * 11.4 * 0.02);
        assert_relative_eq!(
            partials.get(CondenserOutputVar::WallResistance, CondenserInputVar::InnerRadius),
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn interface_resistance_chain_rule() {
        let input = water_condenser();
        let out = evaluate_outputs(&input).unwrap();
        let partials = evaluate_partials(&input).unwrap();

        let h = out.value(CondenserOutputVar::InterfaceCoefficient);
        let area = input.value(CondenserInputVar::InterfaceArea);

        let dh = partials.get(
            CondenserOutputVar::InterfaceCoefficient,
            CondenserInputVar::Temperature,
        );
        let dr = partials.get(
            CondenserOutputVar::InterfaceResistance,
            CondenserInputVar::Temperature,
        );
        assert_relative_eq!(dr, -dh / (h * h * area), max_relative = 1e-12);

        let dr_da = partials.get(
            CondenserOutputVar::InterfaceResistance,
            CondenserInputVar::InterfaceArea,
        );
        assert_relative_eq!(dr_da, -1.0 / (h * area * area), max_relative = 1e-12);
    }

    #[test]
    fn excessive_vapor_pressure_is_rejected() {
        // Beyond P_v · v_fg = 2 · h_fg the interface coefficient turns negative.
        let input = water_condenser()
            .with_value(CondenserInputVar::VaporPressure, 2.0 * 2.382e6 / 12.03 * 1.5)
            .unwrap();

        let err = evaluate_outputs(&input).unwrap_err();
        assert!(matches!(
            err,
            CondenserError::NonPositiveInterfaceCoefficient { h_interface }
                if h_interface < HeatTransfer::new::<watt_per_square_meter_kelvin>(0.0)
        ));
        assert!(evaluate_partials(&input).is_err());
    }

    #[test]
    fn infinite_inputs_are_rejected() {
        for wrt in [CondenserInputVar::LatentHeat, CondenserInputVar::OuterDiameter] {
            let input = water_condenser().with_value(wrt, f64::INFINITY).unwrap();
            let expected = CondenserError::InvalidInput {
                input: wrt,
                source: ConstraintError::NotFinite,
            };

            assert_eq!(evaluate_outputs(&input), Err(expected.clone()));
            assert_eq!(evaluate_partials(&input).map(|_| ()), Err(expected));
        }
    }
}
