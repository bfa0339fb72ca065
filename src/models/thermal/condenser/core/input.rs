use std::ops::Deref;

use uom::si::{
    area::square_meter,
    available_energy::joule_per_kilogram,
    f64::{
        Area, Length, Pressure, Ratio, SpecificVolume, ThermalConductivity,
        ThermodynamicTemperature,
    },
    length::meter,
    pressure::pascal,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    specific_volume::cubic_meter_per_kilogram,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{
        Constrained, Constraint, ConstraintError, ConstraintResult, NonNegative, StrictlyPositive,
        UnitIntervalLowerOpen,
    },
    units::{SpecificEnthalpy, SpecificGasConstant},
};

use super::{
    CondenserError, CondenserInputVar, Layer, conduction::CylindricalShell,
    interface::InterfaceState,
};

/// Thermal accommodation coefficient of the wick/vapor interface.
///
/// The fraction of vapor molecules striking the interface that condense.
/// Typical values range from 0.01 to 1; the value must lie in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccommodationCoefficient(Constrained<Ratio, UnitIntervalLowerOpen>);

impl AccommodationCoefficient {
    /// Create an [`AccommodationCoefficient`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside the interval (0, 1].
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<ratio>(value))
    }

    /// Create an [`AccommodationCoefficient`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity lies outside the interval (0, 1].
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(UnitIntervalLowerOpen::new(quantity)?))
    }

    /// Full accommodation: every molecule striking the interface condenses.
    #[must_use]
    pub fn unity() -> Self {
        Self(UnitIntervalLowerOpen::one())
    }
}

impl Deref for AccommodationCoefficient {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Operating point of a heat pipe condenser.
///
/// The condenser is a cylindrical wall (outer diameter `D_od`, inner radius
/// `r_i`) lined with a wick that surrounds a vapor core of diameter `D_v`.
/// Heat released by condensation at the wick/vapor interface crosses the
/// interface, the wick, and the wall in series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CondenserInput {
    /// `alpha`: thermal accommodation coefficient.
    pub accommodation: AccommodationCoefficient,
    /// `h_fg`: latent heat of vaporization.
    pub latent_heat: SpecificEnthalpy,
    /// `T_hp`: heat pipe vapor temperature.
    pub temperature: ThermodynamicTemperature,
    /// `v_fg`: specific volume.
    pub specific_volume: SpecificVolume,
    /// `R_g`: gas constant of the vapor.
    pub gas_constant: SpecificGasConstant,
    /// `P_v`: vapor pressure.
    pub vapor_pressure: Pressure,
    /// `D_od`: wall outer diameter.
    pub outer_diameter: Length,
    /// `r_i`: wall inner radius.
    pub inner_radius: Length,
    /// `k_w`: wall thermal conductivity.
    pub wall_conductivity: ThermalConductivity,
    /// `L_cond`: condenser length.
    pub length: Length,
    /// `D_v`: vapor core diameter.
    pub vapor_diameter: Length,
    /// `k_wk`: wick thermal conductivity.
    pub wick_conductivity: ThermalConductivity,
    /// `A_interc`: wick/vapor interface area of the condenser.
    pub interface_area: Area,
}

impl CondenserInput {
    /// Returns the value of `input` in SI base units.
    #[must_use]
    pub fn value(&self, input: CondenserInputVar) -> f64 {
        match input {
            CondenserInputVar::Alpha => self.accommodation.get::<ratio>(),
            CondenserInputVar::LatentHeat => self.latent_heat.get::<joule_per_kilogram>(),
            CondenserInputVar::Temperature => self.temperature.get::<kelvin>(),
            CondenserInputVar::SpecificVolume => {
                self.specific_volume.get::<cubic_meter_per_kilogram>()
            }
            CondenserInputVar::GasConstant => {
                self.gas_constant.get::<joule_per_kilogram_kelvin>()
            }
            CondenserInputVar::VaporPressure => self.vapor_pressure.get::<pascal>(),
            CondenserInputVar::OuterDiameter => self.outer_diameter.get::<meter>(),
            CondenserInputVar::InnerRadius => self.inner_radius.get::<meter>(),
            CondenserInputVar::WallConductivity => {
                self.wall_conductivity.get::<watt_per_meter_kelvin>()
            }
            CondenserInputVar::Length => self.length.get::<meter>(),
            CondenserInputVar::VaporDiameter => self.vapor_diameter.get::<meter>(),
            CondenserInputVar::WickConductivity => {
                self.wick_conductivity.get::<watt_per_meter_kelvin>()
            }
            CondenserInputVar::InterfaceArea => self.interface_area.get::<square_meter>(),
        }
    }

    /// Returns a copy with `input` set to `value` in SI base units.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `input` is [`CondenserInputVar::Alpha`] and `value`
    /// lies outside (0, 1]. Other inputs are checked on evaluation.
    pub fn with_value(mut self, input: CondenserInputVar, value: f64) -> ConstraintResult<Self> {
        match input {
            CondenserInputVar::Alpha => self.accommodation = AccommodationCoefficient::new(value)?,
            CondenserInputVar::LatentHeat => {
                self.latent_heat = SpecificEnthalpy::new::<joule_per_kilogram>(value);
            }
            CondenserInputVar::Temperature => {
                self.temperature = ThermodynamicTemperature::new::<kelvin>(value);
            }
            CondenserInputVar::SpecificVolume => {
                self.specific_volume = SpecificVolume::new::<cubic_meter_per_kilogram>(value);
            }
            CondenserInputVar::GasConstant => {
                self.gas_constant = SpecificGasConstant::new::<joule_per_kilogram_kelvin>(value);
            }
            CondenserInputVar::VaporPressure => {
                self.vapor_pressure = Pressure::new::<pascal>(value);
            }
            CondenserInputVar::OuterDiameter => self.outer_diameter = Length::new::<meter>(value),
            CondenserInputVar::InnerRadius => self.inner_radius = Length::new::<meter>(value),
            CondenserInputVar::WallConductivity => {
                self.wall_conductivity = ThermalConductivity::new::<watt_per_meter_kelvin>(value);
            }
            CondenserInputVar::Length => self.length = Length::new::<meter>(value),
            CondenserInputVar::VaporDiameter => self.vapor_diameter = Length::new::<meter>(value),
            CondenserInputVar::WickConductivity => {
                self.wick_conductivity = ThermalConductivity::new::<watt_per_meter_kelvin>(value);
            }
            CondenserInputVar::InterfaceArea => {
                self.interface_area = Area::new::<square_meter>(value);
            }
        }
        Ok(self)
    }

    /// Checks input ranges and layer geometry.
    ///
    /// # Errors
    ///
    /// Returns [`CondenserError::InvalidInput`] for the first infinite or
    /// out-of-range input, or [`CondenserError::Geometry`] if `D_v / 2 < r_i < D_od / 2`
    /// does not hold.
    pub(super) fn validate(&self) -> Result<(), CondenserError> {
        for input in CondenserInputVar::ALL {
            let value = self.value(input);
            let checked = match input {
                _ if value.is_infinite() => Err(ConstraintError::NotFinite),
                // Enforced by `AccommodationCoefficient`.
                CondenserInputVar::Alpha => Ok(()),
                CondenserInputVar::VaporPressure => NonNegative::check(&value),
                _ => StrictlyPositive::check(&value),
            };
            checked.map_err(|source| CondenserError::InvalidInput { input, source })?;
        }

        let wall_outer = self.outer_diameter / 2.0;
        if wall_outer <= self.inner_radius {
            return Err(CondenserError::Geometry {
                layer: Layer::Wall,
                outer: wall_outer,
                inner: self.inner_radius,
            });
        }

        let wick_inner = self.vapor_diameter / 2.0;
        if self.inner_radius <= wick_inner {
            return Err(CondenserError::Geometry {
                layer: Layer::Wick,
                outer: self.inner_radius,
                inner: wick_inner,
            });
        }

        Ok(())
    }

    pub(super) fn interface(&self) -> InterfaceState {
        InterfaceState {
            alpha: self.value(CondenserInputVar::Alpha),
            latent_heat: self.value(CondenserInputVar::LatentHeat),
            temperature: self.value(CondenserInputVar::Temperature),
            specific_volume: self.value(CondenserInputVar::SpecificVolume),
            gas_constant: self.value(CondenserInputVar::GasConstant),
            vapor_pressure: self.value(CondenserInputVar::VaporPressure),
        }
    }

    pub(super) fn wall(&self) -> CylindricalShell {
        CylindricalShell {
            outer_radius: 0.5 * self.value(CondenserInputVar::OuterDiameter),
            inner_radius: self.value(CondenserInputVar::InnerRadius),
            conductivity: self.value(CondenserInputVar::WallConductivity),
            length: self.value(CondenserInputVar::Length),
        }
    }

    pub(super) fn wick(&self) -> CylindricalShell {
        CylindricalShell {
            outer_radius: self.value(CondenserInputVar::InnerRadius),
            inner_radius: 0.5 * self.value(CondenserInputVar::VaporDiameter),
            conductivity: self.value(CondenserInputVar::WickConductivity),
            length: self.value(CondenserInputVar::Length),
        }
    }
}
