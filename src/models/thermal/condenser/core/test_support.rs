use std::f64::consts::PI;

use uom::si::{
    area::square_meter,
    available_energy::joule_per_kilogram,
    f64::{
        Area, Length, Pressure, SpecificVolume, ThermalConductivity, ThermodynamicTemperature,
    },
    length::millimeter,
    pressure::pascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    specific_volume::cubic_meter_per_kilogram,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::units::{SpecificEnthalpy, SpecificGasConstant};

use super::{AccommodationCoefficient, CondenserInput};

/// Water heat pipe with a stainless wall, condensing at 50 °C.
pub(crate) fn water_condenser() -> CondenserInput {
    CondenserInput {
        accommodation: AccommodationCoefficient::unity(),
        latent_heat: SpecificEnthalpy::new::<joule_per_kilogram>(2.382e6),
        temperature: ThermodynamicTemperature::new::<kelvin>(323.15),
        specific_volume: SpecificVolume::new::<cubic_meter_per_kilogram>(12.03),
        gas_constant: SpecificGasConstant::new::<joule_per_kilogram_kelvin>(461.5),
        vapor_pressure: Pressure::new::<pascal>(12_350.0),
        outer_diameter: Length::new::<millimeter>(6.0),
        inner_radius: Length::new::<millimeter>(2.5),
        wall_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(11.4),
        length: Length::new::<millimeter>(20.0),
        vapor_diameter: Length::new::<millimeter>(3.6),
        wick_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(1.5),
        interface_area: Area::new::<square_meter>(PI * 0.0036 * 0.02),
    }
}
