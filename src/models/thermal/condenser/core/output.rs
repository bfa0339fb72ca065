use uom::si::{f64::HeatTransfer, heat_transfer::watt_per_square_meter_kelvin};

use crate::support::units::{KelvinPerWatt, ThermalResistance};

use super::CondenserOutputVar;

/// Interface coefficient and layer resistances of a condenser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CondenserOutput {
    /// `h_interc`: heat transfer coefficient of the wick/vapor interface.
    pub interface_coefficient: HeatTransfer,
    /// `R_wc`: conduction resistance of the wall.
    pub wall_resistance: ThermalResistance,
    /// `R_wkc`: conduction resistance of the wick.
    pub wick_resistance: ThermalResistance,
    /// `R_interc`: resistance of the wick/vapor interface.
    pub interface_resistance: ThermalResistance,
}

impl CondenserOutput {
    /// Series resistance from the vapor to the outer wall surface.
    #[must_use]
    pub fn total_resistance(&self) -> ThermalResistance {
        self.interface_resistance + self.wick_resistance + self.wall_resistance
    }

    /// Returns the value of `output` in SI base units.
    #[must_use]
    pub fn value(&self, output: CondenserOutputVar) -> f64 {
        match output {
            CondenserOutputVar::InterfaceCoefficient => self
                .interface_coefficient
                .get::<watt_per_square_meter_kelvin>(),
            CondenserOutputVar::WallResistance => self.wall_resistance.kelvin_per_watt(),
            CondenserOutputVar::WickResistance => self.wick_resistance.kelvin_per_watt(),
            CondenserOutputVar::InterfaceResistance => self.interface_resistance.kelvin_per_watt(),
        }
    }
}
