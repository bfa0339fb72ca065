use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use super::CellTemperatureOutputVar;

/// Predicted peak temperatures of the cells next to a runaway cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellTemperatureOutput {
    /// Peak temperature of the second cell (`temp2_data`).
    pub cell2: ThermodynamicTemperature,

    /// Peak temperature of the third cell (`temp3_data`).
    pub cell3: ThermodynamicTemperature,
}

impl CellTemperatureOutput {
    /// Returns an output in kelvin.
    #[must_use]
    pub fn value(&self, var: CellTemperatureOutputVar) -> f64 {
        match var {
            CellTemperatureOutputVar::Cell2 => self.cell2.get::<kelvin>(),
            CellTemperatureOutputVar::Cell3 => self.cell3.get::<kelvin>(),
        }
    }
}
