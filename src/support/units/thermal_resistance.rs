use std::marker::PhantomData;

use super::ThermalResistance;

/// Conversions between [`ThermalResistance`] and plain values in K/W.
///
/// [`uom`] only generates unit constructors for the quantities it defines,
/// so this trait provides the SI constructor and accessor instead.
pub trait KelvinPerWatt {
    /// Creates a thermal resistance from a value in K/W.
    fn from_kelvin_per_watt(value: f64) -> Self;

    /// Returns the thermal resistance in K/W.
    fn kelvin_per_watt(&self) -> f64;
}

impl KelvinPerWatt for ThermalResistance {
    fn from_kelvin_per_watt(value: f64) -> Self {
        Self {
            dimension: PhantomData,
            units: PhantomData,
            value,
        }
    }

    fn kelvin_per_watt(&self) -> f64 {
        self.value
    }
}
