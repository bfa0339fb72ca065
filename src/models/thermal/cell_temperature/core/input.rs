use uom::si::{
    energy::kilojoule,
    f64::{Energy, Length, Ratio},
    length::millimeter,
    ratio::ratio,
};

use super::CellTemperatureInputVar;

/// Design point of the cell temperature metamodel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellTemperatureInput {
    /// Energy released by the runaway cell.
    pub energy: Energy,

    /// Extra spacing between neighboring cells.
    pub extra: Length,

    /// Dimensionless design ratio of the pack.
    pub ratio: Ratio,
}

impl CellTemperatureInput {
    /// Returns an input in the units of its training grid axis.
    #[must_use]
    pub fn value(&self, var: CellTemperatureInputVar) -> f64 {
        match var {
            CellTemperatureInputVar::Energy => self.energy.get::<kilojoule>(),
            CellTemperatureInputVar::Extra => self.extra.get::<millimeter>(),
            CellTemperatureInputVar::Ratio => self.ratio.get::<ratio>(),
        }
    }

    /// Grid coordinates of this input, in axis order.
    pub(super) fn coordinates(&self) -> [f64; 3] {
        CellTemperatureInputVar::ALL.map(|var| self.value(var))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{energy::joule, length::meter};

    #[test]
    fn coordinates_use_grid_units() {
        let input = CellTemperatureInput {
            energy: Energy::new::<joule>(24_000.0),
            extra: Length::new::<meter>(0.0015),
            ratio: Ratio::new::<ratio>(0.5),
        };

        let [energy, extra, r] = input.coordinates();
        assert_relative_eq!(energy, 24.0);
        assert_relative_eq!(extra, 1.5);
        assert_relative_eq!(r, 0.5);
    }
}
