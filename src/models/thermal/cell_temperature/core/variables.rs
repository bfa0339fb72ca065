use std::fmt;

use crate::support::partials::Variable;

/// Inputs of the cell temperature metamodel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CellTemperatureInputVar {
    /// `energy`: energy released by the runaway cell, in kJ.
    Energy,
    /// `extra`: extra spacing between cells, in mm.
    Extra,
    /// `ratio`: dimensionless design ratio.
    Ratio,
}

impl CellTemperatureInputVar {
    /// Inputs in grid axis order.
    pub const ALL: [Self; 3] = [Self::Energy, Self::Extra, Self::Ratio];

    /// Position of this input among the grid axes.
    #[must_use]
    pub fn axis(self) -> usize {
        match self {
            Self::Energy => 0,
            Self::Extra => 1,
            Self::Ratio => 2,
        }
    }
}

impl Variable for CellTemperatureInputVar {
    fn name(&self) -> &'static str {
        match self {
            Self::Energy => "energy",
            Self::Extra => "extra",
            Self::Ratio => "ratio",
        }
    }

    fn units(&self) -> &'static str {
        match self {
            Self::Energy => "kJ",
            Self::Extra => "mm",
            Self::Ratio => "",
        }
    }
}

impl fmt::Display for CellTemperatureInputVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outputs of the cell temperature metamodel, one per training table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CellTemperatureOutputVar {
    /// `temp2_data`: peak temperature of the second cell.
    Cell2,
    /// `temp3_data`: peak temperature of the third cell.
    Cell3,
}

impl CellTemperatureOutputVar {
    /// Outputs in declaration order.
    pub const ALL: [Self; 2] = [Self::Cell2, Self::Cell3];
}

impl Variable for CellTemperatureOutputVar {
    fn name(&self) -> &'static str {
        match self {
            Self::Cell2 => "temp2_data",
            Self::Cell3 => "temp3_data",
        }
    }

    fn units(&self) -> &'static str {
        "degK"
    }
}

impl fmt::Display for CellTemperatureOutputVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every output depends on every input.
pub fn declared_partials()
-> impl Iterator<Item = (CellTemperatureOutputVar, CellTemperatureInputVar)> {
    CellTemperatureOutputVar::ALL.into_iter().flat_map(|of| {
        CellTemperatureInputVar::ALL
            .into_iter()
            .map(move |wrt| (of, wrt))
    })
}
