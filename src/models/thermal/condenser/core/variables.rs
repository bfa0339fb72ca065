use std::fmt;

use crate::support::partials::Variable;

/// Inputs of the condenser resistance model, keyed by framework name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CondenserInputVar {
    /// `alpha`: thermal accommodation coefficient.
    Alpha,
    /// `h_fg`: latent heat of vaporization.
    LatentHeat,
    /// `T_hp`: heat pipe vapor temperature.
    Temperature,
    /// `v_fg`: specific volume.
    SpecificVolume,
    /// `R_g`: gas constant of the vapor.
    GasConstant,
    /// `P_v`: vapor pressure.
    VaporPressure,
    /// `D_od`: wall outer diameter.
    OuterDiameter,
    /// `r_i`: wall inner radius, shared with the wick outer surface.
    InnerRadius,
    /// `k_w`: wall thermal conductivity.
    WallConductivity,
    /// `L_cond`: condenser length.
    Length,
    /// `D_v`: vapor core diameter.
    VaporDiameter,
    /// `k_wk`: wick thermal conductivity.
    WickConductivity,
    /// `A_interc`: wick/vapor interface area of the condenser.
    InterfaceArea,
}

impl CondenserInputVar {
    /// Every input, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::Alpha,
        Self::LatentHeat,
        Self::Temperature,
        Self::SpecificVolume,
        Self::GasConstant,
        Self::VaporPressure,
        Self::OuterDiameter,
        Self::InnerRadius,
        Self::WallConductivity,
        Self::Length,
        Self::VaporDiameter,
        Self::WickConductivity,
        Self::InterfaceArea,
    ];
}

impl Variable for CondenserInputVar {
    fn name(&self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::LatentHeat => "h_fg",
            Self::Temperature => "T_hp",
            Self::SpecificVolume => "v_fg",
            Self::GasConstant => "R_g",
            Self::VaporPressure => "P_v",
            Self::OuterDiameter => "D_od",
            Self::InnerRadius => "r_i",
            Self::WallConductivity => "k_w",
            Self::Length => "L_cond",
            Self::VaporDiameter => "D_v",
            Self::WickConductivity => "k_wk",
            Self::InterfaceArea => "A_interc",
        }
    }

    fn units(&self) -> &'static str {
        match self {
            Self::Alpha => "",
            Self::LatentHeat => "J/kg",
            Self::Temperature => "K",
            Self::SpecificVolume => "m**3/kg",
            Self::GasConstant => "J/kg/K",
            Self::VaporPressure => "Pa",
            Self::OuterDiameter | Self::InnerRadius | Self::Length | Self::VaporDiameter => "m",
            Self::WallConductivity | Self::WickConductivity => "W/(m*K)",
            Self::InterfaceArea => "m**2",
        }
    }
}

impl fmt::Display for CondenserInputVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outputs of the condenser resistance model, keyed by framework name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CondenserOutputVar {
    /// `h_interc`: heat transfer coefficient of the wick/vapor interface.
    InterfaceCoefficient,
    /// `R_wc`: conduction resistance of the condenser wall.
    WallResistance,
    /// `R_wkc`: conduction resistance of the condenser wick.
    WickResistance,
    /// `R_interc`: resistance of the wick/vapor interface.
    InterfaceResistance,
}

impl CondenserOutputVar {
    /// Every output, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::InterfaceCoefficient,
        Self::WallResistance,
        Self::WickResistance,
        Self::InterfaceResistance,
    ];

    /// Inputs this output depends on; every other partial is identically zero.
    #[must_use]
    pub fn dependencies(self) -> &'static [CondenserInputVar] {
        use CondenserInputVar as In;

        match self {
            Self::InterfaceCoefficient => &[
                In::Alpha,
                In::LatentHeat,
                In::Temperature,
                In::SpecificVolume,
                In::GasConstant,
                In::VaporPressure,
            ],
            Self::WallResistance => &[
                In::OuterDiameter,
                In::InnerRadius,
                In::WallConductivity,
                In::Length,
            ],
            Self::WickResistance => &[
                In::VaporDiameter,
                In::InnerRadius,
                In::WickConductivity,
                In::Length,
            ],
            Self::InterfaceResistance => &[
                In::Alpha,
                In::LatentHeat,
                In::Temperature,
                In::SpecificVolume,
                In::GasConstant,
                In::VaporPressure,
                In::InterfaceArea,
            ],
        }
    }
}

impl Variable for CondenserOutputVar {
    fn name(&self) -> &'static str {
        match self {
            Self::InterfaceCoefficient => "h_interc",
            Self::WallResistance => "R_wc",
            Self::WickResistance => "R_wkc",
            Self::InterfaceResistance => "R_interc",
        }
    }

    fn units(&self) -> &'static str {
        match self {
            Self::InterfaceCoefficient => "W/(m**2*K)",
            Self::WallResistance | Self::WickResistance | Self::InterfaceResistance => "K/W",
        }
    }
}

impl fmt::Display for CondenserOutputVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Declared `(output, input)` partial pairs, in output order.
pub fn declared_partials() -> impl Iterator<Item = (CondenserOutputVar, CondenserInputVar)> {
    CondenserOutputVar::ALL
        .into_iter()
        .flat_map(|of| of.dependencies().iter().map(move |&wrt| (of, wrt)))
}
