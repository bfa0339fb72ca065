use super::{
    CondenserInputVar as In, CondenserOutputVar as Out, conduction::ShellGradient,
    interface::InterfaceGradient,
};

/// Partial derivatives of every condenser output at a single node.
///
/// Values are in SI base units of `output / input`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CondenserPartials {
    pub(super) interface: InterfaceGradient,
    pub(super) wall: ShellGradient,
    pub(super) wick: ShellGradient,
    /// `d(R_interc)/d(h_interc) = -1 / (h² A)`.
    pub(super) resistance_per_coefficient: f64,
    /// `d(R_interc)/d(A_interc) = -1 / (h A²)`.
    pub(super) resistance_per_area: f64,
}

impl CondenserPartials {
    /// Returns `d(of)/d(wrt)`.
    ///
    /// Pairs outside [`Out::dependencies`] are identically zero.
    pub(crate) fn get(&self, of: Out, wrt: In) -> f64 {
        match (of, wrt) {
            (Out::InterfaceCoefficient, wrt) => self.interface.wrt(wrt).unwrap_or(0.0),

            // Diameters enter the shell radii with a factor of one half.
            (Out::WallResistance, In::OuterDiameter) => 0.5 * self.wall.outer_radius,
            (Out::WallResistance, In::InnerRadius) => self.wall.inner_radius,
            (Out::WallResistance, In::WallConductivity) => self.wall.conductivity,
            (Out::WallResistance, In::Length) => self.wall.length,

            (Out::WickResistance, In::InnerRadius) => self.wick.outer_radius,
            (Out::WickResistance, In::VaporDiameter) => 0.5 * self.wick.inner_radius,
            (Out::WickResistance, In::WickConductivity) => self.wick.conductivity,
            (Out::WickResistance, In::Length) => self.wick.length,

            (Out::InterfaceResistance, In::InterfaceArea) => self.resistance_per_area,
            (Out::InterfaceResistance, wrt) => self
                .interface
                .wrt(wrt)
                .map_or(0.0, |dh| self.resistance_per_coefficient * dh),

            _ => 0.0,
        }
    }
}
