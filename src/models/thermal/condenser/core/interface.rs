//! Heat transfer across the wick/vapor interface during condensation.
//!
//! The interfacial coefficient follows kinetic theory of evaporation and
//! condensation at a liquid/vapor boundary:
//!
//! ```text
//! h = 2a/(2 - a) · h_fg² / (T v) · (2π R T)^(-1/2) · (1 - P v / (2 h_fg))
//! ```
//!
//! The gradient is assembled from the four factors of this product.

use std::f64::consts::PI;

use super::CondenserInputVar;

/// Interface state in SI base units.
#[derive(Debug, Clone, Copy)]
pub(super) struct InterfaceState {
    pub(super) alpha: f64,
    pub(super) latent_heat: f64,
    pub(super) temperature: f64,
    pub(super) specific_volume: f64,
    pub(super) gas_constant: f64,
    pub(super) vapor_pressure: f64,
}

/// Partial derivatives of the interfacial coefficient, in SI base units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct InterfaceGradient {
    pub(super) alpha: f64,
    pub(super) latent_heat: f64,
    pub(super) temperature: f64,
    pub(super) specific_volume: f64,
    pub(super) gas_constant: f64,
    pub(super) vapor_pressure: f64,
}

/// Factors `a · b · c · d` of the interfacial coefficient.
struct Factors {
    accommodation: f64,
    latent: f64,
    kinetic: f64,
    pressure: f64,
}

impl InterfaceState {
    fn factors(&self) -> Factors {
        let Self {
            alpha,
            latent_heat: h_fg,
            temperature: t,
            specific_volume: v,
            gas_constant: r,
            vapor_pressure: p,
        } = *self;

        Factors {
            accommodation: 2.0 * alpha / (2.0 - alpha),
            latent: h_fg * h_fg / (t * v),
            kinetic: (2.0 * PI * r * t).sqrt().recip(),
            pressure: 1.0 - p * v / (2.0 * h_fg),
        }
    }

    /// Interfacial heat transfer coefficient, W/(m²·K).
    pub(super) fn coefficient(&self) -> f64 {
        let Factors {
            accommodation: a,
            latent: b,
            kinetic: c,
            pressure: d,
        } = self.factors();
        a * b * c * d
    }

    /// Exact partial derivatives of [`InterfaceState::coefficient`].
    pub(super) fn gradient(&self) -> InterfaceGradient {
        let Factors {
            accommodation: a,
            latent: b,
            kinetic: c,
            pressure: d,
        } = self.factors();

        let Self {
            alpha,
            latent_heat: h_fg,
            temperature: t,
            specific_volume: v,
            gas_constant: r,
            vapor_pressure: p,
        } = *self;

        let da_dalpha = 4.0 / ((2.0 - alpha) * (2.0 - alpha));

        let db_dh_fg = 2.0 * h_fg / (t * v);
        let db_dt = -b / t;
        let db_dv = -b / v;

        let dc_dt = -0.5 * c / t;
        let dc_dr = -0.5 * c / r;

        let dd_dh_fg = p * v / (2.0 * h_fg * h_fg);
        let dd_dv = -p / (2.0 * h_fg);
        let dd_dp = -v / (2.0 * h_fg);

        InterfaceGradient {
            alpha: da_dalpha * b * c * d,
            latent_heat: a * c * (db_dh_fg * d + b * dd_dh_fg),
            temperature: a * d * (db_dt * c + b * dc_dt),
            specific_volume: a * c * (db_dv * d + b * dd_dv),
            gas_constant: a * b * dc_dr * d,
            vapor_pressure: a * b * c * dd_dp,
        }
    }
}

impl InterfaceGradient {
    /// Returns the derivative with respect to `wrt`, or `None` if the
    /// coefficient does not depend on it.
    pub(super) fn wrt(&self, wrt: CondenserInputVar) -> Option<f64> {
        match wrt {
            CondenserInputVar::Alpha => Some(self.alpha),
            CondenserInputVar::LatentHeat => Some(self.latent_heat),
            CondenserInputVar::Temperature => Some(self.temperature),
            CondenserInputVar::SpecificVolume => Some(self.specific_volume),
            CondenserInputVar::GasConstant => Some(self.gas_constant),
            CondenserInputVar::VaporPressure => Some(self.vapor_pressure),
            _ => None,
        }
    }
}
