//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units. This module provides
//! quantities that are useful for heat pipe modeling but aren't included in
//! [`uom`].
//!
//! ## Thermal resistance
//!
//! [`uom`] has thermal conductance (W/K) but no thermal resistance (K/W).
//! [`ThermalResistance`] fills that gap, and the [`KelvinPerWatt`] trait
//! converts it to and from plain SI values:
//!
//! ```
//! use heatpipe_models::support::units::{KelvinPerWatt, ThermalResistance};
//! use uom::si::{f64::{Power, TemperatureInterval}, power::watt, temperature_interval::kelvin};
//!
//! let r_wall = ThermalResistance::from_kelvin_per_watt(0.02);
//! let q_dot = Power::new::<watt>(150.0);
//!
//! let delta_t: TemperatureInterval = r_wall * q_dot;
//! assert!((delta_t.get::<kelvin>() - 3.0).abs() < 1e-12);
//! ```

mod quantities;
mod thermal_resistance;

pub use quantities::{SpecificEnthalpy, SpecificGasConstant, ThermalResistance};
pub use thermal_resistance::KelvinPerWatt;
