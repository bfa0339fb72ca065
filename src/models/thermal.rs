//! Thermal systems models.
//!
//! This module contains models for heat pipe cooled battery packs: the
//! condenser thermal resistance network and a surrogate for neighbor cell
//! temperatures during thermal runaway.

pub mod cell_temperature;
pub mod condenser;
