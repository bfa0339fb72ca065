use std::path::PathBuf;

use ndarray::ArrayD;
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use crate::support::interp::{Breakpoints, Extrapolation, InterpError};

/// Evenly spaced breakpoints, as passed to `linspace`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub start: f64,
    pub stop: f64,
    pub num: usize,
}

impl AxisRange {
    #[must_use]
    pub fn new(start: f64, stop: f64, num: usize) -> Self {
        Self { start, stop, num }
    }

    /// Builds the breakpoints of this range.
    ///
    /// # Errors
    ///
    /// Returns an [`InterpError`] if `num` is zero or `stop <= start`.
    pub fn breakpoints(&self) -> Result<Breakpoints, InterpError> {
        Breakpoints::linspace(self.start, self.stop, self.num)
    }
}

/// Marker value of a failed simulation case and the temperature assumed in its place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sentinel {
    pub marker: f64,
    pub replacement: ThermodynamicTemperature,
}

impl Sentinel {
    /// Sentinel for tables where failed cases were stored as zero.
    #[must_use]
    pub fn zero(replacement: ThermodynamicTemperature) -> Self {
        Self {
            marker: 0.0,
            replacement,
        }
    }

    /// Replaces every marker entry in `values` and returns how many were replaced.
    pub fn replace(&self, values: &mut ArrayD<f64>) -> usize {
        let replacement = self.replacement.get::<kelvin>();
        let mut replaced = 0;
        for value in values.iter_mut() {
            if *value == self.marker {
                *value = replacement;
                replaced += 1;
            }
        }
        replaced
    }
}

/// Source file and cleaning rule of one training table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableConfig {
    /// File name relative to the training data directory.
    pub file_name: PathBuf,
    pub sentinel: Sentinel,
}

/// Configuration of the cell temperature metamodel.
///
/// The default matches the reference training campaign: 3 energies from
/// 16 to 32 kJ, 6 extra spacings from 1 to 2 mm, and 4 ratios from 0.25 to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct CellTemperatureConfig {
    /// Energy breakpoints, in kJ.
    pub energy: AxisRange,

    /// Extra spacing breakpoints, in mm.
    pub extra: AxisRange,

    /// Ratio breakpoints.
    pub ratio: AxisRange,

    pub cell2: TableConfig,
    pub cell3: TableConfig,

    pub extrapolation: Extrapolation,
}

impl Default for CellTemperatureConfig {
    fn default() -> Self {
        Self {
            energy: AxisRange::new(16.0, 32.0, 3),
            extra: AxisRange::new(1.0, 2.0, 6),
            ratio: AxisRange::new(0.25, 1.0, 4),
            cell2: TableConfig {
                file_name: PathBuf::from("cell2_v2.npy"),
                sentinel: Sentinel::zero(ThermodynamicTemperature::new::<kelvin>(2400.0)),
            },
            cell3: TableConfig {
                file_name: PathBuf::from("cell3_v2.npy"),
                sentinel: Sentinel::zero(ThermodynamicTemperature::new::<kelvin>(1200.0)),
            },
            extrapolation: Extrapolation::Enabled,
        }
    }
}
