use std::path::Path;

use ndarray::{ArrayD, Dimension};
use ndarray_npy::read_npy;

use crate::support::interp::{Breakpoints, StructuredGrid};

use super::{
    CellTemperatureConfig, CellTemperatureInputVar, CellTemperatureOutputVar, Sentinel,
    TrainingDataError,
};

/// Share of failed cases above which a table is reported as suspect.
const SENTINEL_WARN_FRACTION: f64 = 0.25;

/// Cleaned training tables of the cell temperature metamodel.
///
/// Both tables share the grid `(energy, extra, ratio)` and hold peak
/// temperatures in kelvin.
#[derive(Debug, Clone)]
pub struct TrainingData {
    cell2: StructuredGrid,
    cell3: StructuredGrid,
}

impl TrainingData {
    /// Builds training data from in-memory tables.
    ///
    /// Sentinel entries are replaced before the tables are validated.
    ///
    /// # Errors
    ///
    /// Returns a [`TrainingDataError`] if an axis range is invalid, a table
    /// shape does not match the axes, or a cleaned table is not finite.
    pub fn from_arrays(
        config: &CellTemperatureConfig,
        cell2: ArrayD<f64>,
        cell3: ArrayD<f64>,
    ) -> Result<Self, TrainingDataError> {
        let axes = grid_axes(config)?;

        Ok(Self {
            cell2: clean_table(
                CellTemperatureOutputVar::Cell2,
                axes.clone(),
                cell2,
                &config.cell2.sentinel,
            )?,
            cell3: clean_table(
                CellTemperatureOutputVar::Cell3,
                axes,
                cell3,
                &config.cell3.sentinel,
            )?,
        })
    }

    /// Loads both tables from `.npy` files in `dir`.
    ///
    /// File names come from [`CellTemperatureConfig::cell2`] and
    /// [`CellTemperatureConfig::cell3`].
    ///
    /// # Errors
    ///
    /// Returns [`TrainingDataError::Read`] if a file is missing or is not a
    /// float64 array, or any error of [`TrainingData::from_arrays`].
    pub fn load(
        config: &CellTemperatureConfig,
        dir: impl AsRef<Path>,
    ) -> Result<Self, TrainingDataError> {
        let dir = dir.as_ref();
        let cell2 = read_table(
            CellTemperatureOutputVar::Cell2,
            &dir.join(&config.cell2.file_name),
        )?;
        let cell3 = read_table(
            CellTemperatureOutputVar::Cell3,
            &dir.join(&config.cell3.file_name),
        )?;

        Self::from_arrays(config, cell2, cell3)
    }

    /// Returns the grid of one output.
    #[must_use]
    pub fn table(&self, var: CellTemperatureOutputVar) -> &StructuredGrid {
        match var {
            CellTemperatureOutputVar::Cell2 => &self.cell2,
            CellTemperatureOutputVar::Cell3 => &self.cell3,
        }
    }
}

fn grid_axes(config: &CellTemperatureConfig) -> Result<Vec<Breakpoints>, TrainingDataError> {
    CellTemperatureInputVar::ALL
        .into_iter()
        .map(|input| {
            let range = match input {
                CellTemperatureInputVar::Energy => &config.energy,
                CellTemperatureInputVar::Extra => &config.extra,
                CellTemperatureInputVar::Ratio => &config.ratio,
            };
            range
                .breakpoints()
                .map_err(|source| TrainingDataError::Axis { input, source })
        })
        .collect()
}

fn read_table(table: CellTemperatureOutputVar, path: &Path) -> Result<ArrayD<f64>, TrainingDataError> {
    let values: ArrayD<f64> = read_npy(path).map_err(|source| TrainingDataError::Read {
        table,
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!(
        "loaded {table} training data with shape {:?} from {}",
        values.shape(),
        path.display()
    );
    Ok(values)
}

fn clean_table(
    table: CellTemperatureOutputVar,
    axes: Vec<Breakpoints>,
    mut values: ArrayD<f64>,
    sentinel: &Sentinel,
) -> Result<StructuredGrid, TrainingDataError> {
    let replaced = sentinel.replace(&mut values);
    if replaced > 0 {
        log::debug!(
            "replaced {replaced} failed cases in {table} with {:?}",
            sentinel.replacement
        );

        #[allow(clippy::cast_precision_loss)]
        let share = replaced as f64 / values.len() as f64;
        if share > SENTINEL_WARN_FRACTION {
            log::warn!(
                "{replaced} of {} {table} entries are failed cases",
                values.len()
            );
        }
    }

    let grid = StructuredGrid::new(axes, values)
        .map_err(|source| TrainingDataError::Grid { table, source })?;

    if let Some((index, _)) = grid.values().indexed_iter().find(|(_, v)| !v.is_finite()) {
        return Err(TrainingDataError::NonFinite {
            table,
            index: index.slice().to_vec(),
        });
    }

    Ok(grid)
}
