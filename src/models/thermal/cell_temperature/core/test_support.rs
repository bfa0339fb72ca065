use ndarray::{ArrayD, IxDyn};

use super::CellTemperatureConfig;

/// Affine stand-in for the cell-2 peak temperature, in K.
pub(crate) fn cell2_temperature(energy: f64, extra: f64, ratio: f64) -> f64 {
    600.0 + 20.0 * energy - 50.0 * extra + 100.0 * ratio
}

/// Affine stand-in for the cell-3 peak temperature, in K.
pub(crate) fn cell3_temperature(energy: f64, extra: f64, ratio: f64) -> f64 {
    400.0 + 10.0 * energy - 30.0 * extra + 40.0 * ratio
}

/// Tables of both stand-ins sampled on the configured grid.
pub(crate) fn affine_tables(config: &CellTemperatureConfig) -> (ArrayD<f64>, ArrayD<f64>) {
    let energy = config.energy.breakpoints().unwrap();
    let extra = config.extra.breakpoints().unwrap();
    let ratio = config.ratio.breakpoints().unwrap();
    let shape = IxDyn(&[energy.len(), extra.len(), ratio.len()]);

    let sample = |f: fn(f64, f64, f64) -> f64| {
        ArrayD::from_shape_fn(shape.clone(), |index| {
            f(energy[index[0]], extra[index[1]], ratio[index[2]])
        })
    };

    (sample(cell2_temperature), sample(cell3_temperature))
}
