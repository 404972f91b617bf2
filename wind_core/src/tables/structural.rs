//! Structural factor c_s c_d components.
//!
//! The size factor c_s is tabulated per terrain against reference height and
//! the sum of sign breadth and height (b + h). The dynamic factor c_d is
//! tabulated against overall height and the structural logarithmic decrement
//! of damping δ_s; it is unity up to 15 m.

use super::{Axis, FactorGrid, Interpolated, Scale};
use crate::errors::CalcResult;
use crate::site::TerrainCategory;

const SIZE_HEIGHT_AXIS: Axis = Axis {
    name: "reference height",
    unit: "m",
    breakpoints: &[1.0, 2.0, 6.0, 10.0, 20.0, 50.0, 100.0, 200.0],
    scale: Scale::Linear,
};

const BREADTH_PLUS_HEIGHT_AXIS: Axis = Axis {
    name: "b + h",
    unit: "m",
    breakpoints: &[1.0, 5.0, 10.0, 20.0, 50.0, 100.0, 200.0, 300.0],
    scale: Scale::Linear,
};

#[rustfmt::skip]
pub static SIZE_FACTOR_COASTAL: FactorGrid = FactorGrid {
    name: "Size factor (coastal)",
    rows: SIZE_HEIGHT_AXIS,
    cols: BREADTH_PLUS_HEIGHT_AXIS,
    values: &[
    //  1     5     10     20     50     100    200    300 m
        1.0,  1.0,  0.968, 0.936, 0.893, 0.861, 0.829, 0.810, // 1 m
        1.0,  1.0,  0.968, 0.936, 0.893, 0.861, 0.829, 0.810, // 2 m
        1.0,  1.0,  0.968, 0.936, 0.893, 0.861, 0.829, 0.810, // 6 m
        1.0,  1.0,  0.970, 0.939, 0.899, 0.868, 0.838, 0.820, // 10 m
        1.0,  1.0,  0.972, 0.944, 0.907, 0.879, 0.850, 0.834, // 20 m
        1.0,  1.0,  0.975, 0.950, 0.917, 0.892, 0.867, 0.852, // 50 m
        1.0,  1.0,  0.977, 0.955, 0.925, 0.902, 0.879, 0.866, // 100 m
        1.0,  1.0,  0.980, 0.959, 0.933, 0.912, 0.892, 0.880, // 200 m
    ],
};

#[rustfmt::skip]
pub static SIZE_FACTOR_COUNTRY: FactorGrid = FactorGrid {
    name: "Size factor (country)",
    rows: SIZE_HEIGHT_AXIS,
    cols: BREADTH_PLUS_HEIGHT_AXIS,
    values: &[
        1.0,  1.0,  0.963, 0.926, 0.876, 0.839, 0.802, 0.780,
        1.0,  1.0,  0.963, 0.926, 0.876, 0.839, 0.802, 0.780,
        1.0,  1.0,  0.963, 0.926, 0.876, 0.839, 0.802, 0.780,
        1.0,  1.0,  0.965, 0.930, 0.884, 0.849, 0.814, 0.793,
        1.0,  1.0,  0.968, 0.936, 0.894, 0.862, 0.830, 0.811,
        1.0,  1.0,  0.972, 0.944, 0.907, 0.879, 0.851, 0.834,
        1.0,  1.0,  0.975, 0.950, 0.917, 0.892, 0.867, 0.852,
        1.0,  1.0,  0.978, 0.956, 0.927, 0.905, 0.883, 0.870,
    ],
};

#[rustfmt::skip]
pub static SIZE_FACTOR_TOWN: FactorGrid = FactorGrid {
    name: "Size factor (town)",
    rows: SIZE_HEIGHT_AXIS,
    cols: BREADTH_PLUS_HEIGHT_AXIS,
    values: &[
        1.0,  1.0,  0.958, 0.915, 0.859, 0.817, 0.775, 0.750,
        1.0,  1.0,  0.958, 0.915, 0.859, 0.817, 0.775, 0.750,
        1.0,  1.0,  0.958, 0.915, 0.859, 0.817, 0.775, 0.750,
        1.0,  1.0,  0.960, 0.920, 0.868, 0.828, 0.788, 0.765,
        1.0,  1.0,  0.963, 0.927, 0.879, 0.842, 0.806, 0.784,
        1.0,  1.0,  0.968, 0.936, 0.893, 0.861, 0.829, 0.810,
        1.0,  1.0,  0.971, 0.943, 0.905, 0.876, 0.847, 0.830,
        1.0,  1.0,  0.975, 0.949, 0.916, 0.890, 0.865, 0.850,
    ],
};

#[rustfmt::skip]
pub static DYNAMIC_FACTOR: FactorGrid = FactorGrid {
    name: "Dynamic factor",
    rows: Axis {
        name: "overall height",
        unit: "m",
        breakpoints: &[1.0, 2.0, 15.0, 20.0, 30.0, 50.0, 100.0, 200.0],
        scale: Scale::Linear,
    },
    cols: Axis {
        name: "structural damping",
        unit: "-",
        breakpoints: &[0.05, 0.08, 0.10, 0.15],
        scale: Scale::Linear,
    },
    values: &[
    //  0.05  0.08  0.10  0.15
        1.00, 1.00, 1.00, 1.00, // 1 m
        1.00, 1.00, 1.00, 1.00, // 2 m
        1.00, 1.00, 1.00, 1.00, // 15 m
        1.05, 1.03, 1.02, 1.01, // 20 m
        1.09, 1.06, 1.05, 1.03, // 30 m
        1.14, 1.10, 1.08, 1.05, // 50 m
        1.22, 1.16, 1.13, 1.09, // 100 m
        1.30, 1.23, 1.19, 1.13, // 200 m
    ],
};

/// Size factor c_s for reference height `z` and breadth + height `b_plus_h` (m)
pub fn size_factor(terrain: TerrainCategory, z: f64, b_plus_h: f64) -> Interpolated {
    let grid = match terrain {
        TerrainCategory::Coastal => &SIZE_FACTOR_COASTAL,
        TerrainCategory::Country => &SIZE_FACTOR_COUNTRY,
        TerrainCategory::Town => &SIZE_FACTOR_TOWN,
    };
    grid.lookup(z, b_plus_h)
}

/// Dynamic factor c_d for overall height `height` (m) and log decrement `damping`
pub fn dynamic_factor(height: f64, damping: f64) -> Interpolated {
    DYNAMIC_FACTOR.lookup(height, damping)
}

pub(super) fn validate_tables() -> CalcResult<()> {
    SIZE_FACTOR_COASTAL.validate()?;
    SIZE_FACTOR_COUNTRY.validate()?;
    SIZE_FACTOR_TOWN.validate()?;
    DYNAMIC_FACTOR.validate()
}
