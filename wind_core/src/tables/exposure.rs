//! Exposure factor curves (c_e × c_e,T combined) and the town correction.
//!
//! Country terrain is graduated by distance to the shoreline; the coastal and
//! town curves depend on height only. Heights interpolate linearly, distances
//! in log-space. The 0.1 km country column coincides with the coastal curve.

use super::{Axis, FactorGrid, FactorTable, Interpolated, Scale};
use crate::errors::CalcResult;
use crate::site::TerrainCategory;

const HEIGHT_AXIS: Axis = Axis {
    name: "height above ground",
    unit: "m",
    breakpoints: &[1.0, 2.0, 5.0, 10.0, 15.0, 20.0, 30.0, 50.0, 100.0, 200.0],
    scale: Scale::Linear,
};

const SHORE_DISTANCE_AXIS: Axis = Axis {
    name: "distance to shoreline",
    unit: "km",
    breakpoints: &[0.1, 1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0],
    scale: Scale::Log,
};

pub static COASTAL_EXPOSURE: FactorTable = FactorTable {
    name: "Exposure factor (coastal)",
    axis: HEIGHT_AXIS,
    values: &[1.95, 2.10, 2.35, 2.50, 2.58, 2.64, 2.72, 2.82, 2.96, 3.10],
};

pub static TOWN_EXPOSURE: FactorTable = FactorTable {
    name: "Exposure factor (town)",
    axis: HEIGHT_AXIS,
    values: &[1.75, 1.95, 2.25, 2.50, 2.61, 2.69, 2.81, 2.95, 3.14, 3.33],
};

#[rustfmt::skip]
pub static COUNTRY_EXPOSURE: FactorGrid = FactorGrid {
    name: "Exposure factor (country)",
    rows: HEIGHT_AXIS,
    cols: SHORE_DISTANCE_AXIS,
    values: &[
    //  0.1   1     2     5     10    20    50    100 km
        1.95, 1.62, 1.50, 1.38, 1.31, 1.27, 1.24, 1.22, // 1 m
        2.10, 1.80, 1.68, 1.55, 1.48, 1.43, 1.40, 1.38, // 2 m
        2.35, 2.15, 2.07, 1.98, 1.92, 1.87, 1.83, 1.80, // 5 m
        2.50, 2.38, 2.32, 2.25, 2.20, 2.16, 2.12, 2.10, // 10 m
        2.58, 2.48, 2.43, 2.37, 2.33, 2.29, 2.26, 2.24, // 15 m
        2.64, 2.55, 2.51, 2.46, 2.42, 2.39, 2.36, 2.34, // 20 m
        2.72, 2.65, 2.62, 2.58, 2.55, 2.52, 2.50, 2.48, // 30 m
        2.82, 2.77, 2.75, 2.72, 2.70, 2.68, 2.66, 2.65, // 50 m
        2.96, 2.93, 2.92, 2.90, 2.89, 2.88, 2.87, 2.86, // 100 m
        3.10, 3.09, 3.08, 3.07, 3.07, 3.06, 3.06, 3.05, // 200 m
    ],
};

pub static TOWN_CORRECTION: FactorTable = FactorTable {
    name: "Town correction factor",
    axis: Axis {
        name: "distance into town",
        unit: "km",
        breakpoints: &[0.0, 1.0, 2.0, 3.0, 4.0, 20.0],
        scale: Scale::Linear,
    },
    values: &[1.00, 1.02, 1.04, 1.06, 1.08, 1.08],
};

/// Exposure factor for a terrain category at height `z` (m).
///
/// `shore_distance_km` only affects country terrain.
pub fn exposure_factor(terrain: TerrainCategory, z: f64, shore_distance_km: f64) -> Interpolated {
    match terrain {
        TerrainCategory::Coastal => COASTAL_EXPOSURE.lookup(z),
        TerrainCategory::Country => COUNTRY_EXPOSURE.lookup(z, shore_distance_km),
        TerrainCategory::Town => TOWN_EXPOSURE.lookup(z),
    }
}

/// Town correction factor c_e,T; exactly 1.0 outside town terrain.
pub fn town_correction_factor(terrain: TerrainCategory, distance_into_town_km: f64) -> Interpolated {
    match terrain {
        TerrainCategory::Town => TOWN_CORRECTION.lookup(distance_into_town_km),
        _ => Interpolated::exact(1.0),
    }
}

pub(super) fn validate_tables() -> CalcResult<()> {
    COASTAL_EXPOSURE.validate()?;
    TOWN_EXPOSURE.validate()?;
    COUNTRY_EXPOSURE.validate()?;
    TOWN_CORRECTION.validate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_near_shore_matches_coastal() {
        for z in [1.0, 3.0, 7.5, 10.0, 42.0, 200.0] {
            let country = exposure_factor(TerrainCategory::Country, z, 0.1).value;
            let coastal = exposure_factor(TerrainCategory::Coastal, z, 0.1).value;
            assert!((country - coastal).abs() < 1e-12, "z = {}", z);
        }
    }

    #[test]
    fn test_country_tabulated_point() {
        let r = exposure_factor(TerrainCategory::Country, 5.0, 5.0);
        assert!((r.value - 1.98).abs() < 1e-12);
        assert!(r.clamps.is_empty());
    }

    #[test]
    fn test_town_exposure_interpolates_in_height() {
        // 27 m: 2.69 + 0.7 × (2.81 − 2.69) = 2.774
        let r = exposure_factor(TerrainCategory::Town, 27.0, 100.0);
        assert!((r.value - 2.774).abs() < 1e-9);
    }

    #[test]
    fn test_shore_distance_below_range_clamps() {
        let r = exposure_factor(TerrainCategory::Country, 10.0, 0.0);
        assert_eq!(r.value, exposure_factor(TerrainCategory::Country, 10.0, 0.1).value);
        assert_eq!(r.clamps.len(), 1);
        assert_eq!(r.clamps[0].axis, "distance to shoreline");
    }

    #[test]
    fn test_town_correction() {
        assert_eq!(town_correction_factor(TerrainCategory::Country, 3.0).value, 1.0);
        assert!((town_correction_factor(TerrainCategory::Town, 2.0).value - 1.04).abs() < 1e-12);
        assert!((town_correction_factor(TerrainCategory::Town, 0.5).value - 1.01).abs() < 1e-12);
        let beyond = town_correction_factor(TerrainCategory::Town, 25.0);
        assert_eq!(beyond.value, 1.08);
        assert_eq!(beyond.clamps.len(), 1);
    }

    #[test]
    fn test_exposure_non_decreasing_with_height() {
        for terrain in TerrainCategory::ALL {
            let mut previous = 0.0;
            let mut z = 1.0;
            while z <= 200.0 {
                let value = exposure_factor(terrain, z, 7.0).value;
                assert!(value >= previous, "{:?} at {} m", terrain, z);
                previous = value;
                z += 0.5;
            }
        }
    }
}
