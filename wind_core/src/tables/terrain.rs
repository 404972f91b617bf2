//! Terrain-category roughness parameters (EN 1991-1-4 Table 4.1 with the
//! UK National Annex terrain factor).
//!
//! Coastal sites map to category 0 (sea), country to category II and town to
//! category III. These supply the minimum reference height and the
//! general-method cross-check of the peak pressure.

use serde::Serialize;

use crate::errors::{CalcError, CalcResult};
use crate::site::TerrainCategory;

/// Roughness parameters for one terrain category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoughnessParameters {
    /// EN 1991-1-4 category label ("0", "II", "III")
    pub category: &'static str,
    /// Roughness length z0 (m)
    pub roughness_length_m: f64,
    /// Minimum height z_min (m)
    pub minimum_height_m: f64,
    /// Terrain factor k_r
    pub terrain_factor: f64,
}

static ROUGHNESS: [RoughnessParameters; 3] = [
    RoughnessParameters {
        category: "0",
        roughness_length_m: 0.003,
        minimum_height_m: 1.0,
        terrain_factor: 0.17,
    },
    RoughnessParameters {
        category: "II",
        roughness_length_m: 0.05,
        minimum_height_m: 2.0,
        terrain_factor: 0.19,
    },
    RoughnessParameters {
        category: "III",
        roughness_length_m: 0.3,
        minimum_height_m: 5.0,
        terrain_factor: 0.22,
    },
];

pub fn roughness_parameters(terrain: TerrainCategory) -> &'static RoughnessParameters {
    match terrain {
        TerrainCategory::Coastal => &ROUGHNESS[0],
        TerrainCategory::Country => &ROUGHNESS[1],
        TerrainCategory::Town => &ROUGHNESS[2],
    }
}

impl RoughnessParameters {
    /// Roughness factor c_r(z) = k_r ln(z / z0), with z floored at z_min
    pub fn roughness_factor(&self, z: f64) -> f64 {
        self.terrain_factor * (z.max(self.minimum_height_m) / self.roughness_length_m).ln()
    }

    /// Turbulence intensity I_v(z) = 1 / ln(z / z0), with z floored at z_min
    pub fn turbulence_intensity(&self, z: f64) -> f64 {
        1.0 / (z.max(self.minimum_height_m) / self.roughness_length_m).ln()
    }
}

pub(super) fn validate_tables() -> CalcResult<()> {
    for p in &ROUGHNESS {
        if p.minimum_height_m <= p.roughness_length_m {
            return Err(CalcError::Internal {
                message: format!("terrain category {}: z_min must exceed z0", p.category),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_mapping() {
        assert_eq!(roughness_parameters(TerrainCategory::Coastal).category, "0");
        assert_eq!(roughness_parameters(TerrainCategory::Country).category, "II");
        assert_eq!(roughness_parameters(TerrainCategory::Town).minimum_height_m, 5.0);
    }

    #[test]
    fn test_roughness_factor() {
        // c_r = 0.19 × ln(10 / 0.05) = 0.19 × 5.298 = 1.0067
        let p = roughness_parameters(TerrainCategory::Country);
        assert!((p.roughness_factor(10.0) - 1.0067).abs() < 1e-3);
        // Below z_min the value at z_min is used
        assert_eq!(p.roughness_factor(0.5), p.roughness_factor(2.0));
    }

    #[test]
    fn test_turbulence_intensity() {
        let p = roughness_parameters(TerrainCategory::Town);
        // I_v = 1 / ln(30 / 0.3) = 0.2171
        assert!((p.turbulence_intensity(30.0) - 0.2171).abs() < 1e-3);
    }
}
