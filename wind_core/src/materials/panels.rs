//! Sign face panels spanning between support channels.
//!
//! Section properties are effective values per metre width of panel. For
//! composites (ACM, steel composite) the faces carry bending and the core
//! only provides spacing; face modulus and face yield apply.

use serde::Serialize;

use crate::errors::{CalcError, CalcResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanelMaterial {
    pub name: &'static str,
    pub description: &'static str,
    /// Face elastic modulus (MPa)
    pub elastic_modulus_mpa: f64,
    /// Face yield / proof strength (MPa)
    pub yield_strength_mpa: f64,
    /// Second moment of area per metre width (mm⁴/mm)
    pub second_moment_mm4_per_mm: f64,
    /// Elastic section modulus per metre width (mm³/mm)
    pub section_modulus_mm3_per_mm: f64,
    pub areal_density_kg_m2: f64,
}

pub static PANEL_MATERIALS: [PanelMaterial; 4] = [
    PanelMaterial {
        name: "acm_3mm",
        description: "3 mm aluminium composite (0.3 mm skins, PE core)",
        elastic_modulus_mpa: 70_000.0,
        yield_strength_mpa: 100.0,
        second_moment_mm4_per_mm: 94.5,
        section_modulus_mm3_per_mm: 63.0,
        areal_density_kg_m2: 5.0,
    },
    PanelMaterial {
        name: "aluminium_3mm",
        description: "3 mm solid aluminium sheet",
        elastic_modulus_mpa: 70_000.0,
        yield_strength_mpa: 100.0,
        second_moment_mm4_per_mm: 2.25,
        section_modulus_mm3_per_mm: 1.5,
        areal_density_kg_m2: 8.1,
    },
    PanelMaterial {
        name: "steel_composite_3mm",
        description: "3 mm steel composite (0.3 mm steel skins)",
        elastic_modulus_mpa: 210_000.0,
        yield_strength_mpa: 235.0,
        second_moment_mm4_per_mm: 472.5,
        section_modulus_mm3_per_mm: 315.0,
        areal_density_kg_m2: 12.0,
    },
    PanelMaterial {
        name: "aluminium_4mm",
        description: "4 mm solid aluminium sheet",
        elastic_modulus_mpa: 70_000.0,
        yield_strength_mpa: 100.0,
        second_moment_mm4_per_mm: 5.33,
        section_modulus_mm3_per_mm: 2.67,
        areal_density_kg_m2: 10.8,
    },
];

/// Look up a panel material by name (case-insensitive)
pub fn panel_material(name: &str) -> CalcResult<&'static PanelMaterial> {
    PANEL_MATERIALS
        .iter()
        .find(|m| m.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| CalcError::material_not_found(name))
}

impl PanelMaterial {
    /// Self-weight per unit area (kN/m²)
    pub fn areal_weight_kn_m2(&self) -> f64 {
        self.areal_density_kg_m2 * 9.81 / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_lookup() {
        let acm = panel_material("ACM_3mm").unwrap();
        assert_eq!(acm.section_modulus_mm3_per_mm, 63.0);
        assert!(panel_material("glass_6mm").is_err());
    }

    #[test]
    fn test_areal_weight() {
        // 5 kg/m² × 9.81 = 0.049 kN/m²
        let acm = panel_material("acm_3mm").unwrap();
        assert!((acm.areal_weight_kn_m2() - 0.04905).abs() < 1e-9);
    }

    #[test]
    fn test_composites_stiffer_than_solid_sheet() {
        let acm = panel_material("acm_3mm").unwrap();
        let solid = panel_material("aluminium_3mm").unwrap();
        assert!(acm.second_moment_mm4_per_mm > solid.second_moment_mm4_per_mm);
        assert!(acm.areal_density_kg_m2 < solid.areal_density_kg_m2);
    }
}
