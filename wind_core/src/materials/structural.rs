//! Structural grades for brackets and posts.
//!
//! | Name    | Kind      | f (MPa) | E (MPa) | γ_M | k_mod |
//! |---------|-----------|---------|---------|-----|-------|
//! | S275    | Steel     | 275     | 210000  | 1.0 | 1.0   |
//! | S355    | Steel     | 355     | 210000  | 1.0 | 1.0   |
//! | 6061-T6 | Aluminium | 240     | 70000   | 1.1 | 1.0   |
//! | 6063-T6 | Aluminium | 160     | 70000   | 1.1 | 1.0   |
//! | C16     | Timber    | 16      | 8000    | 1.3 | 0.9   |
//! | C24     | Timber    | 24      | 11000   | 1.3 | 0.9   |
//!
//! For metals `f` is the yield (0.2% proof) strength and shear resistance is
//! `f / √3`; for timber `f` is the characteristic bending strength f_m,k and
//! shear uses the tabulated f_v,k.

use serde::Serialize;
use std::fmt;

use crate::errors::{CalcError, CalcResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MaterialKind {
    Steel,
    Aluminium,
    Timber,
}

impl MaterialKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            MaterialKind::Steel => "Steel",
            MaterialKind::Aluminium => "Aluminium",
            MaterialKind::Timber => "Timber",
        }
    }

    /// Metals are specified as hollow sections; timber as solid
    pub fn is_metal(&self) -> bool {
        !matches!(self, MaterialKind::Timber)
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StructuralMaterial {
    pub name: &'static str,
    pub kind: MaterialKind,
    /// Yield / proof strength (metals) or f_m,k (timber), MPa
    pub strength_mpa: f64,
    /// Characteristic shear strength f_v,k for timber, MPa
    pub shear_strength_mpa: Option<f64>,
    pub elastic_modulus_mpa: f64,
    pub density_kg_m3: f64,
    /// Material partial factor (γ_M0, γ_M1 or γ_M)
    pub gamma_m: f64,
    /// Modification factor for load duration and service class
    pub k_mod: f64,
}

pub static STRUCTURAL_MATERIALS: [StructuralMaterial; 6] = [
    StructuralMaterial {
        name: "S275",
        kind: MaterialKind::Steel,
        strength_mpa: 275.0,
        shear_strength_mpa: None,
        elastic_modulus_mpa: 210_000.0,
        density_kg_m3: 7850.0,
        gamma_m: 1.0,
        k_mod: 1.0,
    },
    StructuralMaterial {
        name: "S355",
        kind: MaterialKind::Steel,
        strength_mpa: 355.0,
        shear_strength_mpa: None,
        elastic_modulus_mpa: 210_000.0,
        density_kg_m3: 7850.0,
        gamma_m: 1.0,
        k_mod: 1.0,
    },
    StructuralMaterial {
        name: "6061-T6",
        kind: MaterialKind::Aluminium,
        strength_mpa: 240.0,
        shear_strength_mpa: None,
        elastic_modulus_mpa: 70_000.0,
        density_kg_m3: 2700.0,
        gamma_m: 1.1,
        k_mod: 1.0,
    },
    StructuralMaterial {
        name: "6063-T6",
        kind: MaterialKind::Aluminium,
        strength_mpa: 160.0,
        shear_strength_mpa: None,
        elastic_modulus_mpa: 70_000.0,
        density_kg_m3: 2700.0,
        gamma_m: 1.1,
        k_mod: 1.0,
    },
    StructuralMaterial {
        name: "C16",
        kind: MaterialKind::Timber,
        strength_mpa: 16.0,
        shear_strength_mpa: Some(3.2),
        elastic_modulus_mpa: 8_000.0,
        density_kg_m3: 370.0,
        gamma_m: 1.3,
        k_mod: 0.9,
    },
    StructuralMaterial {
        name: "C24",
        kind: MaterialKind::Timber,
        strength_mpa: 24.0,
        shear_strength_mpa: Some(4.0),
        elastic_modulus_mpa: 11_000.0,
        density_kg_m3: 420.0,
        gamma_m: 1.3,
        k_mod: 0.9,
    },
];

/// Look up a structural material by name (case-insensitive)
pub fn structural_material(name: &str) -> CalcResult<&'static StructuralMaterial> {
    STRUCTURAL_MATERIALS
        .iter()
        .find(|m| m.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| CalcError::material_not_found(name))
}

impl StructuralMaterial {
    /// Design bending strength k_mod · f / γ_M (MPa)
    pub fn design_bending_strength(&self) -> f64 {
        self.k_mod * self.strength_mpa / self.gamma_m
    }

    /// Design shear strength (MPa)
    pub fn design_shear_strength(&self) -> f64 {
        match self.shear_strength_mpa {
            Some(fv) => self.k_mod * fv / self.gamma_m,
            None => self.strength_mpa / 3f64.sqrt() / self.gamma_m,
        }
    }

    /// Unit weight (kN/m³)
    pub fn unit_weight_kn_m3(&self) -> f64 {
        self.density_kg_m3 * 9.81 / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(structural_material("s275").unwrap().strength_mpa, 275.0);
        assert_eq!(structural_material(" 6061-t6 ").unwrap().kind, MaterialKind::Aluminium);
    }

    #[test]
    fn test_unknown_material() {
        let err = structural_material("S460").unwrap_err();
        assert_eq!(err, CalcError::material_not_found("S460"));
    }

    #[test]
    fn test_steel_design_strengths() {
        let s275 = structural_material("S275").unwrap();
        assert_eq!(s275.design_bending_strength(), 275.0);
        // 275 / √3 = 158.77
        assert!((s275.design_shear_strength() - 158.77).abs() < 0.01);
    }

    #[test]
    fn test_timber_design_strengths() {
        let c24 = structural_material("C24").unwrap();
        // 0.9 × 24 / 1.3 = 16.615
        assert!((c24.design_bending_strength() - 16.615).abs() < 0.001);
        // 0.9 × 4.0 / 1.3 = 2.769
        assert!((c24.design_shear_strength() - 2.769).abs() < 0.001);
        assert!(!c24.kind.is_metal());
    }

    #[test]
    fn test_aluminium_partial_factor() {
        let al = structural_material("6061-T6").unwrap();
        // 240 / 1.1 = 218.18
        assert!((al.design_bending_strength() - 218.18).abs() < 0.01);
    }
}
