//! # Material Property Table
//!
//! Named materials consumed by the verification stage. Two families:
//!
//! - **Structural** ([`structural`]): steel, aluminium and timber grades used
//!   for brackets and posts (strength, stiffness, density, partial factor).
//! - **Panels** ([`panels`]): sign face sheets with effective per-width
//!   section properties for the between-channel check.
//!
//! Unrecognized names are hard errors.
//!
//! ```rust
//! use wind_core::materials::{panel_material, structural_material, MaterialKind};
//!
//! let s355 = structural_material("S355").unwrap();
//! assert_eq!(s355.kind, MaterialKind::Steel);
//! assert!(panel_material("acm_3mm").is_ok());
//! assert!(structural_material("unobtainium").is_err());
//! ```

pub mod panels;
pub mod structural;

pub use panels::{panel_material, PanelMaterial, PANEL_MATERIALS};
pub use structural::{structural_material, MaterialKind, StructuralMaterial, STRUCTURAL_MATERIALS};

/// Names of every known material, structural first
pub fn material_names() -> Vec<&'static str> {
    STRUCTURAL_MATERIALS
        .iter()
        .map(|m| m.name)
        .chain(PANEL_MATERIALS.iter().map(|m| m.name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_names_are_unique() {
        let mut names = material_names();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
