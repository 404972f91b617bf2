//! # Sign Geometry
//!
//! Overall dimensions of the sign face and, optionally, the face panel
//! construction used for the between-channel check.
//!
//! ## Example JSON
//!
//! ```json
//! {
//!   "width_m": 4.0,
//!   "height_m": 1.5,
//!   "depth_m": 0.3,
//!   "mounting_height_m": 5.0,
//!   "panel": { "material": "acm_3mm", "channel_spacing_mm": 600.0 }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::panel_material;
use crate::validation::{Constraint, Validator};

/// Face panel and the spacing of the channels supporting it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSpec {
    /// Panel material name, see [`crate::materials::panels`]
    pub material: String,
    /// Clear span between support channels (mm)
    pub channel_spacing_mm: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignGeometry {
    /// Breadth of the sign face, b (m)
    pub width_m: f64,
    /// Height of the sign face, h (m)
    pub height_m: f64,
    /// Depth of the sign box, or projection from the wall for projecting signs (m)
    pub depth_m: f64,
    /// Height above ground to the top of the sign (m)
    pub mounting_height_m: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel: Option<PanelSpec>,
    /// Total characteristic self-weight of the sign (kN); estimated when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_weight_kn: Option<f64>,
}

impl SignGeometry {
    /// Reference area A_ref = b × h (m²)
    pub fn face_area(&self) -> f64 {
        self.width_m * self.height_m
    }

    /// Height above ground of the sign centroid (m)
    pub fn centroid_height(&self) -> f64 {
        self.mounting_height_m - self.height_m / 2.0
    }

    /// Height above ground of the underside of the sign (m)
    pub fn clearance(&self) -> f64 {
        self.mounting_height_m - self.height_m
    }

    pub fn validate(&self, v: &mut Validator<'_>) -> CalcResult<()> {
        v.check_all(
            "geometry.width_m",
            self.width_m,
            &[Constraint::Positive, Constraint::Typical { min: 0.0, max: 50.0 }],
        )?;
        v.check_all(
            "geometry.height_m",
            self.height_m,
            &[Constraint::Positive, Constraint::Typical { min: 0.0, max: 30.0 }],
        )?;
        v.check_all(
            "geometry.depth_m",
            self.depth_m,
            &[Constraint::Positive, Constraint::Typical { min: 0.0, max: 10.0 }],
        )?;
        v.check_all(
            "geometry.mounting_height_m",
            self.mounting_height_m,
            &[Constraint::Positive, Constraint::Typical { min: 2.0, max: 200.0 }],
        )?;
        if self.mounting_height_m < self.height_m {
            return Err(CalcError::invalid_input(
                "geometry.mounting_height_m",
                self.mounting_height_m.to_string(),
                format!(
                    "Top of sign must be at least the sign height ({} m) above ground",
                    self.height_m
                ),
            ));
        }

        if let Some(weight) = self.self_weight_kn {
            v.check("geometry.self_weight_kn", weight, Constraint::NonNegative)?;
        }

        if let Some(panel) = &self.panel {
            panel_material(&panel.material)?;
            v.check_all(
                "geometry.panel.channel_spacing_mm",
                panel.channel_spacing_mm,
                &[Constraint::Positive, Constraint::Typical { min: 100.0, max: 1500.0 }],
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::warnings::{WarningKind, WarningLog};

    fn test_geometry() -> SignGeometry {
        SignGeometry {
            width_m: 4.0,
            height_m: 1.5,
            depth_m: 0.3,
            mounting_height_m: 5.0,
            panel: None,
            self_weight_kn: None,
        }
    }

    #[test]
    fn test_derived_dimensions() {
        let g = test_geometry();
        assert_eq!(g.face_area(), 6.0);
        assert_eq!(g.centroid_height(), 4.25);
        assert_eq!(g.clearance(), 3.5);
    }

    #[test]
    fn test_non_positive_dimensions_rejected() {
        for field in ["width", "height", "depth", "mounting"] {
            let mut g = test_geometry();
            match field {
                "width" => g.width_m = 0.0,
                "height" => g.height_m = -1.0,
                "depth" => g.depth_m = 0.0,
                _ => g.mounting_height_m = 0.0,
            }
            let mut log = WarningLog::new();
            let err = g.validate(&mut Validator::new(&mut log)).unwrap_err();
            assert!(err.field().unwrap().contains(field), "{}", field);
        }
    }

    #[test]
    fn test_sign_below_ground_rejected() {
        let mut g = test_geometry();
        g.mounting_height_m = 1.0;
        let mut log = WarningLog::new();
        let err = g.validate(&mut Validator::new(&mut log)).unwrap_err();
        assert_eq!(err.field(), Some("geometry.mounting_height_m"));
    }

    #[test]
    fn test_deep_sign_is_only_a_warning() {
        let mut g = test_geometry();
        g.depth_m = 29.0;
        let mut log = WarningLog::new();
        g.validate(&mut Validator::new(&mut log)).unwrap();
        assert_eq!(log.count(WarningKind::OutOfRangeInput), 1);
    }

    #[test]
    fn test_unknown_panel_material() {
        let mut g = test_geometry();
        g.panel = Some(PanelSpec {
            material: "perspex_5mm".to_string(),
            channel_spacing_mm: 500.0,
        });
        let mut log = WarningLog::new();
        let err = g.validate(&mut Validator::new(&mut log)).unwrap_err();
        assert_eq!(err.error_code(), "MATERIAL_NOT_FOUND");
    }
}
