//! # Force Coefficients
//!
//! Shared pieces of the force coefficient stage: the signboard force
//! coefficient, the structural factor grids and the characteristic force
//!
//! ```text
//! F_w = q_p × c_s × c_d × c_f × A_ref
//! ```
//!
//! Each mounting variant picks which of these it applies (see
//! [`super::MountingVariant::force_coefficients`]).
//!
//! The signboard coefficient is log-linear in h/d between the tabulated
//! anchors 0.68 (h/d = 0.25), 0.935 (h/d = 1) and 1.30 (h/d = 5):
//!
//! ```rust
//! use wind_core::calculations::force::signboard_force_coefficient;
//!
//! assert!((signboard_force_coefficient(1.0) - 0.935).abs() < 1e-12);
//! assert!((signboard_force_coefficient(5.0) - 1.30).abs() < 1e-3);
//! ```

use serde::{Deserialize, Serialize};

use crate::geometry::SignGeometry;
use crate::mounting::PostShape;
use crate::references::{en1991, p394};
use crate::result::NamedFactor;
use crate::settings::EngineSettings;
use crate::site::TerrainCategory;
use crate::tables::{dynamic_factor, size_factor, Axis, Interpolated, Scale};
use crate::units::pa_to_kpa;
use crate::warnings::{Stage, WarningKind, WarningLog};

/// c_f at h/d = 1
pub const SIGNBOARD_CF_AT_UNITY: f64 = 0.935;

/// log10 slope for h/d ≤ 1
pub const SIGNBOARD_SLOPE_SQUAT: f64 = 0.4234;

/// log10 slope for h/d > 1
pub const SIGNBOARD_SLOPE_TALL: f64 = 0.5222;

/// Flat plate normal to the wind, used for projecting signs
pub const FLAT_PLATE_CF: f64 = 2.0;

/// Drag coefficient of a circular post
pub const CIRCULAR_POST_CF: f64 = 0.7;

/// Drag coefficient of a sharp-edged square post
pub const SQUARE_POST_CF: f64 = 2.0;

const ASPECT_RATIO: Axis = Axis {
    name: "h/d",
    unit: "-",
    breakpoints: &[0.25, 5.0],
    scale: Scale::Log,
};

/// c_f = A + B log10(h/d) for an aspect ratio already inside [0.25, 5]
#[inline]
pub fn signboard_force_coefficient(h_over_d: f64) -> f64 {
    let slope = if h_over_d <= 1.0 {
        SIGNBOARD_SLOPE_SQUAT
    } else {
        SIGNBOARD_SLOPE_TALL
    };
    SIGNBOARD_CF_AT_UNITY + slope * h_over_d.log10()
}

/// Signboard c_f for a sign of `height` × `depth`, clamping h/d to the tabulated range
pub fn wall_force_coefficient(height: f64, depth: f64) -> (f64, Interpolated) {
    let ratio = height / depth;
    let (used, clamp) = ASPECT_RATIO.clamp("Signboard force coefficient", ratio);
    let cf = Interpolated {
        value: signboard_force_coefficient(used),
        clamps: clamp.into_iter().collect(),
    };
    (ratio, cf)
}

/// Characteristic wind force F_w = q_p c_s c_d c_f A_ref (kN)
#[inline]
pub fn characteristic_force_kn(
    peak_pressure_pa: f64,
    size_factor: f64,
    dynamic_factor: f64,
    force_coefficient: f64,
    area_m2: f64,
) -> f64 {
    pa_to_kpa(peak_pressure_pa) * size_factor * dynamic_factor * force_coefficient * area_m2
}

/// Size factor c_s and dynamic factor c_d for the sign
pub fn structural_factors(
    terrain: TerrainCategory,
    reference_height_m: f64,
    geometry: &SignGeometry,
    settings: &EngineSettings,
    log: &mut WarningLog,
) -> (f64, f64) {
    let stage = Stage::ForceCoefficient;
    let c_s = size_factor(terrain, reference_height_m, geometry.width_m + geometry.height_m)
        .resolve(log, stage);
    log.warn(
        WarningKind::ConservativeAssumption,
        stage,
        format!(
            "Dynamic factor based on assumed structural damping δ_s = {:.2}",
            settings.structural_damping
        ),
    );
    let c_d = dynamic_factor(geometry.mounting_height_m, settings.structural_damping)
        .resolve(log, stage);
    (c_s, c_d)
}

/// Wind on the support posts over their full height
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostForce {
    pub shape: PostShape,
    /// c_f of the post section
    pub drag_coefficient: f64,
    /// Loaded post length, ground to the top of the sign (m)
    pub exposed_height_m: f64,
    /// Total exposed area of all posts (m²)
    pub exposed_area_m2: f64,
    /// Characteristic force on all posts (kN)
    pub force_kn: f64,
}

impl PostForce {
    pub fn calculate(
        shape: PostShape,
        size_mm: f64,
        post_count: u32,
        exposed_height_m: f64,
        peak_pressure_pa: f64,
    ) -> Self {
        let drag_coefficient = match shape {
            PostShape::Circular => CIRCULAR_POST_CF,
            PostShape::Square => SQUARE_POST_CF,
        };
        let exposed_area_m2 = f64::from(post_count) * size_mm / 1000.0 * exposed_height_m;
        let force_kn = characteristic_force_kn(peak_pressure_pa, 1.0, 1.0, drag_coefficient, exposed_area_m2);
        PostForce {
            shape,
            drag_coefficient,
            exposed_height_m,
            exposed_area_m2,
            force_kn,
        }
    }

    pub fn reference(&self) -> &'static str {
        match self.shape {
            PostShape::Circular => en1991::CIRCULAR_CYLINDER,
            PostShape::Square => en1991::RECTANGULAR_SECTION,
        }
    }
}

/// Output of the force coefficient stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForceCoefficients {
    /// h/d as entered
    pub aspect_ratio: f64,
    /// c_f before any variant adjustment
    pub base_force_coefficient: f64,
    /// Free-standing multiplier applied to the base coefficient (1.0 if none)
    pub adjustment_factor: f64,
    /// c_f applied to the sign face
    pub force_coefficient: f64,
    /// A_ref = b × h (m²)
    pub reference_area_m2: f64,
    pub size_factor: f64,
    pub dynamic_factor: f64,
    /// Force on the sign face (kN)
    pub sign_force_kn: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<PostForce>,
    /// Sign plus post force (kN)
    pub characteristic_force_kn: f64,
    /// Source of the force coefficient
    pub reference: String,
}

impl ForceCoefficients {
    /// Assemble the stage output from its factors
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        aspect_ratio: f64,
        base_force_coefficient: f64,
        adjustment_factor: f64,
        reference_area_m2: f64,
        size_factor: f64,
        dynamic_factor: f64,
        peak_pressure_pa: f64,
        post: Option<PostForce>,
        reference: &str,
    ) -> Self {
        let force_coefficient = base_force_coefficient * adjustment_factor;
        let sign_force_kn = characteristic_force_kn(
            peak_pressure_pa,
            size_factor,
            dynamic_factor,
            force_coefficient,
            reference_area_m2,
        );
        let characteristic_force_kn = sign_force_kn + post.as_ref().map_or(0.0, |p| p.force_kn);
        tracing::debug!(
            c_f = force_coefficient,
            c_s = size_factor,
            c_d = dynamic_factor,
            f_sign = sign_force_kn,
            f_total = characteristic_force_kn,
            "force coefficient stage"
        );
        ForceCoefficients {
            aspect_ratio,
            base_force_coefficient,
            adjustment_factor,
            force_coefficient,
            reference_area_m2,
            size_factor,
            dynamic_factor,
            sign_force_kn,
            post,
            characteristic_force_kn,
            reference: reference.to_string(),
        }
    }

    pub fn factors(&self) -> Vec<NamedFactor> {
        let s = Stage::ForceCoefficient;
        let mut factors = vec![
            NamedFactor::new("Aspect ratio", "h/d", self.aspect_ratio, "", s, &self.reference),
            NamedFactor::new("Force coefficient", "c_f", self.force_coefficient, "", s, &self.reference),
            NamedFactor::new("Reference area", "A_ref", self.reference_area_m2, "m²", s, en1991::WIND_FORCE),
            NamedFactor::new("Size factor", "c_s", self.size_factor, "", s, p394::SIZE_FACTOR),
            NamedFactor::new("Dynamic factor", "c_d", self.dynamic_factor, "", s, p394::DYNAMIC_FACTOR),
            NamedFactor::new("Sign wind force", "F_w,sign", self.sign_force_kn, "kN", s, en1991::WIND_FORCE),
        ];
        if self.adjustment_factor != 1.0 {
            factors.insert(
                1,
                NamedFactor::new("Free-standing adjustment", "k_fs", self.adjustment_factor, "", s, en1991::SIGNBOARD),
            );
        }
        if let Some(post) = &self.post {
            factors.push(NamedFactor::new("Post force coefficient", "c_f,post", post.drag_coefficient, "", s, post.reference()));
            factors.push(NamedFactor::new("Post wind force", "F_w,post", post.force_kn, "kN", s, post.reference()));
        }
        factors.push(NamedFactor::new(
            "Characteristic wind force",
            "F_w",
            self.characteristic_force_kn,
            "kN",
            s,
            en1991::WIND_FORCE,
        ));
        factors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signboard_anchors() {
        assert!((signboard_force_coefficient(0.25) - 0.68).abs() < 1e-3);
        assert!((signboard_force_coefficient(1.0) - 0.935).abs() < 1e-12);
        assert!((signboard_force_coefficient(5.0) - 1.30).abs() < 1e-3);
    }

    #[test]
    fn test_sheffield_coefficient() {
        // h/d = 27/29 = 0.931: 0.935 + 0.4234 × log10(0.931) ≈ 0.922
        let (ratio, cf) = wall_force_coefficient(27.0, 29.0);
        assert!((ratio - 0.931).abs() < 1e-3);
        assert!((cf.value - 0.922).abs() < 1e-3);
        assert!(cf.clamps.is_empty());
    }

    #[test]
    fn test_slender_sign_clamped() {
        let (ratio, cf) = wall_force_coefficient(2.0, 0.1);
        assert_eq!(ratio, 20.0);
        assert!((cf.value - 1.30).abs() < 1e-3);
        assert_eq!(cf.clamps.len(), 1);

        let mut log = WarningLog::new();
        cf.resolve(&mut log, Stage::ForceCoefficient);
        assert_eq!(log.count(WarningKind::BoundaryClamped), 1);
    }

    #[test]
    fn test_characteristic_force() {
        // 600 Pa × 1.3 × 6 m² = 4.68 kN
        let f = characteristic_force_kn(600.0, 1.0, 1.0, 1.3, 6.0);
        assert!((f - 4.68).abs() < 1e-9);
    }

    #[test]
    fn test_post_force() {
        // 2 × 0.1143 m × 3 m = 0.6858 m²; 0.6 kPa × 0.7 × 0.6858 = 0.288 kN
        let post = PostForce::calculate(PostShape::Circular, 114.3, 2, 3.0, 600.0);
        assert!((post.exposed_area_m2 - 0.6858).abs() < 1e-9);
        assert!((post.force_kn - 0.288036).abs() < 1e-6);

        let square = PostForce::calculate(PostShape::Square, 114.3, 2, 3.0, 600.0);
        assert!(square.force_kn > post.force_kn);
    }

    #[test]
    fn test_total_includes_post() {
        let post = PostForce::calculate(PostShape::Circular, 100.0, 1, 2.0, 1000.0);
        let post_kn = post.force_kn;
        let f = ForceCoefficients::new(1.0, 0.935, 1.1, 4.0, 1.0, 1.0, 1000.0, Some(post), en1991::SIGNBOARD);
        assert!((f.force_coefficient - 1.0285).abs() < 1e-9);
        assert!((f.characteristic_force_kn - (f.sign_force_kn + post_kn)).abs() < 1e-12);
        assert!(f.factors().iter().any(|n| n.symbol == "k_fs"));
    }
}
