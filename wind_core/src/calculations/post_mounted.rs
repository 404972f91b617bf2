//! # Post-Mounted Signs
//!
//! Free-standing signs on one or more posts set in concrete pads.
//!
//! ## Force coefficient
//!
//! Signboard c_f multiplied by the free-standing adjustment from
//! [`EngineSettings::freestanding_force_factor`](crate::EngineSettings).
//! That multiplier is engineering judgement, not a published coefficient,
//! and every result that uses it carries a warning saying so.
//!
//! Each post adds its own drag (c_f = 0.7 circular, 2.0 square) over its
//! full height from ground to the top of the sign, at the sign's peak
//! pressure.
//!
//! ## Verification
//!
//! ```text
//! M_k   = F_sign × z_centroid + F_post × H / 2
//! σ     = (γ_Q M_k / n) / W_el                 ≤ f_d
//! p     = (N_Ed + M_base / B) / B²             ≤ q_allow
//! ```
//!
//! The foundation check is a rigid-pad, linear-bearing estimate only.

use serde::{Deserialize, Serialize};

use super::force::{structural_factors, wall_force_coefficient, ForceCoefficients, PostForce};
use super::{Loading, MountingVariant, StageContext, VerificationDetail};
use crate::equations::beam::bending_stress;
use crate::equations::section::{
    chs_area, chs_section_modulus, chs_shear_area, circle_area, circle_section_modulus,
    rhs_area, rhs_section_modulus, rhs_shear_area, square_area, square_section_modulus,
};
use crate::errors::CalcResult;
use crate::materials::{structural_material, MaterialKind, StructuralMaterial};
use crate::mounting::{PostMountedConfig, PostSection, PostShape};
use crate::references::{design, en1991};
use crate::result::{CheckList, UtilizationCheck};
use crate::units::{kn_to_n, knm_to_nmm};
use crate::warnings::{Stage, WarningKind, WarningLog};

/// Embedment below which the foundation is rated inadequate (m)
pub const MIN_EMBEDMENT_M: f64 = 1.0;

/// Embedment below which the foundation is rated marginal (m)
pub const RECOMMENDED_EMBEDMENT_M: f64 = 1.5;

/// Cross-section properties of one post (mm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PostProperties {
    pub area_mm2: f64,
    pub section_modulus_mm3: f64,
    /// Effective shear area giving the peak shear stress
    pub shear_area_mm2: f64,
}

impl PostProperties {
    /// Hollow metal sections use the wall thickness; timber posts are solid
    pub fn of(section: &PostSection, hollow: bool) -> Self {
        let d = section.size_mm;
        let thickness = section.thickness_mm.filter(|_| hollow);
        match (section.shape, thickness) {
            (PostShape::Circular, Some(t)) => PostProperties {
                area_mm2: chs_area(d, t),
                section_modulus_mm3: chs_section_modulus(d, t),
                shear_area_mm2: chs_shear_area(d, t),
            },
            (PostShape::Square, Some(t)) => PostProperties {
                area_mm2: rhs_area(d, d, t),
                section_modulus_mm3: rhs_section_modulus(d, d, t),
                shear_area_mm2: rhs_shear_area(d, t),
            },
            // τ_max = 4V / 3A
            (PostShape::Circular, None) => PostProperties {
                area_mm2: circle_area(d),
                section_modulus_mm3: circle_section_modulus(d),
                shear_area_mm2: 0.75 * circle_area(d),
            },
            // τ_max = 3V / 2A
            (PostShape::Square, None) => PostProperties {
                area_mm2: square_area(d),
                section_modulus_mm3: square_section_modulus(d),
                shear_area_mm2: square_area(d) * 2.0 / 3.0,
            },
        }
    }
}

/// How the embedment depth compares with the rule-of-thumb minimums
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmbedmentRating {
    Adequate,
    Marginal,
    Inadequate,
}

impl EmbedmentRating {
    pub fn of(depth_m: f64) -> Self {
        if depth_m < MIN_EMBEDMENT_M {
            EmbedmentRating::Inadequate
        } else if depth_m < RECOMMENDED_EMBEDMENT_M {
            EmbedmentRating::Marginal
        } else {
            EmbedmentRating::Adequate
        }
    }
}

/// Simplified pad foundation under one post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundationCheck {
    pub width_m: f64,
    pub depth_m: f64,
    /// Sign share + post + concrete pad, unfactored (kN)
    pub axial_characteristic_kn: f64,
    /// γ_G,sup × axial (kN)
    pub axial_design_kn: f64,
    /// Design moment at the underside of the pad (kNm)
    pub base_moment_knm: f64,
    /// (N_Ed + M / B) / B² (kPa)
    pub bearing_pressure_kpa: f64,
    pub bearing_capacity_kpa: f64,
    /// M_base / (γ_G,inf × axial) (m)
    pub eccentricity_m: f64,
    /// B / 6 (m)
    pub middle_third_limit_m: f64,
    pub embedment: EmbedmentRating,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostMountedDetail {
    /// Post height above ground to the top of the sign, H (m)
    pub post_height_m: f64,
    /// Lever arm of the sign force, the sign centroid height (m)
    pub sign_lever_arm_m: f64,
    /// Characteristic overturning moment at ground level, all posts (kNm)
    pub overturning_moment_knm: f64,
    /// γ_Q × M_k / n (kNm)
    pub design_moment_per_post_knm: f64,
    /// γ_Q × F_w / n (kN)
    pub design_shear_per_post_kn: f64,
    pub section: PostProperties,
    pub bending_stress_mpa: f64,
    pub shear_stress_mpa: f64,
    pub foundation: FoundationCheck,
}

/// Ground-level overturning moment from the sign and the posts (kNm)
#[inline]
pub fn ground_moment_knm(sign_force_kn: f64, centroid_m: f64, post_force_kn: f64, post_height_m: f64) -> f64 {
    sign_force_kn * centroid_m + post_force_kn * post_height_m / 2.0
}

/// Linear bearing pressure under a square pad: (N + M / B) / B² (kPa)
#[inline]
pub fn bearing_pressure_kpa(axial_kn: f64, moment_knm: f64, width_m: f64) -> f64 {
    (axial_kn + moment_knm / width_m) / (width_m * width_m)
}

fn section_references(material: &StructuralMaterial) -> (&'static str, &'static str) {
    match material.kind {
        MaterialKind::Steel => (design::STEEL_BENDING, design::STEEL_SHEAR),
        MaterialKind::Aluminium => (design::ALUMINIUM_BENDING, design::ALUMINIUM_BENDING),
        MaterialKind::Timber => (design::TIMBER_BENDING, design::TIMBER_SHEAR),
    }
}

impl MountingVariant for PostMountedConfig {
    fn force_coefficients(&self, ctx: &StageContext<'_>, log: &mut WarningLog) -> ForceCoefficients {
        let g = ctx.geometry;
        let stage = Stage::ForceCoefficient;
        let (ratio, cf) = wall_force_coefficient(g.height_m, g.depth_m);
        let cf = cf.resolve(log, stage);

        let adjustment = ctx.settings.freestanding_force_factor;
        log.warn(
            WarningKind::ConservativeAssumption,
            stage,
            format!(
                "Free-standing adjustment ×{:.2} applied to c_f; this is engineering judgement pending validation",
                adjustment
            ),
        );
        let (c_s, c_d) = structural_factors(ctx.site.terrain, ctx.wind.reference_height_m, g, ctx.settings, log);

        log.warn(
            WarningKind::ConservativeAssumption,
            stage,
            "Post wind force taken over the full post height at the peak pressure for the top of the sign",
        );
        let post = PostForce::calculate(
            self.post_section.shape,
            self.post_section.size_mm,
            self.post_count,
            g.mounting_height_m,
            ctx.peak_pressure_pa(),
        );

        ForceCoefficients::new(
            ratio,
            cf,
            adjustment,
            g.face_area(),
            c_s,
            c_d,
            ctx.peak_pressure_pa(),
            Some(post),
            en1991::SIGNBOARD,
        )
    }

    fn verify(
        &self,
        ctx: &StageContext<'_>,
        loading: &Loading<'_>,
        checks: &mut CheckList<'_>,
    ) -> CalcResult<VerificationDetail> {
        let g = ctx.geometry;
        let n = f64::from(self.post_count);
        let force = loading.force;
        let post_height = g.mounting_height_m;
        let post_force_kn = force.post.as_ref().map_or(0.0, |p| p.force_kn);

        let m_k = ground_moment_knm(force.sign_force_kn, g.centroid_height(), post_force_kn, post_height);
        let m_post = loading.strength.wind(m_k) / n;
        let v_post = loading.design_wind_kn() / n;

        // Post member
        let material = structural_material(&self.post_section.material)?;
        let props = PostProperties::of(&self.post_section, material.kind.is_metal());
        let sigma = bending_stress(knm_to_nmm(m_post), props.section_modulus_mm3);
        let tau = kn_to_n(v_post) / props.shear_area_mm2;
        let (bending_ref, shear_ref) = section_references(material);
        checks.push(UtilizationCheck::new(
            "post_bending",
            "Post bending at ground level",
            sigma,
            material.design_bending_strength(),
            "MPa",
            bending_ref,
        ));
        checks.push(UtilizationCheck::new(
            "post_shear",
            "Post shear at ground level",
            tau,
            material.design_shear_strength(),
            "MPa",
            shear_ref,
        ));

        // Foundation
        let b = self.foundation_width_m;
        let d = self.foundation_depth_m;
        let post_weight = props.area_mm2 * 1.0e-6 * post_height * material.unit_weight_kn_m3();
        let pad_weight = b * b * d * ctx.settings.concrete_unit_weight_kn_m3;
        let axial_k = loading.self_weight_kn / n + post_weight + pad_weight;
        let axial_ed = loading.strength.permanent(axial_k);
        let base_moment = m_post + v_post * d;
        let pressure = bearing_pressure_kpa(axial_ed, base_moment, b);
        checks.push(UtilizationCheck::new(
            "foundation_bearing",
            "Foundation bearing pressure",
            pressure,
            self.soil_bearing_capacity_kpa,
            "kPa",
            design::BEARING,
        ));

        let eccentricity = base_moment / loading.equilibrium.permanent(axial_k);
        let middle_third = b / 6.0;
        if eccentricity > middle_third {
            checks.warn(
                WarningKind::ConservativeAssumption,
                format!(
                    "Load eccentricity {:.2} m exceeds B/6 = {:.2} m; pad partly lifts off and linear bearing underestimates the peak pressure",
                    eccentricity, middle_third
                ),
            );
        }

        let embedment = EmbedmentRating::of(d);
        match embedment {
            EmbedmentRating::Inadequate => checks.warn(
                WarningKind::OutOfRangeInput,
                format!("Foundation depth {:.2} m is too shallow; at least {:.1} m recommended", d, MIN_EMBEDMENT_M),
            ),
            EmbedmentRating::Marginal => checks.warn(
                WarningKind::OutOfRangeInput,
                format!(
                    "Foundation depth {:.2} m is marginal; consider at least {:.1} m",
                    d, RECOMMENDED_EMBEDMENT_M
                ),
            ),
            EmbedmentRating::Adequate => {}
        }
        checks.warn(
            WarningKind::ConservativeAssumption,
            "Foundation check is simplified (rigid pad, linear bearing); detailed design by a structural engineer is required",
        );

        Ok(VerificationDetail::PostMounted(PostMountedDetail {
            post_height_m: post_height,
            sign_lever_arm_m: g.centroid_height(),
            overturning_moment_knm: m_k,
            design_moment_per_post_knm: m_post,
            design_shear_per_post_kn: v_post,
            section: props,
            bending_stress_mpa: sigma,
            shear_stress_mpa: tau,
            foundation: FoundationCheck {
                width_m: b,
                depth_m: d,
                axial_characteristic_kn: axial_k,
                axial_design_kn: axial_ed,
                base_moment_knm: base_moment,
                bearing_pressure_kpa: pressure,
                bearing_capacity_kpa: self.soil_bearing_capacity_kpa,
                eccentricity_m: eccentricity,
                middle_third_limit_m: middle_third,
                embedment,
            },
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ground_moment() {
        // 5 kN at 3.5 m + 0.4 kN on 4 m posts acting at 2 m
        let m = ground_moment_knm(5.0, 3.5, 0.4, 4.0);
        assert!((m - 18.3).abs() < 1e-12);
    }

    #[test]
    fn test_bearing_pressure() {
        // (20 + 10 / 1.0) / 1.0² = 30 kPa
        assert!((bearing_pressure_kpa(20.0, 10.0, 1.0) - 30.0).abs() < 1e-12);
        // (20 + 10 / 2.0) / 4.0 = 6.25 kPa
        assert!((bearing_pressure_kpa(20.0, 10.0, 2.0) - 6.25).abs() < 1e-12);
    }

    #[test]
    fn test_embedment_rating() {
        assert_eq!(EmbedmentRating::of(0.8), EmbedmentRating::Inadequate);
        assert_eq!(EmbedmentRating::of(1.0), EmbedmentRating::Marginal);
        assert_eq!(EmbedmentRating::of(1.5), EmbedmentRating::Adequate);
    }

    #[test]
    fn test_hollow_and_solid_properties() {
        let chs = PostProperties::of(&PostSection {
            shape: PostShape::Circular,
            size_mm: 114.3,
            thickness_mm: Some(5.0),
            material: "S275".to_string(),
        }, true);
        assert!((chs.section_modulus_mm3 - 44_955.0).abs() / 44_955.0 < 1e-3);

        let timber = PostProperties::of(&PostSection {
            shape: PostShape::Square,
            size_mm: 150.0,
            thickness_mm: Some(10.0),
            material: "C24".to_string(),
        }, false);
        // 150³ / 6
        assert!((timber.section_modulus_mm3 - 562_500.0).abs() < 1e-6);
        assert!((timber.shear_area_mm2 - 15_000.0).abs() < 1e-6);
    }
}
