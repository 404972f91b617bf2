//! # Projecting Signs
//!
//! Signs cantilevered off a wall on hollow-section brackets, face
//! perpendicular to the wall. Wind on the face loads every bracket in
//! horizontal shear at a lever arm equal to the projection.
//!
//! ## Force coefficient
//!
//! Flat plate normal to the wind, c_f = 2.0, with c_s = c_d = 1.0.
//!
//! ## Verification
//!
//! | Element | Demand | Capacity |
//! |---------|--------|----------|
//! | Anchors | N_Ed, V_Ed per anchor | N_Rk/γ_M, V_Rk/γ_M, linear interaction |
//! | Bracket bending | M_Ed / W_el | f_y / γ_M |
//! | Bracket shear | V_Ed / (2ht) | f_y / √3 / γ_M |
//! | Tip deflection (SLS) | F_k L³ / 3EI per bracket | min(L/150, 20 mm) |

use serde::{Deserialize, Serialize};

use super::force::{ForceCoefficients, FLAT_PLATE_CF};
use super::{Loading, MountingVariant, StageContext, VerificationDetail};
use crate::equations::beam::{bending_stress, cantilever_point_load_deflection, cantilever_point_load_moment};
use crate::equations::linear_interaction;
use crate::equations::section::{rhs_moment_of_inertia, rhs_section_modulus, rhs_shear_area};
use crate::errors::CalcResult;
use crate::materials::{structural_material, MaterialKind};
use crate::mounting::{AnchorCapacity, ProjectingConfig};
use crate::references::{design, en1991};
use crate::result::{CheckList, UtilizationCheck};
use crate::units::{kn_to_n, knm_to_nmm, m_to_mm};
use crate::warnings::{Stage, WarningKind, WarningLog};

/// Design forces at the root of one bracket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BracketForces {
    /// Horizontal shear V_Ed (kN)
    pub shear_kn: f64,
    /// Root moment M_Ed = V_Ed × e (kNm)
    pub moment_knm: f64,
    /// Vertical load from self-weight (kN)
    pub vertical_kn: f64,
    /// Push-pull between brackets from M_wall / s (kN); absent for one bracket
    pub couple_force_kn: Option<f64>,
}

/// Design forces on one anchor (kN)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorForces {
    pub tension_kn: f64,
    pub shear_kn: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectingDetail {
    /// Projection from the wall to the sign, e (m)
    pub bracket_length_m: f64,
    pub bracket_forces: BracketForces,
    /// Total design moment at the wall F_Ed × e (kNm)
    pub wall_moment_knm: f64,
    pub anchor_forces: AnchorForces,
    /// Linear anchor interaction
    pub anchor_interaction: f64,
    pub second_moment_mm4: f64,
    pub section_modulus_mm3: f64,
    pub bending_stress_mpa: f64,
    pub shear_stress_mpa: f64,
    /// Characteristic tip deflection (mm)
    pub tip_deflection_mm: f64,
    pub deflection_limit_mm: f64,
    /// Characteristic overturning moment at the wall F_k × e (kNm)
    pub overturning_moment_knm: f64,
}

/// Share the design actions between `bracket_count` brackets
pub fn bracket_forces(
    design_wind_kn: f64,
    design_self_weight_kn: f64,
    projection_m: f64,
    bracket_count: u32,
    bracket_spacing_m: f64,
) -> BracketForces {
    let n = f64::from(bracket_count);
    let shear_kn = design_wind_kn / n;
    let couple_force_kn = (bracket_count >= 2)
        .then(|| cantilever_point_load_moment(design_wind_kn, projection_m) / bracket_spacing_m);
    BracketForces {
        shear_kn,
        moment_knm: cantilever_point_load_moment(shear_kn, projection_m),
        vertical_kn: design_self_weight_kn / n,
        couple_force_kn,
    }
}

/// Forces on one anchor of a bracket's wall plate.
///
/// The root moment is resisted by half the anchors in tension at the row
/// pitch; vertical load is shared equally.
pub fn anchor_forces(forces: &BracketForces, anchors: &AnchorCapacity) -> AnchorForces {
    let n_fix = f64::from(anchors.fixings_per_bracket);
    AnchorForces {
        tension_kn: forces.moment_knm / (anchors.fixing_pitch_m * n_fix / 2.0)
            + forces.vertical_kn / n_fix,
        shear_kn: forces.shear_kn / n_fix,
    }
}

impl MountingVariant for ProjectingConfig {
    fn force_coefficients(&self, ctx: &StageContext<'_>, log: &mut WarningLog) -> ForceCoefficients {
        let g = ctx.geometry;
        log.warn(
            WarningKind::ConservativeAssumption,
            Stage::ForceCoefficient,
            "Projecting sign treated as a flat plate normal to the wind (c_f = 2.0, c_s = c_d = 1.0)",
        );
        ForceCoefficients::new(
            g.height_m / g.depth_m,
            FLAT_PLATE_CF,
            1.0,
            g.face_area(),
            1.0,
            1.0,
            ctx.peak_pressure_pa(),
            None,
            en1991::FLAT_PLATE,
        )
    }

    fn verify(
        &self,
        ctx: &StageContext<'_>,
        loading: &Loading<'_>,
        checks: &mut CheckList<'_>,
    ) -> CalcResult<VerificationDetail> {
        let e = ctx.geometry.depth_m;
        let f_ed = loading.design_wind_kn();
        let forces = bracket_forces(
            f_ed,
            loading.design_permanent_kn(),
            e,
            self.bracket_count,
            self.bracket_spacing_m,
        );
        if forces.couple_force_kn.is_none() {
            checks.warn(
                WarningKind::ConservativeAssumption,
                "Single bracket: no moment couple between brackets, root moment taken by the anchors alone",
            );
        }

        // Anchors
        let a = &self.anchor_capacity;
        let anchors = anchor_forces(&forces, a);
        let n_rd = a.tension_kn / a.gamma_m;
        let v_rd = a.shear_kn / a.gamma_m;
        let anchor_interaction = linear_interaction(anchors.tension_kn, n_rd, anchors.shear_kn, v_rd);
        checks.push(UtilizationCheck::new(
            "anchor_tension",
            "Anchor tension",
            anchors.tension_kn,
            n_rd,
            "kN",
            design::ANCHOR_INTERACTION,
        ));
        checks.push(UtilizationCheck::new(
            "anchor_shear",
            "Anchor shear",
            anchors.shear_kn,
            v_rd,
            "kN",
            design::ANCHOR_INTERACTION,
        ));
        checks.push(UtilizationCheck::ratio(
            "anchor_interaction",
            "Anchor combined tension and shear",
            anchor_interaction,
            design::ANCHOR_INTERACTION,
        ));

        // Bracket member
        let s = &self.bracket_section;
        let material = structural_material(&s.material)?;
        let i = rhs_moment_of_inertia(s.width_mm, s.depth_mm, s.thickness_mm);
        let w = rhs_section_modulus(s.width_mm, s.depth_mm, s.thickness_mm);
        let sigma = bending_stress(knm_to_nmm(forces.moment_knm), w);
        let tau = kn_to_n(forces.shear_kn) / rhs_shear_area(s.depth_mm, s.thickness_mm);
        let (bending_ref, shear_ref) = match material.kind {
            MaterialKind::Aluminium => (design::ALUMINIUM_BENDING, design::ALUMINIUM_BENDING),
            _ => (design::STEEL_BENDING, design::STEEL_SHEAR),
        };
        checks.push(UtilizationCheck::new(
            "bracket_bending",
            "Bracket bending",
            sigma,
            material.design_bending_strength(),
            "MPa",
            bending_ref,
        ));
        checks.push(UtilizationCheck::new(
            "bracket_shear",
            "Bracket shear",
            tau,
            material.design_shear_strength(),
            "MPa",
            shear_ref,
        ));

        // Serviceability, characteristic load
        let length_mm = m_to_mm(e);
        let p_k = kn_to_n(loading.force.characteristic_force_kn / f64::from(self.bracket_count));
        let deflection = cantilever_point_load_deflection(p_k, length_mm, material.elastic_modulus_mpa, i);
        let limit = (length_mm / ctx.settings.bracket_deflection_ratio).min(ctx.settings.bracket_deflection_cap_mm);
        checks.push(UtilizationCheck::new(
            "bracket_deflection",
            "Bracket tip deflection",
            deflection,
            limit,
            "mm",
            design::DEFLECTION,
        ));

        let overturning_moment_knm = cantilever_point_load_moment(loading.force.characteristic_force_kn, e);

        Ok(VerificationDetail::Projecting(ProjectingDetail {
            bracket_length_m: e,
            bracket_forces: forces,
            wall_moment_knm: cantilever_point_load_moment(f_ed, e),
            anchor_forces: anchors,
            anchor_interaction,
            second_moment_mm4: i,
            section_modulus_mm3: w,
            bending_stress_mpa: sigma,
            shear_stress_mpa: tau,
            tip_deflection_mm: deflection,
            deflection_limit_mm: limit,
            overturning_moment_knm,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_forces() {
        // 6 kN over 2 brackets at 1.2 m projection
        let f = bracket_forces(6.0, 1.35, 1.2, 2, 0.8);
        assert!((f.shear_kn - 3.0).abs() < 1e-12);
        assert!((f.moment_knm - 3.6).abs() < 1e-12);
        assert!((f.vertical_kn - 0.675).abs() < 1e-12);
        // M_wall = 7.2 kNm over 0.8 m
        assert!((f.couple_force_kn.unwrap() - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_bracket_has_no_couple() {
        let f = bracket_forces(6.0, 1.0, 1.0, 1, 0.8);
        assert!(f.couple_force_kn.is_none());
        assert_eq!(f.shear_kn, 6.0);
    }

    #[test]
    fn test_anchor_forces() {
        let forces = BracketForces {
            shear_kn: 3.0,
            moment_knm: 0.6,
            vertical_kn: 0.4,
            couple_force_kn: None,
        };
        let anchors = AnchorCapacity {
            tension_kn: 12.0,
            shear_kn: 8.0,
            gamma_m: 1.5,
            fixings_per_bracket: 4,
            fixing_pitch_m: 0.15,
        };
        let a = anchor_forces(&forces, &anchors);
        // 0.6 / (0.15 × 2) + 0.4 / 4 = 2.1 kN
        assert!((a.tension_kn - 2.1).abs() < 1e-12);
        assert!((a.shear_kn - 0.75).abs() < 1e-12);
    }
}
