//! # Wall-Mounted Signs
//!
//! Fascia signs fixed flat to a wall through a grid of fixings.
//!
//! ## Force coefficient
//!
//! Signboard c_f from h/d, with the size and dynamic factors from their
//! grids (P394 Stage 8).
//!
//! ## Verification
//!
//! Every fixing takes an equal share of the design wind force in tension.
//! The sign's self-weight hangs at half the box depth from the wall, so the
//! top row takes an extra pull from that eccentric moment:
//!
//! ```text
//! T_Ed = F_Ed / n + (G_Ed · d/2) / (lever · n_row)
//! V_Ed = G_Ed / n
//! η    = √((T_Ed / N_Rd)² + (V_Ed / V_Rd)²)
//! ```

use serde::{Deserialize, Serialize};

use super::force::{structural_factors, wall_force_coefficient, ForceCoefficients};
use super::{Loading, MountingVariant, StageContext, VerificationDetail};
use crate::equations::quadratic_interaction;
use crate::errors::CalcResult;
use crate::geometry::SignGeometry;
use crate::mounting::{FixingLayout, WallMountedConfig};
use crate::references::{design, en1991};
use crate::result::{CheckList, UtilizationCheck};
use crate::settings::FixingDefaults;
use crate::warnings::{Stage, WarningKind, WarningLog};

/// Design forces on the most heavily loaded fixing (kN)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixingForces {
    pub tension_kn: f64,
    pub shear_kn: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallMountedDetail {
    /// Layout actually checked
    pub layout: FixingLayout,
    /// True when the layout came from the settings defaults
    pub layout_assumed: bool,
    /// Design wind force F_Ed (kN)
    pub design_wind_force_kn: f64,
    /// Design self-weight G_Ed (kN)
    pub design_self_weight_kn: f64,
    /// Lever arm of self-weight from the wall face (m)
    pub self_weight_eccentricity_m: f64,
    pub fixing_forces: FixingForces,
    /// N_Rd = N_Rk / γ_M (kN)
    pub tension_resistance_kn: f64,
    /// V_Rd = V_Rk / γ_M (kN)
    pub shear_resistance_kn: f64,
    pub interaction: f64,
}

/// Fixing grid assumed when none is given: top and bottom rows at the sign
/// edges, fixings at the default pitch plus one
pub fn default_layout(geometry: &SignGeometry, defaults: &FixingDefaults) -> FixingLayout {
    let per_row = ((geometry.width_m / defaults.spacing_m).ceil() as u32).saturating_add(1);
    FixingLayout {
        rows: 2,
        fixings_per_row: per_row,
        row_spacing_m: geometry.height_m,
        tension_capacity_kn: defaults.tension_capacity_kn,
        shear_capacity_kn: defaults.shear_capacity_kn,
        gamma_m: defaults.gamma_m,
    }
}

/// Design tension and shear on the critical (top-row) fixing
pub fn fixing_forces(
    layout: &FixingLayout,
    design_wind_kn: f64,
    design_self_weight_kn: f64,
    eccentricity_m: f64,
) -> FixingForces {
    let n = f64::from(layout.total());
    let eccentric_pull = design_self_weight_kn * eccentricity_m
        / layout.row_spacing_m
        / f64::from(layout.fixings_per_row);
    FixingForces {
        tension_kn: design_wind_kn / n + eccentric_pull,
        shear_kn: design_self_weight_kn / n,
    }
}

impl MountingVariant for WallMountedConfig {
    fn force_coefficients(&self, ctx: &StageContext<'_>, log: &mut WarningLog) -> ForceCoefficients {
        let g = ctx.geometry;
        let (ratio, cf) = wall_force_coefficient(g.height_m, g.depth_m);
        let cf = cf.resolve(log, Stage::ForceCoefficient);
        let (c_s, c_d) = structural_factors(
            ctx.site.terrain,
            ctx.wind.reference_height_m,
            g,
            ctx.settings,
            log,
        );
        ForceCoefficients::new(
            ratio,
            cf,
            1.0,
            g.face_area(),
            c_s,
            c_d,
            ctx.peak_pressure_pa(),
            None,
            en1991::SIGNBOARD,
        )
    }

    fn verify(
        &self,
        ctx: &StageContext<'_>,
        loading: &Loading<'_>,
        checks: &mut CheckList<'_>,
    ) -> CalcResult<VerificationDetail> {
        let (layout, layout_assumed) = match &self.fixings {
            Some(layout) => (layout.clone(), false),
            None => {
                let layout = default_layout(ctx.geometry, &ctx.settings.default_fixings);
                checks.warn(
                    WarningKind::ConservativeAssumption,
                    format!(
                        "Fixing layout not given; assumed {} rows of {} fixings (N_Rk = {} kN, V_Rk = {} kN)",
                        layout.rows, layout.fixings_per_row, layout.tension_capacity_kn, layout.shear_capacity_kn
                    ),
                );
                (layout, true)
            }
        };

        let f_ed = loading.design_wind_kn();
        let g_ed = loading.design_permanent_kn();
        let eccentricity = ctx.geometry.depth_m / 2.0;
        let forces = fixing_forces(&layout, f_ed, g_ed, eccentricity);

        let n_rd = layout.tension_capacity_kn / layout.gamma_m;
        let v_rd = layout.shear_capacity_kn / layout.gamma_m;
        let interaction = quadratic_interaction(forces.tension_kn, n_rd, forces.shear_kn, v_rd);

        checks.push(UtilizationCheck::new(
            "fixing_tension",
            "Fixing tension",
            forces.tension_kn,
            n_rd,
            "kN",
            design::ANCHOR_INTERACTION,
        ));
        checks.push(UtilizationCheck::new(
            "fixing_shear",
            "Fixing shear",
            forces.shear_kn,
            v_rd,
            "kN",
            design::ANCHOR_INTERACTION,
        ));
        checks.push(UtilizationCheck::ratio(
            "fixing_interaction",
            "Fixing combined tension and shear",
            interaction,
            design::ANCHOR_INTERACTION,
        ));

        Ok(VerificationDetail::WallMounted(WallMountedDetail {
            layout,
            layout_assumed,
            design_wind_force_kn: f_ed,
            design_self_weight_kn: g_ed,
            self_weight_eccentricity_m: eccentricity,
            fixing_forces: forces,
            tension_resistance_kn: n_rd,
            shear_resistance_kn: v_rd,
            interaction,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> FixingLayout {
        FixingLayout {
            rows: 2,
            fixings_per_row: 4,
            row_spacing_m: 1.0,
            tension_capacity_kn: 12.0,
            shear_capacity_kn: 8.0,
            gamma_m: 1.5,
        }
    }

    #[test]
    fn test_default_layout() {
        let g = SignGeometry {
            width_m: 4.0,
            height_m: 1.5,
            depth_m: 0.3,
            mounting_height_m: 5.0,
            panel: None,
            self_weight_kn: None,
        };
        let l = default_layout(&g, &FixingDefaults::default());
        // ceil(4.0 / 0.6) + 1 = 8 per row
        assert_eq!(l.fixings_per_row, 8);
        assert_eq!(l.total(), 16);
        assert_eq!(l.row_spacing_m, 1.5);
    }

    #[test]
    fn test_default_layout_saturates_for_huge_width() {
        let g = SignGeometry {
            width_m: 1.0e12,
            height_m: 1.5,
            depth_m: 0.3,
            mounting_height_m: 5.0,
            panel: None,
            self_weight_kn: None,
        };
        let l = default_layout(&g, &FixingDefaults::default());
        assert_eq!(l.fixings_per_row, u32::MAX);
        assert_eq!(l.total(), u32::MAX);
    }

    #[test]
    fn test_fixing_forces() {
        // 8 kN wind over 8 fixings = 1 kN each
        // 2 kN at 0.25 m over a 1 m lever shared by 4 top fixings = 0.125 kN
        let f = fixing_forces(&layout(), 8.0, 2.0, 0.25);
        assert!((f.tension_kn - 1.125).abs() < 1e-12);
        assert!((f.shear_kn - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_pure_wind_tension() {
        let f = fixing_forces(&layout(), 8.0, 0.0, 0.25);
        assert_eq!(f.shear_kn, 0.0);
        let n_rd = 12.0 / 1.5;
        // At the tension axis the quadratic interaction is T / N_Rd
        let eta = quadratic_interaction(f.tension_kn, n_rd, f.shear_kn, 8.0 / 1.5);
        assert!((eta - 1.0 / 8.0).abs() < 1e-12);
    }
}
