//! # Calculation Pipeline
//!
//! Every calculation runs the same stages in the same order:
//!
//! 1. Settings and input validation (hard errors abort here)
//! 2. [`wind_pressure`] - peak velocity pressure, shared by all variants
//! 3. Force coefficients - per mounting variant
//! 4. Structural verification - per mounting variant, plus the optional
//!    [`panel`] check
//! 5. Result assembly, with the advisory [`assessment`] screen
//!
//! A single [`WarningLog`] is threaded through stages 1 to 4 by `&mut`.
//!
//! The per-variant stages sit behind [`MountingVariant`], implemented by
//! each configuration struct in [`crate::mounting`].
//!
//! ## Example
//!
//! ```rust
//! use wind_core::{calculate, CalculationInput};
//!
//! let input = CalculationInput::from_json(r#"{
//!     "site": {"base_wind_speed": 22.0, "altitude_m": 10.0, "shore_distance_km": 5.0, "terrain": "country"},
//!     "geometry": {"width_m": 4.0, "height_m": 1.5, "depth_m": 0.3, "mounting_height_m": 5.0},
//!     "mounting": {"type": "WallMounted"}
//! }"#).unwrap();
//!
//! let result = calculate(&input).unwrap();
//! assert!(result.passes());
//! assert!(result.characteristic_force_kn > 4.0 && result.characteristic_force_kn < 5.0);
//! ```

pub mod assessment;
pub mod force;
pub mod panel;
pub mod post_mounted;
pub mod projecting;
pub mod wall_mounted;
pub mod wind_pressure;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::geometry::SignGeometry;
use crate::input::CalculationInput;
use crate::loads::{LoadCombination, PartialFactors};
use crate::materials::panel_material;
use crate::mounting::MountingConfiguration;
use crate::references::design;
use crate::result::{CalculationResult, CheckList, NamedFactor, OverallStatus};
use crate::settings::EngineSettings;
use crate::site::SiteParameters;
use crate::warnings::{Stage, WarningKind, WarningLog};

pub use assessment::IndicativeAssessment;
pub use force::{ForceCoefficients, PostForce};
pub use post_mounted::PostMountedDetail;
pub use projecting::ProjectingDetail;
pub use wall_mounted::WallMountedDetail;
pub use wind_pressure::WindPressure;

/// Read-only inputs shared by the per-variant stages
#[derive(Debug, Clone, Copy)]
pub struct StageContext<'a> {
    pub site: &'a SiteParameters,
    pub geometry: &'a SignGeometry,
    pub wind: &'a WindPressure,
    pub settings: &'a EngineSettings,
}

impl StageContext<'_> {
    pub fn peak_pressure_pa(&self) -> f64 {
        self.wind.peak_velocity_pressure_pa
    }
}

/// Characteristic actions and the ULS combinations applied to them
#[derive(Debug, Clone)]
pub struct Loading<'a> {
    pub force: &'a ForceCoefficients,
    /// Characteristic self-weight G_k (kN)
    pub self_weight_kn: f64,
    /// STR: γ_G,unfav G + γ_Q W
    pub strength: LoadCombination,
    /// EQU: γ_G,fav G + γ_Q W
    pub equilibrium: LoadCombination,
}

impl<'a> Loading<'a> {
    pub fn new(force: &'a ForceCoefficients, self_weight_kn: f64, factors: &PartialFactors) -> Self {
        Loading {
            force,
            self_weight_kn,
            strength: LoadCombination::strength(factors),
            equilibrium: LoadCombination::equilibrium(factors),
        }
    }

    /// Design wind force γ_Q F_w (kN)
    pub fn design_wind_kn(&self) -> f64 {
        self.strength.wind(self.force.characteristic_force_kn)
    }

    /// Design self-weight γ_G,unfav G_k (kN)
    pub fn design_permanent_kn(&self) -> f64 {
        self.strength.permanent(self.self_weight_kn)
    }
}

/// Variant-specific outputs of the verification stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VerificationDetail {
    WallMounted(WallMountedDetail),
    Projecting(ProjectingDetail),
    PostMounted(PostMountedDetail),
}

impl VerificationDetail {
    /// Characteristic overturning moment, where the variant has one (kNm)
    pub fn overturning_moment_knm(&self) -> Option<f64> {
        match self {
            VerificationDetail::WallMounted(_) => None,
            VerificationDetail::Projecting(d) => Some(d.overturning_moment_knm),
            VerificationDetail::PostMounted(d) => Some(d.overturning_moment_knm),
        }
    }
}

/// Force coefficient and structural verification for one mounting variant
pub trait MountingVariant {
    /// Force coefficient stage: c_f, A_ref, c_s, c_d and the characteristic force
    fn force_coefficients(&self, ctx: &StageContext<'_>, log: &mut WarningLog) -> ForceCoefficients;

    /// Structural verification stage: push one check per element into `checks`
    fn verify(
        &self,
        ctx: &StageContext<'_>,
        loading: &Loading<'_>,
        checks: &mut CheckList<'_>,
    ) -> CalcResult<VerificationDetail>;
}

// ============================================================================
// Orchestrator
// ============================================================================

/// Run a calculation with default [`EngineSettings`]
pub fn calculate(input: &CalculationInput) -> CalcResult<CalculationResult> {
    calculate_with_settings(input, &EngineSettings::default())
}

/// Run a calculation.
///
/// Either returns a complete result (possibly carrying warnings and
/// inadequate checks) or a hard error raised before any factor was computed.
pub fn calculate_with_settings(
    input: &CalculationInput,
    settings: &EngineSettings,
) -> CalcResult<CalculationResult> {
    settings.validate()?;
    let mut log = WarningLog::new();
    input.validate(&mut log)?;

    let mounting_type = input.mounting.mounting_type();
    tracing::debug!(mounting = %mounting_type, "inputs validated");

    let wind = wind_pressure::calculate(
        &input.site,
        input.geometry.mounting_height_m,
        settings,
        &mut log,
    );
    let ctx = StageContext {
        site: &input.site,
        geometry: &input.geometry,
        wind: &wind,
        settings,
    };

    run(&input.mounting, input, &ctx, log)
}

fn run<V: MountingVariant>(
    variant: &V,
    input: &CalculationInput,
    ctx: &StageContext<'_>,
    mut log: WarningLog,
) -> CalcResult<CalculationResult> {
    let force = variant.force_coefficients(ctx, &mut log);

    let self_weight_kn = self_weight_kn(ctx.geometry, ctx.settings, &mut log)?;
    let loading = Loading::new(&force, self_weight_kn, &ctx.settings.partial_factors);

    let mut checks = CheckList::new(&mut log);
    let detail = variant.verify(ctx, &loading, &mut checks)?;
    let panel = match &ctx.geometry.panel {
        Some(spec) => Some(panel::check(spec, ctx, &mut checks)?),
        None => None,
    };
    let checks = checks.into_checks();

    let design_force_kn = loading.design_wind_kn();
    let gamma_q = ctx.settings.partial_factors.wind;
    let overturning_moment_knm = detail.overturning_moment_knm();
    let status = if checks.iter().all(|c| c.passes()) {
        OverallStatus::Pass
    } else {
        OverallStatus::Fail
    };

    let assessment = assessment::assess(
        ctx.peak_pressure_pa(),
        force.characteristic_force_kn,
        ctx.geometry.face_area(),
        ctx.geometry.mounting_height_m,
        &ctx.settings.assessment,
    );

    let mut factors = ctx.wind.factors();
    factors.extend(force.factors());
    factors.extend(verification_factors(&loading));

    tracing::debug!(
        status = %status,
        checks = checks.len(),
        warnings = log.len(),
        "calculation complete"
    );

    Ok(CalculationResult {
        inputs: input.clone(),
        mounting_type: input.mounting.mounting_type(),
        factors,
        wind: ctx.wind.clone(),
        peak_pressure_pa: ctx.peak_pressure_pa(),
        characteristic_force_kn: force.characteristic_force_kn,
        design_force_kn,
        overturning_moment_knm,
        design_overturning_moment_knm: overturning_moment_knm.map(|m| gamma_q * m),
        self_weight_kn,
        force,
        checks,
        detail,
        panel,
        status,
        assessment,
        warnings: log.into_vec(),
    })
}

fn verification_factors(loading: &Loading<'_>) -> Vec<NamedFactor> {
    let s = Stage::StructuralVerification;
    vec![
        NamedFactor::new("Self-weight", "G_k", loading.self_weight_kn, "kN", s, design::PARTIAL_FACTORS),
        NamedFactor::new(
            "Permanent action factor (unfavourable)",
            "γ_G,sup",
            loading.strength.permanent_factor,
            "",
            s,
            design::PARTIAL_FACTORS,
        ),
        NamedFactor::new(
            "Permanent action factor (favourable)",
            "γ_G,inf",
            loading.equilibrium.permanent_factor,
            "",
            s,
            design::PARTIAL_FACTORS,
        ),
        NamedFactor::new("Wind action factor", "γ_Q", loading.strength.wind_factor, "", s, design::PARTIAL_FACTORS),
        NamedFactor::new("Design wind force", "F_Ed", loading.design_wind_kn(), "kN", s, design::PARTIAL_FACTORS),
    ]
}

/// Characteristic self-weight of the sign (kN).
///
/// An explicit weight wins; otherwise it is estimated from the panel
/// material or the default areal weight, with a warning either way.
pub fn self_weight_kn(
    geometry: &SignGeometry,
    settings: &EngineSettings,
    log: &mut WarningLog,
) -> CalcResult<f64> {
    if let Some(weight) = geometry.self_weight_kn {
        return Ok(weight);
    }
    let area = geometry.face_area();
    let (weight, basis) = match &geometry.panel {
        Some(spec) => {
            let material = panel_material(&spec.material)?;
            (material.areal_weight_kn_m2() * area, format!("{} face panel", material.name))
        }
        None => (
            settings.default_sign_weight_kn_m2 * area,
            format!("{:.2} kN/m²", settings.default_sign_weight_kn_m2),
        ),
    };
    log.warn(
        WarningKind::ConservativeAssumption,
        Stage::StructuralVerification,
        format!("Self-weight not given; estimated as {:.2} kN from {}", weight, basis),
    );
    Ok(weight)
}

impl MountingVariant for MountingConfiguration {
    fn force_coefficients(&self, ctx: &StageContext<'_>, log: &mut WarningLog) -> ForceCoefficients {
        match self {
            MountingConfiguration::WallMounted(cfg) => cfg.force_coefficients(ctx, log),
            MountingConfiguration::Projecting(cfg) => cfg.force_coefficients(ctx, log),
            MountingConfiguration::PostMounted(cfg) => cfg.force_coefficients(ctx, log),
        }
    }

    fn verify(
        &self,
        ctx: &StageContext<'_>,
        loading: &Loading<'_>,
        checks: &mut CheckList<'_>,
    ) -> CalcResult<VerificationDetail> {
        match self {
            MountingConfiguration::WallMounted(cfg) => cfg.verify(ctx, loading, checks),
            MountingConfiguration::Projecting(cfg) => cfg.verify(ctx, loading, checks),
            MountingConfiguration::PostMounted(cfg) => cfg.verify(ctx, loading, checks),
        }
    }
}
