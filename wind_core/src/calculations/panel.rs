//! # Face Panel Between Channels
//!
//! A 1 m wide strip of the face panel is treated as a simply supported
//! beam spanning between adjacent support channels under the peak pressure.
//!
//! - Deflection (SLS, characteristic q_p): δ = 5wL⁴/384EI ≤ L/200
//! - Stress (ULS, γ_Q q_p): σ = wL²/8Z ≤ f_y
//!
//! Runs for any mounting variant whose geometry names a panel.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StageContext;
use crate::equations::beam::{
    bending_stress, uniform_load_max_deflection, uniform_load_max_moment,
    uniform_load_span_for_deflection_ratio, uniform_load_span_for_stress,
};
use crate::errors::CalcResult;
use crate::geometry::PanelSpec;
use crate::materials::panel_material;
use crate::references::design;
use crate::result::{CheckList, UtilizationCheck};
use crate::units::{m_to_mm, Millimetres, Pascals};

/// Width of the design strip (mm)
const STRIP_WIDTH_MM: f64 = 1000.0;

/// Construction grade implied by the channel spacing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpacingQuality {
    /// ≤ 300 mm
    Highway,
    /// ≤ 450 mm
    Good,
    /// ≤ 600 mm
    Budget,
    Amateur,
}

impl SpacingQuality {
    /// Grades with a target spacing, tightest first
    pub const GRADED: [SpacingQuality; 3] = [
        SpacingQuality::Highway,
        SpacingQuality::Good,
        SpacingQuality::Budget,
    ];

    pub fn of(spacing_mm: f64) -> Self {
        Self::GRADED
            .into_iter()
            .find(|q| q.target_spacing_mm().is_some_and(|t| spacing_mm <= t))
            .unwrap_or(SpacingQuality::Amateur)
    }

    pub fn target_spacing_mm(&self) -> Option<f64> {
        match self {
            SpacingQuality::Highway => Some(300.0),
            SpacingQuality::Good => Some(450.0),
            SpacingQuality::Budget => Some(600.0),
            SpacingQuality::Amateur => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SpacingQuality::Highway => "Highway / professional grade construction",
            SpacingQuality::Good => "Good quality construction",
            SpacingQuality::Budget => "Budget construction, marginal for high wind areas",
            SpacingQuality::Amateur => "Amateur construction, not recommended",
        }
    }
}

impl fmt::Display for SpacingQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelCheck {
    pub material: String,
    pub channel_spacing_mm: f64,
    /// Characteristic line load on the strip (N/mm)
    pub line_load_n_per_mm: f64,
    pub deflection_mm: f64,
    pub deflection_limit_mm: f64,
    pub bending_stress_mpa: f64,
    pub allowable_stress_mpa: f64,
    /// Longest span meeting the deflection limit (mm)
    pub max_spacing_deflection_mm: f64,
    /// Longest span meeting the stress limit (mm)
    pub max_spacing_stress_mm: f64,
    /// Governing maximum spacing (mm)
    pub max_spacing_mm: f64,
    /// Channels needed at the entered spacing, top and bottom included
    pub channels_required: u32,
    /// Channels needed at the governing maximum spacing
    pub channels_at_max_spacing: u32,
    pub quality: SpacingQuality,
    /// Loosest graded spacing within the maximum, if any
    pub recommended_quality: Option<SpacingQuality>,
}

/// Channels for a sign `height_mm` tall at `spacing_mm`: ⌈H/L⌉ + 1, at least 2
pub fn channels_required(height_mm: f64, spacing_mm: f64) -> u32 {
    ((height_mm / spacing_mm).ceil() as u32).saturating_add(1).max(2)
}

/// Check the face panel and push its deflection and stress utilizations
pub fn check(spec: &PanelSpec, ctx: &StageContext<'_>, checks: &mut CheckList<'_>) -> CalcResult<PanelCheck> {
    let material = panel_material(&spec.material)?;
    let l = spec.channel_spacing_mm;
    let e = material.elastic_modulus_mpa;
    let i = material.second_moment_mm4_per_mm * STRIP_WIDTH_MM;
    let z = material.section_modulus_mm3_per_mm * STRIP_WIDTH_MM;
    let fy = material.yield_strength_mpa;
    let ratio = ctx.settings.panel_deflection_ratio;
    let gamma_q = ctx.settings.partial_factors.wind;

    let w = Pascals(ctx.peak_pressure_pa()).on_strip(Millimetres(STRIP_WIDTH_MM));
    let deflection = uniform_load_max_deflection(w, l, e, i);
    let deflection_limit = l / ratio;
    let sigma = bending_stress(uniform_load_max_moment(gamma_q * w, l), z);

    checks.push(UtilizationCheck::new(
        "panel_deflection",
        "Face panel deflection between channels",
        deflection,
        deflection_limit,
        "mm",
        design::DEFLECTION,
    ));
    checks.push(UtilizationCheck::new(
        "panel_stress",
        "Face panel bending between channels",
        sigma,
        fy,
        "MPa",
        design::ALUMINIUM_BENDING,
    ));

    let max_deflection = uniform_load_span_for_deflection_ratio(w, e, i, ratio);
    let max_stress = uniform_load_span_for_stress(gamma_q * w, z, fy);
    let max_spacing = max_deflection.min(max_stress);
    let height_mm = m_to_mm(ctx.geometry.height_m);
    let recommended_quality = SpacingQuality::GRADED
        .into_iter()
        .rev()
        .find(|q| q.target_spacing_mm().is_some_and(|t| t <= max_spacing));

    tracing::debug!(
        material = material.name,
        spacing = l,
        deflection,
        sigma,
        max_spacing,
        "panel check"
    );

    Ok(PanelCheck {
        material: material.name.to_string(),
        channel_spacing_mm: l,
        line_load_n_per_mm: w,
        deflection_mm: deflection,
        deflection_limit_mm: deflection_limit,
        bending_stress_mpa: sigma,
        allowable_stress_mpa: fy,
        max_spacing_deflection_mm: max_deflection,
        max_spacing_stress_mm: max_stress,
        max_spacing_mm: max_spacing,
        channels_required: channels_required(height_mm, l),
        channels_at_max_spacing: channels_required(height_mm, max_spacing),
        quality: SpacingQuality::of(l),
        recommended_quality,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_required() {
        // 1500 / 600 = 2.5 → 3 spans, 4 channels
        assert_eq!(channels_required(1500.0, 600.0), 4);
        assert_eq!(channels_required(1200.0, 600.0), 3);
        assert_eq!(channels_required(200.0, 600.0), 2);
        assert_eq!(channels_required(1.0e15, 0.001), u32::MAX);
    }

    #[test]
    fn test_spacing_quality() {
        assert_eq!(SpacingQuality::of(300.0), SpacingQuality::Highway);
        assert_eq!(SpacingQuality::of(400.0), SpacingQuality::Good);
        assert_eq!(SpacingQuality::of(600.0), SpacingQuality::Budget);
        assert_eq!(SpacingQuality::of(750.0), SpacingQuality::Amateur);
    }

    #[test]
    fn test_acm_strip_deflection() {
        // 828 Pa on a 1 m strip of 3 mm ACM over 600 mm:
        // w = 0.828 N/mm, I = 94 500 mm⁴
        // δ = 5 × 0.828 × 600⁴ / (384 × 70 000 × 94 500) ≈ 0.211 mm
        let w = Pascals(828.0).on_strip(Millimetres(STRIP_WIDTH_MM));
        let d = uniform_load_max_deflection(w, 600.0, 70_000.0, 94.5 * STRIP_WIDTH_MM);
        assert!((d - 0.2113).abs() < 1e-3);
    }
}
