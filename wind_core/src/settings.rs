//! # Engine Settings
//!
//! Every tunable constant of the procedure in one serde struct. All fields
//! default, so a settings file only needs the values it changes:
//!
//! ```toml
//! freestanding_force_factor = 1.2
//!
//! [partial_factors]
//! wind = 1.5
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::loads::PartialFactors;

/// Defaults applied to wall-mounted signs without an explicit fixing layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixingDefaults {
    /// Horizontal pitch of fixings along each row (m)
    pub spacing_m: f64,
    /// Characteristic tension resistance per fixing, N_Rk (kN)
    pub tension_capacity_kn: f64,
    /// Characteristic shear resistance per fixing, V_Rk (kN)
    pub shear_capacity_kn: f64,
    /// Partial factor on fixing resistance γ_M
    pub gamma_m: f64,
}

impl Default for FixingDefaults {
    fn default() -> Self {
        FixingDefaults {
            spacing_m: 0.6,
            tension_capacity_kn: 12.0,
            shear_capacity_kn: 8.0,
            gamma_m: 1.5,
        }
    }
}

/// Limits of the indicative adequacy screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentLimits {
    /// Peak pressure within typical ACM panel capacity (Pa)
    pub pressure_pass_pa: f64,
    /// Peak pressure above which panels are beyond typical capacity (Pa)
    pub pressure_caution_pa: f64,
    /// Force intensity within typical framework capacity (kN/m²)
    pub intensity_pass_kn_m2: f64,
    /// Force intensity above which frameworks are beyond typical capacity (kN/m²)
    pub intensity_caution_kn_m2: f64,
}

impl Default for AssessmentLimits {
    fn default() -> Self {
        AssessmentLimits {
            pressure_pass_pa: 1200.0,
            pressure_caution_pa: 1500.0,
            intensity_pass_kn_m2: 1.5,
            intensity_caution_kn_m2: 2.0,
        }
    }
}

/// Calculation-wide constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Air density ρ (kg/m³); the pressure constant is k = ρ / 2
    pub air_density: f64,

    /// Multiplier on the wall-sign force coefficient for free-standing signs.
    ///
    /// Engineering judgement pending validation against published data.
    pub freestanding_force_factor: f64,

    /// Structural logarithmic decrement of damping δ_s
    pub structural_damping: f64,

    pub partial_factors: PartialFactors,

    /// Sign self-weight per unit face area when neither a weight nor a panel is given (kN/m²)
    pub default_sign_weight_kn_m2: f64,

    pub default_fixings: FixingDefaults,

    /// Panel span / deflection limit
    pub panel_deflection_ratio: f64,

    /// Bracket span / deflection limit
    pub bracket_deflection_ratio: f64,

    /// Absolute bracket tip deflection cap (mm)
    pub bracket_deflection_cap_mm: f64,

    /// Unit weight of foundation concrete (kN/m³)
    pub concrete_unit_weight_kn_m3: f64,

    pub assessment: AssessmentLimits,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            air_density: 1.226,
            freestanding_force_factor: 1.1,
            structural_damping: 0.08,
            partial_factors: PartialFactors::default(),
            default_sign_weight_kn_m2: 0.20,
            default_fixings: FixingDefaults::default(),
            panel_deflection_ratio: 200.0,
            bracket_deflection_ratio: 150.0,
            bracket_deflection_cap_mm: 20.0,
            concrete_unit_weight_kn_m3: 24.0,
            assessment: AssessmentLimits::default(),
        }
    }
}

impl EngineSettings {
    /// Pressure constant k = ρ / 2 (0.613 for ρ = 1.226 kg/m³)
    pub fn pressure_constant(&self) -> f64 {
        0.5 * self.air_density
    }

    /// Reject non-finite or non-positive constants
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("settings.air_density", self.air_density),
            ("settings.freestanding_force_factor", self.freestanding_force_factor),
            ("settings.structural_damping", self.structural_damping),
            ("settings.partial_factors.permanent_unfavourable", self.partial_factors.permanent_unfavourable),
            ("settings.partial_factors.permanent_favourable", self.partial_factors.permanent_favourable),
            ("settings.partial_factors.wind", self.partial_factors.wind),
            ("settings.default_sign_weight_kn_m2", self.default_sign_weight_kn_m2),
            ("settings.default_fixings.spacing_m", self.default_fixings.spacing_m),
            ("settings.default_fixings.tension_capacity_kn", self.default_fixings.tension_capacity_kn),
            ("settings.default_fixings.shear_capacity_kn", self.default_fixings.shear_capacity_kn),
            ("settings.default_fixings.gamma_m", self.default_fixings.gamma_m),
            ("settings.panel_deflection_ratio", self.panel_deflection_ratio),
            ("settings.bracket_deflection_ratio", self.bracket_deflection_ratio),
            ("settings.bracket_deflection_cap_mm", self.bracket_deflection_cap_mm),
            ("settings.concrete_unit_weight_kn_m3", self.concrete_unit_weight_kn_m3),
            ("settings.assessment.pressure_pass_pa", self.assessment.pressure_pass_pa),
            ("settings.assessment.pressure_caution_pa", self.assessment.pressure_caution_pa),
            ("settings.assessment.intensity_pass_kn_m2", self.assessment.intensity_pass_kn_m2),
            ("settings.assessment.intensity_caution_kn_m2", self.assessment.intensity_caution_kn_m2),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Setting must be a positive number",
                ));
            }
        }

        let a = &self.assessment;
        if a.pressure_caution_pa < a.pressure_pass_pa {
            return Err(CalcError::invalid_input(
                "settings.assessment.pressure_caution_pa",
                a.pressure_caution_pa.to_string(),
                "Caution limit must not be below the pass limit",
            ));
        }
        if a.intensity_caution_kn_m2 < a.intensity_pass_kn_m2 {
            return Err(CalcError::invalid_input(
                "settings.assessment.intensity_caution_kn_m2",
                a.intensity_caution_kn_m2.to_string(),
                "Caution limit must not be below the pass limit",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pressure_constant() {
        let settings = EngineSettings::default();
        assert!((settings.pressure_constant() - 0.613).abs() < 1e-12);
    }

    #[test]
    fn test_defaults_validate() {
        assert!(EngineSettings::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: EngineSettings =
            serde_json::from_str(r#"{"freestanding_force_factor": 1.25, "partial_factors": {"wind": 1.6}}"#)
                .unwrap();
        assert_eq!(settings.freestanding_force_factor, 1.25);
        assert_eq!(settings.partial_factors.wind, 1.6);
        assert_eq!(settings.partial_factors.permanent_unfavourable, 1.35);
        assert_eq!(settings.structural_damping, 0.08);
    }

    #[test]
    fn test_negative_setting_rejected() {
        let settings = EngineSettings {
            structural_damping: -0.1,
            ..Default::default()
        };
        let err = settings.validate().unwrap_err();
        assert_eq!(err.field(), Some("settings.structural_damping"));
    }

    #[test]
    fn test_assessment_limits_in_order() {
        let mut settings = EngineSettings::default();
        settings.assessment.pressure_caution_pa = 1000.0;
        let err = settings.validate().unwrap_err();
        assert_eq!(err.field(), Some("settings.assessment.pressure_caution_pa"));

        let partial: EngineSettings =
            serde_json::from_str(r#"{"assessment": {"pressure_pass_pa": 1000.0}}"#).unwrap();
        assert_eq!(partial.assessment.pressure_pass_pa, 1000.0);
        assert_eq!(partial.assessment.intensity_caution_kn_m2, 2.0);
        assert!(partial.validate().is_ok());
    }
}
