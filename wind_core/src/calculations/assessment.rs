//! # Indicative Adequacy Assessment
//!
//! A quick screen of the wind actions against typical signage construction,
//! separate from the element checks:
//!
//! | Screen          | PASS            | CAUTION             | FAIL        |
//! |-----------------|-----------------|---------------------|-------------|
//! | Peak pressure   | q_p ≤ 1200 Pa   | q_p ≤ 1500 Pa       | above       |
//! | Force intensity | F/A ≤ 1.5 kN/m² | F/A ≤ 2.0 kN/m²     | above       |
//!
//! Extra-large signs and very high installations raise a PASS to CAUTION.
//! Limits come from [`AssessmentLimits`]; the size and height bands are fixed.
//!
//! The outcome is advisory and never changes the overall status.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::settings::AssessmentLimits;

/// Sign area above which building control approval is flagged (m²)
const BUILDING_CONTROL_AREA_M2: f64 = 10.0;
/// Installation height above which building control approval is flagged (m)
const BUILDING_CONTROL_HEIGHT_M: f64 = 3.0;

// ============================================================================
// Grades
// ============================================================================

/// Outcome of one screen, ordered from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssessmentStatus {
    Pass,
    Caution,
    Fail,
}

impl AssessmentStatus {
    /// Grade `value` against an upper PASS limit and an upper CAUTION limit
    pub fn grade(value: f64, pass_limit: f64, caution_limit: f64) -> Self {
        if value <= pass_limit {
            AssessmentStatus::Pass
        } else if value <= caution_limit {
            AssessmentStatus::Caution
        } else {
            AssessmentStatus::Fail
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            AssessmentStatus::Pass => {
                "Wind loading is within typical signage construction limits. \
                 Standard professional installation should be adequate."
            }
            AssessmentStatus::Caution => {
                "Wind loading needs careful attention. Enhanced construction methods \
                 or a professional structural assessment are recommended."
            }
            AssessmentStatus::Fail => {
                "Wind loading exceeds typical signage construction limits. \
                 Full structural engineering design and certification required."
            }
        }
    }
}

impl fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssessmentStatus::Pass => write!(f, "PASS"),
            AssessmentStatus::Caution => write!(f, "CAUTION"),
            AssessmentStatus::Fail => write!(f, "FAIL"),
        }
    }
}

/// Face area band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeCategory {
    /// ≤ 6 m²
    Small,
    /// ≤ 15 m²
    Medium,
    /// ≤ 30 m²
    Large,
    ExtraLarge,
}

impl SizeCategory {
    pub fn of(area_m2: f64) -> Self {
        if area_m2 <= 6.0 {
            SizeCategory::Small
        } else if area_m2 <= 15.0 {
            SizeCategory::Medium
        } else if area_m2 <= 30.0 {
            SizeCategory::Large
        } else {
            SizeCategory::ExtraLarge
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SizeCategory::Small => "Small",
            SizeCategory::Medium => "Medium",
            SizeCategory::Large => "Large",
            SizeCategory::ExtraLarge => "Extra Large",
        }
    }

    pub fn guidance(&self) -> &'static str {
        match self {
            SizeCategory::Small => "Standard construction methods typically adequate",
            SizeCategory::Medium => "Professional installation recommended",
            SizeCategory::Large => "Engineered framework and certified installation required",
            SizeCategory::ExtraLarge => "Full structural engineering design mandatory",
        }
    }
}

impl fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Installation height band, by height to the top of the sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeightCategory {
    /// ≤ 5 m
    LowLevel,
    /// ≤ 10 m
    MediumHeight,
    /// ≤ 20 m
    HighLevel,
    VeryHigh,
}

impl HeightCategory {
    pub fn of(height_m: f64) -> Self {
        if height_m <= 5.0 {
            HeightCategory::LowLevel
        } else if height_m <= 10.0 {
            HeightCategory::MediumHeight
        } else if height_m <= 20.0 {
            HeightCategory::HighLevel
        } else {
            HeightCategory::VeryHigh
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            HeightCategory::LowLevel => "Low Level",
            HeightCategory::MediumHeight => "Medium Height",
            HeightCategory::HighLevel => "High Level",
            HeightCategory::VeryHigh => "Very High",
        }
    }

    pub fn guidance(&self) -> &'static str {
        match self {
            HeightCategory::LowLevel => "Standard fixings typically adequate",
            HeightCategory::MediumHeight => "Chemical anchors or through-bolts recommended",
            HeightCategory::HighLevel => "Engineered fixings and access equipment required",
            HeightCategory::VeryHigh => "Specialist high-level installation required",
        }
    }
}

impl fmt::Display for HeightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Assessment
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicativeAssessment {
    /// Peak velocity pressure q_p (Pa)
    pub peak_pressure_pa: f64,
    pub pressure_status: AssessmentStatus,
    /// Characteristic force per unit face area F_w / A (kN/m²)
    pub force_intensity_kn_m2: f64,
    pub intensity_status: AssessmentStatus,
    pub sign_area_m2: f64,
    pub size_category: SizeCategory,
    /// Height to the top of the sign (m)
    pub installation_height_m: f64,
    pub height_category: HeightCategory,
    /// Worst of the screens
    pub status: AssessmentStatus,
    pub summary: String,
    pub recommendations: Vec<String>,
}

impl IndicativeAssessment {
    pub fn passes(&self) -> bool {
        self.status == AssessmentStatus::Pass
    }
}

/// Screen the wind actions on a sign against typical construction limits
pub fn assess(
    peak_pressure_pa: f64,
    force_kn: f64,
    area_m2: f64,
    height_m: f64,
    limits: &AssessmentLimits,
) -> IndicativeAssessment {
    let mut recommendations = Vec::new();

    let pressure_status =
        AssessmentStatus::grade(peak_pressure_pa, limits.pressure_pass_pa, limits.pressure_caution_pa);
    match pressure_status {
        AssessmentStatus::Pass => {}
        AssessmentStatus::Caution => {
            recommendations.push("Verify the sign panel specification can carry this pressure".to_string())
        }
        AssessmentStatus::Fail => {
            recommendations.push("High-specification panels or structural backing required".to_string())
        }
    }

    let force_intensity_kn_m2 = if area_m2 > 0.0 { force_kn / area_m2 } else { 0.0 };
    let intensity_status = AssessmentStatus::grade(
        force_intensity_kn_m2,
        limits.intensity_pass_kn_m2,
        limits.intensity_caution_kn_m2,
    );
    match intensity_status {
        AssessmentStatus::Pass => {}
        AssessmentStatus::Caution => {
            recommendations.push("Use a heavy-duty framework with adequate bracing".to_string())
        }
        AssessmentStatus::Fail => recommendations.push("Engineered steel framework required".to_string()),
    }

    let mut status = pressure_status.max(intensity_status);

    let size_category = SizeCategory::of(area_m2);
    if size_category == SizeCategory::ExtraLarge {
        status = status.max(AssessmentStatus::Caution);
        recommendations.push("Full structural engineering assessment required for this size".to_string());
    }

    let height_category = HeightCategory::of(height_m);
    if height_category == HeightCategory::VeryHigh {
        status = status.max(AssessmentStatus::Caution);
        recommendations.push("High-level work requires specialist contractors and equipment".to_string());
    }

    if height_m > BUILDING_CONTROL_HEIGHT_M || area_m2 > BUILDING_CONTROL_AREA_M2 {
        recommendations.push("Building control approval may be required; check with the local authority".to_string());
    }
    recommendations
        .push("Indicative only: professional structural verification required for installation".to_string());

    tracing::debug!(
        status = %status,
        pressure = %pressure_status,
        intensity = %intensity_status,
        size = %size_category,
        height = %height_category,
        "indicative assessment"
    );

    IndicativeAssessment {
        peak_pressure_pa,
        pressure_status,
        force_intensity_kn_m2,
        intensity_status,
        sign_area_m2: area_m2,
        size_category,
        installation_height_m: height_m,
        height_category,
        status,
        summary: status.summary().to_string(),
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> AssessmentLimits {
        AssessmentLimits::default()
    }

    #[test]
    fn test_typical_sign_passes() {
        // 1.0 kN over 6 m² = 0.17 kN/m² at 3 m
        let a = assess(1000.0, 1.0, 6.0, 3.0, &limits());
        assert_eq!(a.status, AssessmentStatus::Pass);
        assert!(a.passes());
        assert_eq!(a.size_category, SizeCategory::Small);
        assert_eq!(a.height_category, HeightCategory::LowLevel);
        // Only the indicative note; 3 m and 6 m² are under the building control triggers
        assert_eq!(a.recommendations.len(), 1);
        assert!(a.recommendations[0].starts_with("Indicative only"));
    }

    #[test]
    fn test_pressure_bands() {
        assert_eq!(assess(1200.0, 1.0, 6.0, 3.0, &limits()).pressure_status, AssessmentStatus::Pass);

        let caution = assess(1300.0, 1.0, 6.0, 3.0, &limits());
        assert_eq!(caution.pressure_status, AssessmentStatus::Caution);
        assert_eq!(caution.status, AssessmentStatus::Caution);
        assert!(caution.recommendations[0].contains("panel specification"));
        assert_eq!(assess(1500.0, 1.0, 6.0, 3.0, &limits()).pressure_status, AssessmentStatus::Caution);

        let fail = assess(1600.0, 1.0, 6.0, 3.0, &limits());
        assert_eq!(fail.pressure_status, AssessmentStatus::Fail);
        assert_eq!(fail.status, AssessmentStatus::Fail);
    }

    #[test]
    fn test_intensity_bands() {
        // 9.0 / 6 = 1.5 kN/m²
        let edge = assess(1000.0, 9.0, 6.0, 3.0, &limits());
        assert!((edge.force_intensity_kn_m2 - 1.5).abs() < 1e-12);
        assert_eq!(edge.intensity_status, AssessmentStatus::Pass);

        // 10.8 / 6 = 1.8 kN/m²
        let caution = assess(1000.0, 10.8, 6.0, 3.0, &limits());
        assert_eq!(caution.intensity_status, AssessmentStatus::Caution);
        assert_eq!(caution.status, AssessmentStatus::Caution);

        // 13.2 / 6 = 2.2 kN/m²
        let fail = assess(1000.0, 13.2, 6.0, 3.0, &limits());
        assert_eq!(fail.intensity_status, AssessmentStatus::Fail);
        assert!(fail.recommendations.iter().any(|r| r.contains("steel framework")));
    }

    #[test]
    fn test_worst_screen_governs() {
        let a = assess(1300.0, 13.2, 6.0, 3.0, &limits());
        assert_eq!(a.pressure_status, AssessmentStatus::Caution);
        assert_eq!(a.intensity_status, AssessmentStatus::Fail);
        assert_eq!(a.status, AssessmentStatus::Fail);
        assert_eq!(a.summary, AssessmentStatus::Fail.summary());
    }

    #[test]
    fn test_size_and_height_bands() {
        assert_eq!(SizeCategory::of(6.0), SizeCategory::Small);
        assert_eq!(SizeCategory::of(15.0), SizeCategory::Medium);
        assert_eq!(SizeCategory::of(30.0), SizeCategory::Large);
        assert_eq!(SizeCategory::of(30.1), SizeCategory::ExtraLarge);

        assert_eq!(HeightCategory::of(5.0), HeightCategory::LowLevel);
        assert_eq!(HeightCategory::of(10.0), HeightCategory::MediumHeight);
        assert_eq!(HeightCategory::of(20.0), HeightCategory::HighLevel);
        assert_eq!(HeightCategory::of(20.5), HeightCategory::VeryHigh);
    }

    #[test]
    fn test_extra_large_and_very_high_raise_caution() {
        // 40 kN over 40 m² = 1.0 kN/m²
        let large = assess(1000.0, 40.0, 40.0, 3.0, &limits());
        assert_eq!(large.size_category, SizeCategory::ExtraLarge);
        assert_eq!(large.status, AssessmentStatus::Caution);

        let high = assess(1000.0, 1.0, 6.0, 25.0, &limits());
        assert_eq!(high.height_category, HeightCategory::VeryHigh);
        assert_eq!(high.status, AssessmentStatus::Caution);
        assert!(high.recommendations.iter().any(|r| r.contains("specialist contractors")));

        // A failing screen is not softened
        let failed = assess(1600.0, 40.0, 40.0, 25.0, &limits());
        assert_eq!(failed.status, AssessmentStatus::Fail);
    }

    #[test]
    fn test_building_control_flag() {
        let tall = assess(1000.0, 1.0, 6.0, 3.5, &limits());
        assert!(tall.recommendations.iter().any(|r| r.starts_with("Building control")));

        let wide = assess(1000.0, 11.0, 11.0, 3.0, &limits());
        assert!(wide.recommendations.iter().any(|r| r.starts_with("Building control")));

        let neither = assess(1000.0, 1.0, 10.0, 3.0, &limits());
        assert!(!neither.recommendations.iter().any(|r| r.starts_with("Building control")));
    }

    #[test]
    fn test_limits_are_configurable() {
        let strict = AssessmentLimits {
            pressure_pass_pa: 800.0,
            pressure_caution_pa: 900.0,
            ..AssessmentLimits::default()
        };
        assert_eq!(assess(1000.0, 1.0, 6.0, 3.0, &strict).pressure_status, AssessmentStatus::Fail);
    }
}
