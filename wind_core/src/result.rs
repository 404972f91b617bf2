//! # Calculation Result
//!
//! The output aggregate handed to reporting and visualization. It carries
//! every named intermediate factor, the forces and moments, one utilization
//! check per verified element, the warning list and an echo of the inputs,
//! so a consumer never has to re-derive anything.
//!
//! A result is assembled once by [`crate::calculate`] and not mutated after.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calculations::{ForceCoefficients, IndicativeAssessment, VerificationDetail, WindPressure};
use crate::calculations::panel::PanelCheck;
use crate::input::CalculationInput;
use crate::mounting::MountingType;
use crate::warnings::{Stage, Warning, WarningKind, WarningLog};

/// One intermediate factor with its provenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedFactor {
    /// Human-readable name ("Altitude factor")
    pub name: String,
    /// Code symbol ("c_alt")
    pub symbol: String,
    pub value: f64,
    /// Unit, empty for dimensionless factors
    pub unit: String,
    pub stage: Stage,
    /// Clause or figure the value was taken from
    pub reference: String,
}

impl NamedFactor {
    pub fn new(
        name: &str,
        symbol: &str,
        value: f64,
        unit: &str,
        stage: Stage,
        reference: &str,
    ) -> Self {
        NamedFactor {
            name: name.to_string(),
            symbol: symbol.to_string(),
            value,
            unit: unit.to_string(),
            stage,
            reference: reference.to_string(),
        }
    }
}

/// Adequacy of a single checked element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckStatus {
    Adequate,
    Inadequate,
}

impl CheckStatus {
    pub fn from_utilization(utilization: f64) -> Self {
        if utilization <= 1.0 {
            CheckStatus::Adequate
        } else {
            CheckStatus::Inadequate
        }
    }
}

/// Overall outcome of the calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OverallStatus {
    Pass,
    Fail,
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverallStatus::Pass => write!(f, "PASS"),
            OverallStatus::Fail => write!(f, "FAIL"),
        }
    }
}

/// Demand / capacity ratio for one element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilizationCheck {
    /// Element identifier ("fixing_interaction", "post_bending")
    pub element: String,
    pub description: String,
    pub demand: f64,
    pub capacity: f64,
    /// Unit of demand and capacity; "-" for interaction ratios
    pub unit: String,
    /// demand / capacity
    pub utilization: f64,
    pub status: CheckStatus,
    pub reference: String,
}

impl UtilizationCheck {
    /// Build a check from a demand and a (positive) capacity
    pub fn new(
        element: &str,
        description: &str,
        demand: f64,
        capacity: f64,
        unit: &str,
        reference: &str,
    ) -> Self {
        let utilization = demand / capacity;
        UtilizationCheck {
            element: element.to_string(),
            description: description.to_string(),
            demand,
            capacity,
            unit: unit.to_string(),
            utilization,
            status: CheckStatus::from_utilization(utilization),
            reference: reference.to_string(),
        }
    }

    /// Build a check whose demand is already a dimensionless ratio
    pub fn ratio(element: &str, description: &str, utilization: f64, reference: &str) -> Self {
        Self::new(element, description, utilization, 1.0, "-", reference)
    }

    pub fn passes(&self) -> bool {
        self.status == CheckStatus::Adequate
    }
}

/// Collects checks for one verification stage, warning on each inadequate element
pub struct CheckList<'a> {
    checks: Vec<UtilizationCheck>,
    log: &'a mut WarningLog,
}

impl<'a> CheckList<'a> {
    pub fn new(log: &'a mut WarningLog) -> Self {
        CheckList {
            checks: Vec::new(),
            log,
        }
    }

    pub fn push(&mut self, check: UtilizationCheck) {
        tracing::debug!(
            element = %check.element,
            utilization = check.utilization,
            "utilization check"
        );
        if !check.passes() {
            self.log.warn(
                WarningKind::ElementInadequate,
                Stage::StructuralVerification,
                format!(
                    "{} utilization {:.2} exceeds 1.0 ({:.3} > {:.3} {})",
                    check.description, check.utilization, check.demand, check.capacity, check.unit
                ),
            );
        }
        self.checks.push(check);
    }

    /// Append a non-check warning to the same log
    pub fn warn(&mut self, kind: WarningKind, message: impl Into<String>) {
        self.log.warn(kind, Stage::StructuralVerification, message);
    }

    pub fn into_checks(self) -> Vec<UtilizationCheck> {
        self.checks
    }
}

/// Complete output of one calculation.
///
/// ## JSON Example (abridged)
///
/// ```json
/// {
///   "mounting_type": "WallMounted",
///   "peak_pressure_pa": 599.3,
///   "characteristic_force_kn": 4.66,
///   "design_force_kn": 6.99,
///   "overturning_moment_knm": null,
///   "checks": [{ "element": "fixing_interaction", "utilization": 0.31, "status": "ADEQUATE" }],
///   "status": "PASS",
///   "assessment": { "status": "PASS", "size_category": "Small", "height_category": "LowLevel" },
///   "warnings": [{ "kind": "ConservativeAssumption", "stage": "WindPressure", "message": "..." }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The inputs exactly as used
    pub inputs: CalculationInput,
    pub mounting_type: MountingType,
    /// Every intermediate factor in stage order
    pub factors: Vec<NamedFactor>,
    pub wind: WindPressure,
    pub force: ForceCoefficients,
    /// Peak velocity pressure q_p (Pa)
    pub peak_pressure_pa: f64,
    /// Total characteristic wind force F_w (kN)
    pub characteristic_force_kn: f64,
    /// γ_Q × F_w (kN)
    pub design_force_kn: f64,
    /// Characteristic overturning moment (kNm); absent for wall-mounted signs
    pub overturning_moment_knm: Option<f64>,
    pub design_overturning_moment_knm: Option<f64>,
    /// Characteristic self-weight used in the checks (kN)
    pub self_weight_kn: f64,
    pub checks: Vec<UtilizationCheck>,
    pub detail: VerificationDetail,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel: Option<PanelCheck>,
    pub status: OverallStatus,
    /// Advisory screen against typical construction; does not affect `status`
    pub assessment: IndicativeAssessment,
    pub warnings: Vec<Warning>,
}

impl CalculationResult {
    pub fn passes(&self) -> bool {
        self.status == OverallStatus::Pass
    }

    /// Highest-utilization check
    pub fn governing_check(&self) -> Option<&UtilizationCheck> {
        self.checks
            .iter()
            .max_by(|a, b| a.utilization.total_cmp(&b.utilization))
    }

    /// Look up a factor value by symbol
    pub fn factor(&self, symbol: &str) -> Option<f64> {
        self.factors.iter().find(|f| f.symbol == symbol).map(|f| f.value)
    }

    pub fn warning_count(&self, kind: WarningKind) -> usize {
        self.warnings.iter().filter(|w| w.kind == kind).count()
    }
}
