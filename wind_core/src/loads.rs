//! # Load Combinations
//!
//! EN 1990 partial factors and the two ultimate limit state combinations
//! used by the verification stage:
//!
//! | Name | Equation        | Used for                         |
//! |------|-----------------|----------------------------------|
//! | STR  | 1.35 G + 1.5 W  | member and fixing strength       |
//! | EQU  | 1.0 G + 1.5 W   | cases where self-weight resists  |
//!
//! Wind is the only variable action on a sign; imposed and snow loads are
//! not considered.

use serde::{Deserialize, Serialize};

/// ULS partial factors (EN 1990 Table A1.2(B), UK NA)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialFactors {
    /// γ_G for unfavourable permanent actions
    pub permanent_unfavourable: f64,
    /// γ_G for favourable permanent actions
    pub permanent_favourable: f64,
    /// γ_Q for the leading variable (wind) action
    pub wind: f64,
}

impl Default for PartialFactors {
    fn default() -> Self {
        PartialFactors {
            permanent_unfavourable: 1.35,
            permanent_favourable: 1.0,
            wind: 1.5,
        }
    }
}

/// A factored combination of permanent and wind actions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCombination {
    /// Combination identifier ("STR", "EQU")
    pub name: String,
    /// Human-readable equation, e.g. "1.35G + 1.5W"
    pub equation: String,
    pub permanent_factor: f64,
    pub wind_factor: f64,
}

impl LoadCombination {
    pub fn new(name: impl Into<String>, permanent_factor: f64, wind_factor: f64) -> Self {
        LoadCombination {
            name: name.into(),
            equation: format!("{}G + {}W", permanent_factor, wind_factor),
            permanent_factor,
            wind_factor,
        }
    }

    /// Strength combination with unfavourable self-weight
    pub fn strength(factors: &PartialFactors) -> Self {
        Self::new("STR", factors.permanent_unfavourable, factors.wind)
    }

    /// Equilibrium combination with favourable self-weight
    pub fn equilibrium(factors: &PartialFactors) -> Self {
        Self::new("EQU", factors.permanent_favourable, factors.wind)
    }

    /// Factored permanent action
    pub fn permanent(&self, g: f64) -> f64 {
        self.permanent_factor * g
    }

    /// Factored wind action
    pub fn wind(&self, w: f64) -> f64 {
        self.wind_factor * w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_factors() {
        let f = PartialFactors::default();
        assert_eq!(f.permanent_unfavourable, 1.35);
        assert_eq!(f.permanent_favourable, 1.0);
        assert_eq!(f.wind, 1.5);
    }

    #[test]
    fn test_strength_combination() {
        let str_combo = LoadCombination::strength(&PartialFactors::default());
        assert_eq!(str_combo.equation, "1.35G + 1.5W");
        assert!((str_combo.permanent(2.0) - 2.7).abs() < 1e-12);
        assert!((str_combo.wind(10.0) - 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_combinations_differ_only_in_permanent_factor() {
        let factors = PartialFactors::default();
        let (str_combo, equ) = (LoadCombination::strength(&factors), LoadCombination::equilibrium(&factors));
        assert_eq!(equ.name, "EQU");
        assert_eq!(str_combo.wind_factor, equ.wind_factor);
        assert!(equ.permanent_factor < str_combo.permanent_factor);
    }
}
