//! # Validation
//!
//! Field-level checks shared by every stage. A [`Constraint`] is either hard
//! (violations return [`CalcError::InvalidInput`] and abort the calculation)
//! or soft (violations produce an [`WarningKind::OutOfRangeInput`] warning).
//!
//! ```rust
//! use wind_core::validation::{validate, Constraint};
//!
//! assert!(validate("geometry.width_m", -2.0, Constraint::Positive).is_err());
//!
//! let soft = validate("geometry.depth_m", 29.0, Constraint::Typical { min: 0.0, max: 10.0 });
//! assert!(soft.unwrap().is_some());
//! ```

use crate::errors::{CalcError, CalcResult};
use crate::warnings::{Stage, Warning, WarningKind, WarningLog};

/// A constraint on a single numeric field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// Hard: finite and > 0
    Positive,
    /// Hard: finite and >= 0
    NonNegative,
    /// Hard: finite and >= the given bound
    AtLeast(f64),
    /// Soft: finite, warn when outside [min, max]
    Typical { min: f64, max: f64 },
}

/// Check one value against one constraint.
///
/// Returns `Err` for hard violations (and for NaN/infinite values under any
/// constraint), `Ok(Some(warning))` for soft violations, `Ok(None)` otherwise.
pub fn validate(field: &str, value: f64, constraint: Constraint) -> CalcResult<Option<Warning>> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Value must be a finite number",
        ));
    }

    match constraint {
        Constraint::Positive if value <= 0.0 => Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Value must be positive",
        )),
        Constraint::NonNegative if value < 0.0 => Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Value must not be negative",
        )),
        Constraint::AtLeast(min) if value < min => Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("Value must be at least {}", min),
        )),
        Constraint::Typical { min, max } if value < min || value > max => Ok(Some(Warning::new(
            WarningKind::OutOfRangeInput,
            Stage::Validation,
            format!(
                "{} = {} is outside the typical range {}..{}; results may be outside the scope of the simplified procedure",
                field, value, min, max
            ),
        ))),
        _ => Ok(None),
    }
}

/// Validation helper that routes soft findings into a [`WarningLog`]
pub struct Validator<'a> {
    log: &'a mut WarningLog,
}

impl<'a> Validator<'a> {
    pub fn new(log: &'a mut WarningLog) -> Self {
        Validator { log }
    }

    /// Apply one constraint, pushing any soft warning to the log
    pub fn check(&mut self, field: &str, value: f64, constraint: Constraint) -> CalcResult<()> {
        if let Some(warning) = validate(field, value, constraint)? {
            self.log.push(warning);
        }
        Ok(())
    }

    /// Apply several constraints to one value, in order
    pub fn check_all(&mut self, field: &str, value: f64, constraints: &[Constraint]) -> CalcResult<()> {
        for constraint in constraints {
            self.check(field, value, *constraint)?;
        }
        Ok(())
    }

    /// Integer counts (fixings, brackets, posts) must be at least `min`
    pub fn check_count(&mut self, field: &str, value: u32, min: u32) -> CalcResult<()> {
        if value < min {
            return Err(CalcError::invalid_input(
                field,
                value.to_string(),
                format!("Count must be at least {}", min),
            ));
        }
        Ok(())
    }

    pub fn warn(&mut self, kind: WarningKind, message: impl Into<String>) {
        self.log.warn(kind, Stage::Validation, message);
    }
}
