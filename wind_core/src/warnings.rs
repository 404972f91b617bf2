//! # Warnings
//!
//! Soft findings that never abort a calculation. Every stage appends to a
//! single [`WarningLog`] that is threaded through the pipeline as an explicit
//! `&mut` parameter; entries are never removed, so the final order mirrors
//! stage execution order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a soft warning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WarningKind {
    /// A conservative constant or default was substituted
    ConservativeAssumption,
    /// A table lookup fell outside its breakpoints and was clamped to the edge
    BoundaryClamped,
    /// An input is valid but outside the typical range for this procedure
    OutOfRangeInput,
    /// The base wind speed came from a low-confidence gazetteer match
    LowConfidence,
    /// A structural check returned a utilization above 1.0
    ElementInadequate,
}

impl WarningKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            WarningKind::ConservativeAssumption => "Conservative assumption",
            WarningKind::BoundaryClamped => "Boundary clamped",
            WarningKind::OutOfRangeInput => "Out-of-range input",
            WarningKind::LowConfidence => "Low confidence",
            WarningKind::ElementInadequate => "Element inadequate",
        }
    }
}

/// Pipeline stage a warning originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stage {
    Validation,
    WindPressure,
    ForceCoefficient,
    StructuralVerification,
}

impl Stage {
    pub const ALL: [Stage; 4] = [
        Stage::Validation,
        Stage::WindPressure,
        Stage::ForceCoefficient,
        Stage::StructuralVerification,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Stage::Validation => "Validation",
            Stage::WindPressure => "Wind pressure",
            Stage::ForceCoefficient => "Force coefficient",
            Stage::StructuralVerification => "Structural verification",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A single soft warning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    pub kind: WarningKind,
    pub stage: Stage,
    pub message: String,
}

impl Warning {
    pub fn new(kind: WarningKind, stage: Stage, message: impl Into<String>) -> Self {
        Warning {
            kind,
            stage,
            message: message.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.stage,
            self.kind.display_name(),
            self.message
        )
    }
}

/// Append-only, insertion-ordered warning list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WarningLog {
    entries: Vec<Warning>,
}

impl WarningLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, warning: Warning) {
        tracing::debug!(stage = %warning.stage, kind = ?warning.kind, "{}", warning.message);
        self.entries.push(warning);
    }

    /// Shorthand for `push(Warning::new(..))`
    pub fn warn(&mut self, kind: WarningKind, stage: Stage, message: impl Into<String>) {
        self.push(Warning::new(kind, stage, message));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Warning> {
        self.entries.iter()
    }

    /// Number of warnings of the given kind
    pub fn count(&self, kind: WarningKind) -> usize {
        self.entries.iter().filter(|w| w.kind == kind).count()
    }

    pub fn into_vec(self) -> Vec<Warning> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_preserves_insertion_order() {
        let mut log = WarningLog::new();
        log.warn(WarningKind::OutOfRangeInput, Stage::Validation, "first");
        log.warn(WarningKind::ConservativeAssumption, Stage::WindPressure, "second");
        log.warn(WarningKind::BoundaryClamped, Stage::WindPressure, "third");

        let messages: Vec<_> = log.iter().map(|w| w.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
        assert_eq!(log.count(WarningKind::BoundaryClamped), 1);
    }

    #[test]
    fn test_log_serializes_as_plain_list() {
        let mut log = WarningLog::new();
        log.warn(WarningKind::LowConfidence, Stage::WindPressure, "fallback speed");
        let json = serde_json::to_string(&log).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("LowConfidence"));
    }

    #[test]
    fn test_warning_display() {
        let w = Warning::new(WarningKind::ElementInadequate, Stage::StructuralVerification, "post bending 1.20");
        assert_eq!(
            w.to_string(),
            "[Structural verification] Element inadequate: post bending 1.20"
        );
    }
}
