//! # Factor Tables
//!
//! Static lookup data for the wind-loading procedure and the interpolation
//! machinery shared by all of it.
//!
//! Each table is a flat array of breakpoints per axis plus a flat, row-major
//! array of values. Lookups binary-search the breakpoints and interpolate
//! linearly (optionally in log-space along an axis). A coordinate outside the
//! breakpoint range is clamped to the nearest edge and reported as a
//! [`Clamp`]; the caller turns each clamp into exactly one
//! [`WarningKind::BoundaryClamped`] warning via [`Interpolated::resolve`].
//!
//! All tables are `static` and immutable, so concurrent lookups need no
//! synchronization.
//!
//! ## Modules
//!
//! - [`exposure`] - exposure factor curves and town correction
//! - [`structural`] - size factor and dynamic factor grids
//! - [`terrain`] - terrain-category roughness parameters

pub mod exposure;
pub mod structural;
pub mod terrain;

pub use exposure::{exposure_factor, town_correction_factor};
pub use structural::{dynamic_factor, size_factor};
pub use terrain::{roughness_parameters, RoughnessParameters};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::warnings::{Stage, WarningKind, WarningLog};

/// Interpolation scale along an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Linear,
    /// Interpolate in log10 of the coordinate (breakpoints must be > 0)
    Log,
}

impl Scale {
    fn map(self, x: f64) -> f64 {
        match self {
            Scale::Linear => x,
            Scale::Log => x.log10(),
        }
    }
}

/// One interpolation axis: a name for messages plus strictly increasing breakpoints
#[derive(Debug, Clone, Copy)]
pub struct Axis {
    pub name: &'static str,
    pub unit: &'static str,
    pub breakpoints: &'static [f64],
    pub scale: Scale,
}

/// Record of a coordinate that fell outside an axis and was clamped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clamp {
    pub table: String,
    pub axis: String,
    pub requested: f64,
    pub used: f64,
}

/// Bracketing position of a coordinate on an axis
#[derive(Debug, Clone, Copy)]
struct Position {
    lower: usize,
    fraction: f64,
}

impl Axis {
    pub fn first(&self) -> f64 {
        self.breakpoints[0]
    }

    pub fn last(&self) -> f64 {
        self.breakpoints[self.breakpoints.len() - 1]
    }

    /// Clamp a coordinate to the axis range, returning the clamp if one was applied
    pub fn clamp(&self, table: &'static str, x: f64) -> (f64, Option<Clamp>) {
        let used = x.clamp(self.first(), self.last());
        if used == x {
            (x, None)
        } else {
            tracing::trace!(table, axis = self.name, requested = x, used, "clamped lookup");
            let clamp = Clamp {
                table: table.to_string(),
                axis: self.name.to_string(),
                requested: x,
                used,
            };
            (used, Some(clamp))
        }
    }

    fn locate(&self, x: f64) -> Position {
        let bp = self.breakpoints;
        if bp.len() == 1 {
            return Position { lower: 0, fraction: 0.0 };
        }
        let upper = bp.partition_point(|&b| b <= x).clamp(1, bp.len() - 1);
        let lower = upper - 1;
        let x0 = self.scale.map(bp[lower]);
        let x1 = self.scale.map(bp[upper]);
        let fraction = ((self.scale.map(x) - x0) / (x1 - x0)).clamp(0.0, 1.0);
        Position { lower, fraction }
    }

    fn validate(&self, table: &str) -> CalcResult<()> {
        if self.breakpoints.is_empty() {
            return Err(CalcError::Internal {
                message: format!("{}: axis '{}' has no breakpoints", table, self.name),
            });
        }
        if self.breakpoints.windows(2).any(|w| w[1] <= w[0]) {
            return Err(CalcError::Internal {
                message: format!("{}: axis '{}' breakpoints not strictly increasing", table, self.name),
            });
        }
        if self.scale == Scale::Log && self.first() <= 0.0 {
            return Err(CalcError::Internal {
                message: format!("{}: log axis '{}' must be positive", table, self.name),
            });
        }
        Ok(())
    }
}

/// Result of a table lookup: the value plus any clamps applied on the way
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolated {
    pub value: f64,
    pub clamps: Vec<Clamp>,
}

impl Interpolated {
    pub fn exact(value: f64) -> Self {
        Interpolated { value, clamps: Vec::new() }
    }

    /// Emit one boundary-clamped warning per clamp and return the value
    pub fn resolve(self, log: &mut WarningLog, stage: Stage) -> f64 {
        for clamp in &self.clamps {
            log.warn(
                WarningKind::BoundaryClamped,
                stage,
                format!(
                    "{}: {} {} outside tabulated range, clamped to {}",
                    clamp.table, clamp.axis, clamp.requested, clamp.used
                ),
            );
        }
        self.value
    }
}

/// One-dimensional factor curve
#[derive(Debug, Clone, Copy)]
pub struct FactorTable {
    pub name: &'static str,
    pub axis: Axis,
    pub values: &'static [f64],
}

impl FactorTable {
    pub fn lookup(&self, x: f64) -> Interpolated {
        let (x, clamp) = self.axis.clamp(self.name, x);
        let p = self.axis.locate(x);
        let value = if p.fraction == 0.0 {
            self.values[p.lower]
        } else {
            lerp(self.values[p.lower], self.values[p.lower + 1], p.fraction)
        };
        Interpolated { value, clamps: clamp.into_iter().collect() }
    }

    pub fn validate(&self) -> CalcResult<()> {
        self.axis.validate(self.name)?;
        if self.values.len() != self.axis.breakpoints.len() {
            return Err(CalcError::Internal {
                message: format!("{}: value count does not match breakpoints", self.name),
            });
        }
        Ok(())
    }
}

/// Two-dimensional factor grid, values stored row-major (`rows × cols`)
#[derive(Debug, Clone, Copy)]
pub struct FactorGrid {
    pub name: &'static str,
    pub rows: Axis,
    pub cols: Axis,
    pub values: &'static [f64],
}

impl FactorGrid {
    fn at(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols.breakpoints.len() + col]
    }

    fn row_value(&self, row: usize, col: Position) -> f64 {
        if col.fraction == 0.0 {
            self.at(row, col.lower)
        } else {
            lerp(self.at(row, col.lower), self.at(row, col.lower + 1), col.fraction)
        }
    }

    /// Bilinear lookup; `row` and `col` are clamped independently
    pub fn lookup(&self, row: f64, col: f64) -> Interpolated {
        let (row, row_clamp) = self.rows.clamp(self.name, row);
        let (col, col_clamp) = self.cols.clamp(self.name, col);
        let r = self.rows.locate(row);
        let c = self.cols.locate(col);

        let lower = self.row_value(r.lower, c);
        let value = if r.fraction == 0.0 {
            lower
        } else {
            lerp(lower, self.row_value(r.lower + 1, c), r.fraction)
        };

        Interpolated {
            value,
            clamps: row_clamp.into_iter().chain(col_clamp).collect(),
        }
    }

    pub fn validate(&self) -> CalcResult<()> {
        self.rows.validate(self.name)?;
        self.cols.validate(self.name)?;
        if self.values.len() != self.rows.breakpoints.len() * self.cols.breakpoints.len() {
            return Err(CalcError::Internal {
                message: format!("{}: value count does not match grid shape", self.name),
            });
        }
        Ok(())
    }
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Check every built-in table's shape and breakpoint ordering
pub fn validate_all() -> CalcResult<()> {
    exposure::validate_tables()?;
    structural::validate_tables()?;
    terrain::validate_tables()
}
