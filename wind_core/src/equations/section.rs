//! # Cross-Section Property Formulas
//!
//! Geometric properties of the bracket and post sections, all in mm.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `I` = Second moment of area about the bending axis
//! - `W` = Elastic section modulus (I / extreme fibre distance)
//! - `b`, `h` = Outside width and depth
//! - `t` = Wall thickness
//! - `D` = Outside diameter
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table A.1
//! - SCI P363 section property conventions

use std::f64::consts::PI;

// =============================================================================
// RECTANGULAR HOLLOW SECTION (RHS / SHS)
// =============================================================================

/// Area of a rectangular hollow section
///
/// ```text
///     ┌─────────┐
///     │ ┌─────┐ │
///   h │ │     │ │ t
///     │ └─────┘ │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// A = bh − (b − 2t)(h − 2t)
#[inline]
pub fn rhs_area(b: f64, h: f64, t: f64) -> f64 {
    b * h - (b - 2.0 * t) * (h - 2.0 * t)
}

/// Second moment of area of an RHS bending about the axis parallel to `b`
///
/// # Formula
/// I = (bh³ − b_i h_i³) / 12, with b_i = b − 2t, h_i = h − 2t
///
/// ```rust
/// use wind_core::equations::section::rhs_moment_of_inertia;
///
/// // 100 × 50 × 5 RHS, bending about the major axis
/// let i = rhs_moment_of_inertia(50.0, 100.0, 5.0);
/// assert!((i - 1.7367e6).abs() < 1e2);
/// ```
#[inline]
pub fn rhs_moment_of_inertia(b: f64, h: f64, t: f64) -> f64 {
    let bi = b - 2.0 * t;
    let hi = h - 2.0 * t;
    (b * h.powi(3) - bi * hi.powi(3)) / 12.0
}

/// Elastic section modulus of an RHS: W = 2I / h
#[inline]
pub fn rhs_section_modulus(b: f64, h: f64, t: f64) -> f64 {
    2.0 * rhs_moment_of_inertia(b, h, t) / h
}

/// Shear area of an RHS with the load parallel to `h` (two webs): A_v = 2ht
#[inline]
pub fn rhs_shear_area(h: f64, t: f64) -> f64 {
    2.0 * h * t
}

// =============================================================================
// CIRCULAR HOLLOW SECTION (CHS)
// =============================================================================

/// Area of a circular hollow section: A = π(D² − d²)/4, d = D − 2t
#[inline]
pub fn chs_area(d: f64, t: f64) -> f64 {
    let di = d - 2.0 * t;
    PI * (d * d - di * di) / 4.0
}

/// Second moment of area of a CHS: I = π(D⁴ − d⁴)/64
#[inline]
pub fn chs_moment_of_inertia(d: f64, t: f64) -> f64 {
    let di = d - 2.0 * t;
    PI * (d.powi(4) - di.powi(4)) / 64.0
}

/// Elastic section modulus of a CHS: W = 2I / D
#[inline]
pub fn chs_section_modulus(d: f64, t: f64) -> f64 {
    2.0 * chs_moment_of_inertia(d, t) / d
}

/// Shear area of a CHS: A_v = 2A/π
#[inline]
pub fn chs_shear_area(d: f64, t: f64) -> f64 {
    2.0 * chs_area(d, t) / PI
}

// =============================================================================
// SOLID SECTIONS (timber posts)
// =============================================================================

/// Area of a solid circle: A = πD²/4
#[inline]
pub fn circle_area(d: f64) -> f64 {
    PI * d * d / 4.0
}

/// Section modulus of a solid circle: W = πD³/32
#[inline]
pub fn circle_section_modulus(d: f64) -> f64 {
    PI * d.powi(3) / 32.0
}

/// Area of a solid square: A = b²
#[inline]
pub fn square_area(b: f64) -> f64 {
    b * b
}

/// Section modulus of a solid square: W = b³/6
#[inline]
pub fn square_section_modulus(b: f64) -> f64 {
    b.powi(3) / 6.0
}
