//! # Beam Formulas
//!
//! Simply-supported and cantilever formulas used by the verification stage.
//! Any consistent unit set works; the verification code uses N and mm.
//!
//! ## Reference
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1

// =============================================================================
// SIMPLY-SUPPORTED, UNIFORM LOAD
// Panel strip spanning between two channels
// =============================================================================

/// Maximum moment for uniform load over a simple span
///
/// # Formula
/// M_max = wL²/8
///
/// ```rust
/// use wind_core::equations::beam::uniform_load_max_moment;
///
/// // 1.2 N/mm over 600 mm
/// assert!((uniform_load_max_moment(1.2, 600.0) - 54_000.0).abs() < 1e-9);
/// ```
#[inline]
pub fn uniform_load_max_moment(w: f64, l: f64) -> f64 {
    w * l * l / 8.0
}

/// Midspan deflection for uniform load over a simple span
///
/// # Formula (Roark's Table 8.1, Case 2a)
/// δ_max = 5wL⁴ / (384EI)
#[inline]
pub fn uniform_load_max_deflection(w: f64, l: f64, e: f64, i: f64) -> f64 {
    5.0 * w * l.powi(4) / (384.0 * e * i)
}

/// Longest span whose midspan deflection stays within `L / ratio`
///
/// Solving 5wL⁴/(384EI) = L/ratio for L:
/// L = ∛(384EI / (5w · ratio))
#[inline]
pub fn uniform_load_span_for_deflection_ratio(w: f64, e: f64, i: f64, ratio: f64) -> f64 {
    (384.0 * e * i / (5.0 * w * ratio)).cbrt()
}

/// Longest span whose bending stress wL²/8Z stays within `f`
///
/// L = √(8fZ / w)
#[inline]
pub fn uniform_load_span_for_stress(w: f64, z: f64, f: f64) -> f64 {
    (8.0 * f * z / w).sqrt()
}

// =============================================================================
// CANTILEVER, POINT LOAD AT TIP
// Projecting sign bracket
// =============================================================================

/// Root moment of a cantilever with tip load P
///
/// # Formula
/// M = P·L
#[inline]
pub fn cantilever_point_load_moment(p: f64, l: f64) -> f64 {
    p * l
}

/// Tip deflection of a cantilever with tip load P
///
/// # Formula (Roark's Table 8.1, Case 1a)
/// δ = PL³ / (3EI)
///
/// ```rust
/// use wind_core::equations::beam::cantilever_point_load_deflection;
///
/// // 1 kN at 500 mm on a section with I = 1e6 mm⁴, steel
/// let d = cantilever_point_load_deflection(1000.0, 500.0, 210_000.0, 1.0e6);
/// assert!((d - 0.1984).abs() < 1e-3);
/// ```
#[inline]
pub fn cantilever_point_load_deflection(p: f64, l: f64, e: f64, i: f64) -> f64 {
    p * l.powi(3) / (3.0 * e * i)
}

// =============================================================================
// STRESS
// =============================================================================

/// Extreme fibre bending stress σ = M/Z
#[inline]
pub fn bending_stress(m: f64, z: f64) -> f64 {
    m / z
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_deflection() {
        // w = 1 N/mm, L = 1000 mm, E = 70000, I = 100 mm⁴/mm × 1000 mm
        // δ = 5 × 1 × 1e12 / (384 × 70000 × 1e5) = 1.860 mm
        let d = uniform_load_max_deflection(1.0, 1000.0, 70_000.0, 1.0e5);
        assert!((d - 1.860).abs() < 1e-3);
    }

    #[test]
    fn test_span_for_deflection_ratio_is_inverse() {
        let (w, e, i, ratio) = (0.9, 70_000.0, 94_500.0, 200.0);
        let l = uniform_load_span_for_deflection_ratio(w, e, i, ratio);
        let d = uniform_load_max_deflection(w, l, e, i);
        assert!((d - l / ratio).abs() < 1e-9);
    }

    #[test]
    fn test_span_for_stress_is_inverse() {
        let (w, z, f) = (1.3, 63_000.0, 100.0);
        let l = uniform_load_span_for_stress(w, z, f);
        let sigma = bending_stress(uniform_load_max_moment(w, l), z);
        assert!((sigma - f).abs() < 1e-9);
    }

    #[test]
    fn test_cantilever_moment() {
        assert_eq!(cantilever_point_load_moment(2.5, 0.8), 2.0);
    }
}
