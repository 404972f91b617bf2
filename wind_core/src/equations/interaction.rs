//! # Interaction Formulas
//!
//! Combined tension and shear utilization for fixings and anchors.

/// Quadratic (elliptical) interaction: √((T/T_cap)² + (V/V_cap)²)
///
/// Reduces to T/T_cap for pure tension and V/V_cap for pure shear.
///
/// ```rust
/// use wind_core::equations::interaction::quadratic_interaction;
///
/// assert_eq!(quadratic_interaction(8.0, 8.0, 0.0, 5.33), 1.0);
/// assert_eq!(quadratic_interaction(0.0, 8.0, 5.33, 5.33), 1.0);
/// ```
#[inline]
pub fn quadratic_interaction(t: f64, t_cap: f64, v: f64, v_cap: f64) -> f64 {
    (t / t_cap).hypot(v / v_cap)
}

/// Linear interaction: T/T_cap + V/V_cap
#[inline]
pub fn linear_interaction(t: f64, t_cap: f64, v: f64, v_cap: f64) -> f64 {
    t / t_cap + v / v_cap
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadratic_axes_are_exact() {
        assert_eq!(quadratic_interaction(12.0, 12.0, 0.0, 8.0), 1.0);
        assert_eq!(quadratic_interaction(0.0, 12.0, 8.0, 8.0), 1.0);
    }

    #[test]
    fn test_quadratic_half_and_half() {
        // √(0.5² + 0.5²) = 0.7071
        let u = quadratic_interaction(6.0, 12.0, 4.0, 8.0);
        assert!((u - 0.70711).abs() < 1e-5);
    }

    #[test]
    fn test_linear_is_more_onerous() {
        let q = quadratic_interaction(3.0, 12.0, 2.0, 8.0);
        let l = linear_interaction(3.0, 12.0, 2.0, 8.0);
        assert!(l > q);
        assert!((l - 0.5).abs() < 1e-12);
    }
}
