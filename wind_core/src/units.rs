//! # Unit Types
//!
//! Thin SI newtypes used where the pipeline crosses between the unit sets of
//! its stages: wind actions are carried in m, kN, kNm and Pa, while member
//! checks run in mm, N, Nmm and MPa.
//!
//! Result records store plain `f64` fields with a unit suffix (`_kn`, `_pa`,
//! `_mm`); these wrappers only make the conversions explicit.
//!
//! ## Example
//!
//! ```rust
//! use wind_core::units::{KilonewtonMetres, Metres, Millimetres, NewtonMillimetres};
//!
//! let span: Millimetres = Metres(0.6).into();
//! assert_eq!(span.0, 600.0);
//!
//! let m: NewtonMillimetres = KilonewtonMetres(2.5).into();
//! assert_eq!(m.0, 2.5e6);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metres(pub f64);

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimetres(pub f64);

impl From<Metres> for Millimetres {
    fn from(m: Metres) -> Self {
        Millimetres(m.0 * 1000.0)
    }
}

impl From<Millimetres> for Metres {
    fn from(mm: Millimetres) -> Self {
        Metres(mm.0 / 1000.0)
    }
}

// ============================================================================
// Force
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilonewtons(pub f64);

impl From<Kilonewtons> for Newtons {
    fn from(kn: Kilonewtons) -> Self {
        Newtons(kn.0 * 1000.0)
    }
}

impl From<Newtons> for Kilonewtons {
    fn from(n: Newtons) -> Self {
        Kilonewtons(n.0 / 1000.0)
    }
}

// ============================================================================
// Moment
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilonewtonMetres(pub f64);

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMillimetres(pub f64);

impl From<KilonewtonMetres> for NewtonMillimetres {
    fn from(knm: KilonewtonMetres) -> Self {
        NewtonMillimetres(knm.0 * 1.0e6)
    }
}

impl From<NewtonMillimetres> for KilonewtonMetres {
    fn from(nmm: NewtonMillimetres) -> Self {
        KilonewtonMetres(nmm.0 / 1.0e6)
    }
}

// ============================================================================
// Pressure
// ============================================================================

/// Pressure in N/m²
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Pressure in kN/m²
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilopascals(pub f64);

impl From<Pascals> for Kilopascals {
    fn from(pa: Pascals) -> Self {
        Kilopascals(pa.0 / 1000.0)
    }
}

impl From<Kilopascals> for Pascals {
    fn from(kpa: Kilopascals) -> Self {
        Pascals(kpa.0 * 1000.0)
    }
}

impl Pascals {
    /// Line load in N/mm on a strip `width` wide
    pub fn on_strip(self, width: Millimetres) -> f64 {
        // 1 Pa = 1e-6 N/mm²
        self.0 * 1.0e-6 * width.0
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Metres);
impl_arithmetic!(Millimetres);
impl_arithmetic!(Newtons);
impl_arithmetic!(Kilonewtons);
impl_arithmetic!(KilonewtonMetres);
impl_arithmetic!(NewtonMillimetres);
impl_arithmetic!(Pascals);
impl_arithmetic!(Kilopascals);

/// kN → N
#[inline]
pub fn kn_to_n(kn: f64) -> f64 {
    Newtons::from(Kilonewtons(kn)).value()
}

/// m → mm
#[inline]
pub fn m_to_mm(m: f64) -> f64 {
    Millimetres::from(Metres(m)).value()
}

/// kNm → Nmm
#[inline]
pub fn knm_to_nmm(knm: f64) -> f64 {
    NewtonMillimetres::from(KilonewtonMetres(knm)).value()
}

/// Pa → kN/m²
#[inline]
pub fn pa_to_kpa(pa: f64) -> f64 {
    Kilopascals::from(Pascals(pa)).value()
}
