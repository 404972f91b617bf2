//! # Structural Equations
//!
//! Pure formulas shared by the verification strategies. Keeping them in one
//! place lets each be checked against its reference once.
//!
//! ## Modules
//!
//! - [`beam`] - simple-span and cantilever moment/deflection formulas
//! - [`section`] - section properties for RHS, CHS and solid sections
//! - [`interaction`] - combined tension/shear utilization
//!
//! ## Units
//!
//! The formulas are unit-agnostic. Callers work in N and mm (stresses in MPa).

pub mod beam;
pub mod interaction;
pub mod section;

pub use beam::{
    bending_stress,
    cantilever_point_load_deflection,
    cantilever_point_load_moment,
    uniform_load_max_deflection,
    uniform_load_max_moment,
    uniform_load_span_for_deflection_ratio,
    uniform_load_span_for_stress,
};
pub use interaction::{linear_interaction, quadratic_interaction};
