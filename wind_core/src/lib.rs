//! # wind_core - Wind Loading Engine for Signage
//!
//! `wind_core` computes wind forces, overturning moments and structural
//! utilizations for wall-mounted, projecting and post-mounted signs, using
//! the UK National Annex simplified procedure for BS EN 1991-1-4 as laid out
//! in SCI P394. Results are preliminary estimates, not certified design.
//!
//! ## Design Philosophy
//!
//! - **Pure**: [`calculate`] is a deterministic function of its inputs, with
//!   no I/O and no shared mutable state
//! - **JSON-First**: every input, intermediate and output type is serde
//! - **Traceable**: every intermediate factor is returned with its clause
//!   reference, and every conservative substitution leaves a warning
//! - **Two error classes**: hard [`CalcError`]s abort before any factor is
//!   computed; soft [`Warning`]s ride along with a valid result
//!
//! ## Quick Start
//!
//! ```rust
//! use wind_core::{calculate, CalculationInput, OverallStatus};
//!
//! let input = CalculationInput::from_json(r#"{
//!     "site": {
//!         "base_wind_speed": 22.0, "altitude_m": 10.0,
//!         "shore_distance_km": 5.0, "terrain": "country"
//!     },
//!     "geometry": {"width_m": 4.0, "height_m": 1.5, "depth_m": 0.3, "mounting_height_m": 5.0},
//!     "mounting": {"type": "WallMounted"}
//! }"#)?;
//!
//! let result = calculate(&input)?;
//! assert_eq!(result.status, OverallStatus::Pass);
//! println!("q_p = {:.0} Pa, F_w = {:.2} kN", result.peak_pressure_pa, result.characteristic_force_kn);
//! # Ok::<(), wind_core::CalcError>(())
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - the pipeline: wind pressure, force coefficients, verification
//! - [`tables`] - exposure, size, dynamic and roughness factor tables
//! - [`site`], [`geometry`], [`mounting`], [`input`] - the request
//! - [`result`] - the output record
//! - [`validation`], [`warnings`], [`errors`] - hard and soft findings
//! - [`materials`], [`equations`], [`loads`], [`units`] - engineering building blocks
//! - [`gazetteer`] - postcode to base wind speed
//! - [`settings`] - tunable constants

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod gazetteer;
pub mod geometry;
pub mod input;
pub mod loads;
pub mod materials;
pub mod mounting;
pub mod references;
pub mod result;
pub mod settings;
pub mod site;
pub mod tables;
pub mod units;
pub mod validation;
pub mod warnings;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, calculate_with_settings, MountingVariant};
pub use errors::{CalcError, CalcResult};
pub use gazetteer::{Confidence, Gazetteer, GazetteerMatch, RegionalGazetteer};
pub use geometry::{PanelSpec, SignGeometry};
pub use input::CalculationInput;
pub use mounting::{MountingConfiguration, MountingType};
pub use result::{CalculationResult, CheckStatus, NamedFactor, OverallStatus, UtilizationCheck};
pub use settings::EngineSettings;
pub use site::{SiteParameters, TerrainCategory};
pub use warnings::{Stage, Warning, WarningKind, WarningLog};
