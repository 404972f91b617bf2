//! # Error Types
//!
//! Hard validation errors for wind_core. A calculation either succeeds
//! (possibly with soft warnings, see [`crate::warnings`]) or is rejected
//! with one of these, naming the offending field by its dotted path.
//!
//! ## Example
//!
//! ```rust
//! use wind_core::errors::{CalcError, CalcResult};
//!
//! fn validate_width(width_m: f64) -> CalcResult<()> {
//!     if width_m <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "geometry.width_m",
//!             width_m.to_string(),
//!             "Width must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_width(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for wind_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured rejection of a calculation request.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-positive, NaN, inconsistent)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A field required by the selected mounting variant is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Material name not present in the material property table
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// Unrecognized terrain, mounting-variant or section tag
    #[error("Unknown value for '{field}': {value}")]
    UnknownCategory { field: String, value: String },

    /// JSON or TOML (de)serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create an UnknownCategory error
    pub fn unknown_category(field: impl Into<String>, value: impl Into<String>) -> Self {
        CalcError::UnknownCategory {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// The field this error refers to, when it names one
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::InvalidInput { field, .. }
            | CalcError::MissingField { field }
            | CalcError::UnknownCategory { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::UnknownCategory { .. } => "UNKNOWN_CATEGORY",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}
