//! # Error Types
//!
//! Structured error types for stress_core. Every variant carries enough
//! context for a caller to tell which input was rejected and why, and the
//! whole enum serializes to JSON so front ends can forward it unchanged.
//!
//! ## Example
//!
//! ```rust
//! use stress_core::errors::{StressError, StressResult};
//!
//! fn check_inertia(moment_of_inertia: f64) -> StressResult<()> {
//!     if moment_of_inertia <= 0.0 {
//!         return Err(StressError::degenerate_section("moment_of_inertia", moment_of_inertia));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_inertia(0.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for stress_core operations
pub type StressResult<T> = Result<T, StressError>;

/// Structured error type for stress calculations and job handling.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum StressError {
    /// A section property used as a divisor is zero, negative or not finite.
    ///
    /// Stress formulas divide by the moment of inertia, the thickness, the
    /// area and the extreme-fiber distance. Any of those collapsing would
    /// otherwise produce NaN or infinite stresses.
    #[error("Degenerate section: {property} = {value} cannot be used as a divisor")]
    DegenerateSection { property: String, value: f64 },

    /// An input value is invalid (out of order, not finite, out of range)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl StressError {
    /// Create a DegenerateSection error
    pub fn degenerate_section(property: impl Into<String>, value: f64) -> Self {
        StressError::DegenerateSection {
            property: property.into(),
            value,
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        StressError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        StressError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        StressError::SerializationError {
            reason: reason.into(),
        }
    }

    /// True when the failure comes from the section itself rather than the
    /// force diagram or the surrounding plumbing.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, StressError::DegenerateSection { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            StressError::DegenerateSection { .. } => "DEGENERATE_SECTION",
            StressError::InvalidInput { .. } => "INVALID_INPUT",
            StressError::FileError { .. } => "FILE_ERROR",
            StressError::SerializationError { .. } => "SERIALIZATION_ERROR",
            StressError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

/// Return `value` if it is usable as a divisor, otherwise a
/// [`StressError::DegenerateSection`] naming `property`.
pub(crate) fn require_positive(property: &str, value: f64) -> StressResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        log::warn!("degenerate section: {} = {}", property, value);
        Err(StressError::degenerate_section(property, value))
    }
}

/// Return `value` if it is finite and not negative, otherwise a
/// [`StressError::DegenerateSection`] naming `property`.
pub(crate) fn require_non_negative(property: &str, value: f64) -> StressResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        log::warn!("degenerate section: {} = {}", property, value);
        Err(StressError::degenerate_section(property, value))
    }
}
