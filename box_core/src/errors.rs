//! # Error Types
//!
//! Structured error types for box_core. Every failure carries enough context
//! (field name, offending value, violated constraint) for a front end to
//! re-prompt the user without parsing message strings.
//!
//! ## Example
//!
//! ```rust
//! use box_core::errors::{BoxError, BoxResult};
//!
//! fn check_height(height_mm: u32) -> BoxResult<()> {
//!     if height_mm == 0 {
//!         return Err(BoxError::invalid_dimension(
//!             "height_mm",
//!             height_mm.to_string(),
//!             "must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(check_height(0).unwrap_err().error_code(), "INVALID_DIMENSION");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for box_core operations
pub type BoxResult<T> = Result<T, BoxError>;

/// Structured error type for decomposition operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BoxError {
    /// An input dimension is outside its allowed range or enumeration.
    /// Raised before any solver step runs.
    #[error("Invalid dimension '{field}': {value} - {constraint}")]
    InvalidDimension {
        field: String,
        value: String,
        constraint: String,
    },

    /// The effective span collapsed to zero or less
    #[error("Degenerate geometry: {reason}")]
    DegenerateGeometry { reason: String },

    /// A configuration table (limits, catalog, drill pattern) is unusable
    #[error("Invalid settings '{field}': {reason}")]
    InvalidSettings { field: String, reason: String },

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

    /// An export encoder failed to produce its document
    #[error("Export error ({format}): {reason}")]
    ExportError { format: String, reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl BoxError {
    /// Create an InvalidDimension error
    pub fn invalid_dimension(
        field: impl Into<String>,
        value: impl Into<String>,
        constraint: impl Into<String>,
    ) -> Self {
        BoxError::InvalidDimension {
            field: field.into(),
            value: value.into(),
            constraint: constraint.into(),
        }
    }

    /// Create a DegenerateGeometry error
    pub fn degenerate_geometry(reason: impl Into<String>) -> Self {
        BoxError::DegenerateGeometry {
            reason: reason.into(),
        }
    }

    /// Create an InvalidSettings error
    pub fn invalid_settings(field: impl Into<String>, reason: impl Into<String>) -> Self {
        BoxError::InvalidSettings {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        BoxError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an ExportError
    pub fn export_error(format: impl Into<String>, reason: impl Into<String>) -> Self {
        BoxError::ExportError {
            format: format.into(),
            reason: reason.into(),
        }
    }

    /// The offending input field, if this error is tied to one
    pub fn field(&self) -> Option<&str> {
        match self {
            BoxError::InvalidDimension { field, .. } | BoxError::InvalidSettings { field, .. } => {
                Some(field)
            }
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BoxError::InvalidDimension { .. } => "INVALID_DIMENSION",
            BoxError::DegenerateGeometry { .. } => "DEGENERATE_GEOMETRY",
            BoxError::InvalidSettings { .. } => "INVALID_SETTINGS",
            BoxError::FileError { .. } => "FILE_ERROR",
            BoxError::SerializationError { .. } => "SERIALIZATION_ERROR",
            BoxError::ExportError { .. } => "EXPORT_ERROR",
            BoxError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

impl From<serde_json::Error> for BoxError {
    fn from(e: serde_json::Error) -> Self {
        BoxError::SerializationError {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = BoxError::invalid_dimension("length_mm", "12000", "must be between 2000 and 9600");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidDimension\""));
        let roundtrip: BoxError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            BoxError::degenerate_geometry("zero span").error_code(),
            "DEGENERATE_GEOMETRY"
        );
        assert_eq!(BoxError::export_error("dxf", "x").error_code(), "EXPORT_ERROR");
    }

    #[test]
    fn test_field_accessor() {
        let error = BoxError::invalid_dimension("width_mm", "10", "too small");
        assert_eq!(error.field(), Some("width_mm"));
        assert_eq!(BoxError::degenerate_geometry("x").field(), None);
    }

    #[test]
    fn test_display_names_field_and_constraint() {
        let error = BoxError::invalid_dimension("height_mm", "100", "must be between 1500 and 3000");
        let msg = error.to_string();
        assert!(msg.contains("height_mm"));
        assert!(msg.contains("1500 and 3000"));
    }
}
