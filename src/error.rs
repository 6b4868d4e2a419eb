//! Error types for cutting plan calculation.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for planner failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found or unreadable (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// Input is not valid JSON for the expected shape (-3)
    ParseError = -3,
    /// Request references a material that is not configured (E100)
    UnknownMaterialType = 100,
    /// Piece is longer than its material's stock unit (E101)
    PieceTooLong = 101,
    /// Piece or settings field out of range (E102)
    InvalidInput = 102,
    /// Report export failed (E200)
    ExportFailed = 200,
}

/// Main error type for the planner.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Unknown material type: {material_type}")]
    UnknownMaterialType { material_type: String },

    #[error("Piece of length {length} is too long for unit length {unit_length}")]
    PieceTooLong { length: f64, unit_length: f64 },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl PlanError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PlanError::UnknownMaterialType { .. } => ErrorCode::UnknownMaterialType,
            PlanError::PieceTooLong { .. } => ErrorCode::PieceTooLong,
            PlanError::InvalidInput { .. } => ErrorCode::InvalidInput,
            PlanError::FileNotFound { .. } => ErrorCode::FileNotFound,
            PlanError::EmptyFile { .. } => ErrorCode::EmptyFile,
            PlanError::Io(_) => ErrorCode::FileNotFound,
            PlanError::Json(_) => ErrorCode::ParseError,
            PlanError::Csv(_) => ErrorCode::ExportFailed,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }

    /// Whether the error was caused by the request itself rather than the environment.
    ///
    /// Transport layers map these to client-error responses.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PlanError::UnknownMaterialType { .. }
                | PlanError::PieceTooLong { .. }
                | PlanError::InvalidInput { .. }
                | PlanError::Json(_)
        )
    }
}

/// Result type alias for planner operations.
pub type Result<T> = std::result::Result<T, PlanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = PlanError::UnknownMaterialType {
            material_type: "oak".to_string(),
        };
        assert_eq!(err.code(), ErrorCode::UnknownMaterialType);
        assert_eq!(err.code_value(), 100);

        let err = PlanError::PieceTooLong {
            length: 120.0,
            unit_length: 100.0,
        };
        assert_eq!(err.code_value(), 101);
    }

    #[test]
    fn test_error_messages_name_offender() {
        let err = PlanError::UnknownMaterialType {
            material_type: "walnut".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown material type: walnut");

        let err = PlanError::PieceTooLong {
            length: 250.5,
            unit_length: 240.0,
        };
        assert!(err.to_string().contains("250.5"));
        assert!(err.to_string().contains("240"));
    }

    #[test]
    fn test_client_errors() {
        assert!(PlanError::InvalidInput {
            message: "bad".into()
        }
        .is_client_error());
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert!(!PlanError::Io(io).is_client_error());
    }
}
