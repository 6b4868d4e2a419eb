//! Validation of piece requests and settings before planning.

use crate::config::Settings;
use crate::error::{PlanError, Result};
use crate::model::Piece;

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }

    /// Turn collected errors into a single [`PlanError::InvalidInput`].
    pub fn into_result(self) -> Result<ValidationResult> {
        if self.passed {
            Ok(self)
        } else {
            Err(PlanError::InvalidInput {
                message: self.errors.join("; "),
            })
        }
    }
}

/// Validate a full request.
///
/// Field range problems are collected as errors; references to unknown
/// materials are left to grouping, which reports them as
/// [`PlanError::UnknownMaterialType`].
pub fn validate_request(pieces: &[Piece], settings: &Settings) -> ValidationResult {
    let mut result = validate_settings(settings);

    for (idx, piece) in pieces.iter().enumerate() {
        result.merge(validate_piece(piece, idx + 1));
    }

    for name in settings.materials.keys() {
        if !pieces.iter().any(|p| &p.material_type == name) {
            result.add_warning(format!("Material '{}' is not used by any piece", name));
        }
    }

    result
}

/// Validate run settings.
pub fn validate_settings(settings: &Settings) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if !settings.kerf_width.is_finite() || settings.kerf_width < 0.0 {
        result.add_error(format!(
            "Invalid kerf width {}: must be zero or positive",
            settings.kerf_width
        ));
    }

    for (name, spec) in &settings.materials {
        if !spec.unit_length.is_finite() || spec.unit_length <= 0.0 {
            result.add_error(format!(
                "Material '{}': Invalid unit length {}",
                name, spec.unit_length
            ));
        }

        if !spec.price_per_unit.is_finite() || spec.price_per_unit < 0.0 {
            result.add_error(format!(
                "Material '{}': Invalid price {}",
                name, spec.price_per_unit
            ));
        } else if spec.price_per_unit == 0.0 {
            result.add_warning(format!("Material '{}': Price is zero", name));
        }
    }

    result
}

/// Validate a single piece request.
pub fn validate_piece(piece: &Piece, piece_num: usize) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if !piece.length.is_finite() || piece.length <= 0.0 {
        result.add_error(format!(
            "Piece {} ({}): Invalid length {}",
            piece_num, piece.material_type, piece.length
        ));
    }

    if piece.count == 0 {
        result.add_error(format!(
            "Piece {} ({}): Count must be at least 1",
            piece_num, piece.material_type
        ));
    }

    result
}
