//! woodcut-planner - Plan how to cut stock lengths of wood into requested pieces.
//!
//! Given a list of requested pieces and the stock lengths available for each
//! material, this library decides how many stock units to buy and where to cut
//! each piece, accounting for the width lost to the saw blade at every cut.
//!
//! # Example
//!
//! ```
//! use woodcut_planner::{calculate, Piece, Settings};
//!
//! let settings = Settings::new(0.0).with_material("pine", 100.0, 12.0);
//! let pieces = vec![Piece::new("pine", 40.0).with_count(2), Piece::new("pine", 20.0).with_count(2)];
//!
//! let result = calculate(&pieces, &settings).unwrap();
//! assert_eq!(result.units_needed_by_type["pine"], 2);
//! assert_eq!(result.total_cost, 24.0);
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod parser;
pub mod planner;
pub mod validation;

// Re-exports for convenience
pub use config::{MaterialSpec, Settings, Strategy};
pub use error::{ErrorCode, PlanError, Result};
pub use model::{
    CalculationResult, MaterialArrangement, Piece, PieceCount, Placement, StockUnit, Suggestion,
    WasteStatistics,
};
pub use parser::{load_pieces, load_request, load_settings, CalculationRequest};
pub use validation::{validate_request, ValidationResult};

use tracing::{info, warn};

/// Calculate the cutting arrangement for a request.
///
/// This is the main entry point and runs the full pipeline:
/// 1. Validate pieces and settings
/// 2. Group pieces by material type
/// 3. Arrange each material's pieces into stock units
/// 4. Total up units, costs and waste
///
/// Fails without partial results if a piece names an unknown material or is
/// longer than its material's stock unit.
pub fn calculate(pieces: &[Piece], settings: &Settings) -> Result<CalculationResult> {
    let validation = validate_request(pieces, settings);
    for warning in &validation.warnings {
        warn!("{}", warning);
    }
    validation.into_result()?;

    let groups = planner::group_pieces(pieces, settings)?;

    let mut arrangements = Vec::with_capacity(groups.len());
    for group in groups {
        let spec = settings.material(&group.material_type).ok_or_else(|| {
            PlanError::UnknownMaterialType {
                material_type: group.material_type.clone(),
            }
        })?;

        let units = planner::arrange_with_strategy(
            &group.lengths,
            spec.unit_length,
            settings.kerf_width,
            settings.strategy,
        )?;

        info!(
            "{}: {} piece(s) in {} unit(s) of {}",
            group.material_type,
            group.lengths.len(),
            units.len(),
            spec.unit_length
        );

        arrangements.push(MaterialArrangement::new(group.material_type, units));
    }

    let costs = planner::compute_costs(&arrangements, settings)?;
    let waste_statistics = planner::calculate_waste_statistics(&arrangements, settings)?;

    Ok(CalculationResult {
        arrangements,
        units_needed_by_type: costs.units_needed_by_type,
        cost_by_type: costs.cost_by_type,
        total_cost: costs.total_cost,
        waste_statistics,
        currency_label: settings.currency_label.clone(),
    })
}

/// Calculate the arrangement for a bundled request.
pub fn calculate_request(request: &CalculationRequest) -> Result<CalculationResult> {
    calculate(&request.pieces, &request.settings)
}
