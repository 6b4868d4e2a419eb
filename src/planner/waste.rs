//! Waste statistics and improvement suggestions.

use crate::config::{Settings, HIGH_AVERAGE_WASTE_RATIO, LARGE_UNIT_WASTE_RATIO};
use crate::error::{PlanError, Result};
use crate::model::{MaterialArrangement, Suggestion, WasteStatistics};

/// Classify the waste left in one material type's units.
pub fn classify_waste(unit_wastes: &[f64], unit_length: f64) -> Suggestion {
    let average = if unit_wastes.is_empty() {
        0.0
    } else {
        unit_wastes.iter().sum::<f64>() / unit_wastes.len() as f64
    };

    if average > HIGH_AVERAGE_WASTE_RATIO * unit_length {
        Suggestion::CombineOrders
    } else if unit_wastes.len() > 1
        && unit_wastes
            .iter()
            .any(|&w| w > LARGE_UNIT_WASTE_RATIO * unit_length)
    {
        Suggestion::RearrangePieces
    } else {
        Suggestion::Acceptable
    }
}

/// Aggregate waste over all arrangements.
pub fn calculate_waste_statistics(
    arrangements: &[MaterialArrangement],
    settings: &Settings,
) -> Result<WasteStatistics> {
    let mut stats = WasteStatistics::default();

    for arrangement in arrangements {
        let material_type = &arrangement.material_type;
        let spec = settings
            .material(material_type)
            .ok_or_else(|| PlanError::UnknownMaterialType {
                material_type: material_type.clone(),
            })?;

        let type_waste = arrangement.total_waste();
        let type_total = arrangement.units_needed() as f64 * spec.unit_length;
        let distribution = arrangement.waste_distribution();

        stats
            .suggestion_by_type
            .insert(material_type.clone(), classify_waste(&distribution, spec.unit_length));
        stats.waste_by_type.insert(material_type.clone(), type_waste);
        stats
            .waste_distribution
            .insert(material_type.clone(), distribution);
        stats.total_waste += type_waste;
        stats.total_wood_used += type_total;
    }

    stats.waste_percentage = if stats.total_wood_used > 0.0 {
        stats.total_waste / stats.total_wood_used * 100.0
    } else {
        0.0
    };

    Ok(stats)
}
