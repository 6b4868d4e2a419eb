//! Units-needed and cost aggregation.

use crate::config::Settings;
use crate::error::{PlanError, Result};
use crate::model::MaterialArrangement;
use std::collections::BTreeMap;

/// Purchase totals per material type and overall.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CostSummary {
    pub units_needed_by_type: BTreeMap<String, usize>,
    pub cost_by_type: BTreeMap<String, f64>,
    pub total_cost: f64,
}

/// Compute how many units of each material to buy and what they cost.
pub fn compute_costs(arrangements: &[MaterialArrangement], settings: &Settings) -> Result<CostSummary> {
    let mut summary = CostSummary::default();

    for arrangement in arrangements {
        let spec = settings
            .material(&arrangement.material_type)
            .ok_or_else(|| PlanError::UnknownMaterialType {
                material_type: arrangement.material_type.clone(),
            })?;

        let units_needed = arrangement.units_needed();
        let cost = units_needed as f64 * spec.price_per_unit;

        summary
            .units_needed_by_type
            .insert(arrangement.material_type.clone(), units_needed);
        summary
            .cost_by_type
            .insert(arrangement.material_type.clone(), cost);
        summary.total_cost += cost;
    }

    Ok(summary)
}
