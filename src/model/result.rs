//! Calculation output: arrangements, totals and waste statistics.

use super::MaterialArrangement;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Advisory classification of a material type's waste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suggestion {
    #[serde(rename = "consider combining orders or finding smaller pieces to fill gaps")]
    CombineOrders,
    #[serde(rename = "large waste in some units - consider rearranging pieces")]
    RearrangePieces,
    #[serde(rename = "waste is within acceptable range")]
    Acceptable,
}

impl Suggestion {
    /// Advisory text shown to the user.
    pub fn as_str(&self) -> &'static str {
        match self {
            Suggestion::CombineOrders => {
                "consider combining orders or finding smaller pieces to fill gaps"
            }
            Suggestion::RearrangePieces => "large waste in some units - consider rearranging pieces",
            Suggestion::Acceptable => "waste is within acceptable range",
        }
    }
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived waste metrics.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WasteStatistics {
    pub total_waste: f64,
    pub waste_by_type: BTreeMap<String, f64>,
    pub total_wood_used: f64,
    /// Total waste as a share of total wood bought, 0 when nothing was bought.
    pub waste_percentage: f64,
    /// Per-unit waste in unit creation order.
    pub waste_distribution: BTreeMap<String, Vec<f64>>,
    pub suggestion_by_type: BTreeMap<String, Suggestion>,
}

/// Final output of one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// One arrangement per material type, in order of first request.
    pub arrangements: Vec<MaterialArrangement>,
    pub units_needed_by_type: BTreeMap<String, usize>,
    pub cost_by_type: BTreeMap<String, f64>,
    pub total_cost: f64,
    pub waste_statistics: WasteStatistics,
    pub currency_label: String,
}

impl CalculationResult {
    /// Find the arrangement for a material type.
    pub fn arrangement(&self, material_type: &str) -> Option<&MaterialArrangement> {
        self.arrangements
            .iter()
            .find(|a| a.material_type == material_type)
    }

    /// Stock units to buy across all material types.
    pub fn total_units(&self) -> usize {
        self.units_needed_by_type.values().sum()
    }

    /// Whether no pieces were requested.
    pub fn is_empty(&self) -> bool {
        self.arrangements.is_empty()
    }
}
