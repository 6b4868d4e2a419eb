//! All stock units used for one material type.

use super::StockUnit;
use serde::{Deserialize, Serialize};

/// Stock units of one material type, in creation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialArrangement {
    pub material_type: String,
    pub units: Vec<StockUnit>,
}

impl MaterialArrangement {
    /// Create a new arrangement.
    pub fn new(material_type: impl Into<String>, units: Vec<StockUnit>) -> Self {
        Self {
            material_type: material_type.into(),
            units,
        }
    }

    /// Number of stock units to buy.
    pub fn units_needed(&self) -> usize {
        self.units.len()
    }

    /// Sum of per-unit waste.
    pub fn total_waste(&self) -> f64 {
        self.units.iter().map(|u| u.waste).sum()
    }

    /// Largest waste left in any single unit.
    pub fn max_unit_waste(&self) -> f64 {
        self.units.iter().map(|u| u.waste).fold(0.0, f64::max)
    }

    /// Per-unit waste in creation order.
    pub fn waste_distribution(&self) -> Vec<f64> {
        self.units.iter().map(|u| u.waste).collect()
    }

    /// Lengths of every placed piece, unit by unit.
    pub fn placed_lengths(&self) -> Vec<f64> {
        self.units
            .iter()
            .flat_map(|u| u.placements.iter().map(|p| p.length))
            .collect()
    }
}
