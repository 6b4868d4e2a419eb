//! Configuration constants and run settings for the planner.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Default saw blade width in cm.
pub const DEFAULT_KERF_WIDTH: f64 = 0.3;

/// Default currency label appended to prices.
pub const DEFAULT_CURRENCY: &str = " ILS";

/// Average waste per unit above this share of the unit length is considered high.
pub const HIGH_AVERAGE_WASTE_RATIO: f64 = 0.10;

/// A single unit wasting more than this share of its length is considered large.
pub const LARGE_UNIT_WASTE_RATIO: f64 = 0.20;

/// Width of ASCII cutting diagrams in characters.
pub const DIAGRAM_WIDTH: usize = 60;

/// Display suffix for lengths.
pub const LENGTH_UNIT: &str = "cm";

/// Order in which piece instances are fed to the placement loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Single pass, longest piece first.
    #[default]
    LongestFirst,
    /// Try several deterministic orderings and keep the least wasteful arrangement.
    BestOfOrderings,
}

impl Strategy {
    /// Parse a strategy name as used on the command line.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "longest-first" => Some(Strategy::LongestFirst),
            "best-of-orderings" | "best" => Some(Strategy::BestOfOrderings),
            _ => None,
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::LongestFirst => write!(f, "longest-first"),
            Strategy::BestOfOrderings => write!(f, "best-of-orderings"),
        }
    }
}

/// A purchasable stock type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// Length of one stock unit.
    pub unit_length: f64,
    /// Price of one stock unit.
    #[serde(alias = "price")]
    pub price_per_unit: f64,
}

impl MaterialSpec {
    /// Create a new material spec.
    pub fn new(unit_length: f64, price_per_unit: f64) -> Self {
        Self {
            unit_length,
            price_per_unit,
        }
    }
}

fn default_kerf_width() -> f64 {
    DEFAULT_KERF_WIDTH
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

/// Run configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Stock types keyed by material type name.
    #[serde(alias = "wood_types")]
    pub materials: BTreeMap<String, MaterialSpec>,
    /// Width lost at every cut.
    #[serde(default = "default_kerf_width", alias = "saw_width")]
    pub kerf_width: f64,
    /// Label appended to formatted prices.
    #[serde(default = "default_currency", alias = "currency")]
    pub currency_label: String,
    /// Placement strategy.
    #[serde(default)]
    pub strategy: Strategy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            materials: BTreeMap::new(),
            kerf_width: DEFAULT_KERF_WIDTH,
            currency_label: DEFAULT_CURRENCY.to_string(),
            strategy: Strategy::default(),
        }
    }
}

impl Settings {
    /// Create settings with the given kerf width and no materials.
    pub fn new(kerf_width: f64) -> Self {
        Self {
            kerf_width,
            ..Default::default()
        }
    }

    /// Add a material, builder style.
    pub fn with_material(
        mut self,
        material_type: impl Into<String>,
        unit_length: f64,
        price_per_unit: f64,
    ) -> Self {
        self.materials.insert(
            material_type.into(),
            MaterialSpec::new(unit_length, price_per_unit),
        );
        self
    }

    /// Set the placement strategy, builder style.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Look up a material by name.
    pub fn material(&self, material_type: &str) -> Option<&MaterialSpec> {
        self.materials.get(material_type)
    }

    /// Format an amount with this run's currency label.
    pub fn format_currency(&self, amount: f64) -> String {
        format!("{:.2}{}", amount, self.currency_label)
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if a float is approximately zero.
    #[inline]
    pub fn approx_zero(a: f64) -> bool {
        a.abs() < EPS
    }
}
