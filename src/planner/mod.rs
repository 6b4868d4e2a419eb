//! Cutting plan computation: grouping, placement, cost and waste analysis.

mod cost;
mod engine;
mod grouping;
mod strategy;
mod waste;

pub use cost::{compute_costs, CostSummary};
pub use engine::{arrange_pieces, check_fits, longest_first};
pub use grouping::{group_pieces, MaterialGroup};
pub use strategy::{arrange_with_strategy, PieceOrder};
pub use waste::{calculate_waste_statistics, classify_waste};
