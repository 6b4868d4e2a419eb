//! Data model types for cutting plans.

mod arrangement;
mod piece;
mod result;
mod unit;

pub use arrangement::MaterialArrangement;
pub use piece::Piece;
pub use result::{CalculationResult, Suggestion, WasteStatistics};
pub use unit::{PieceCount, Placement, StockUnit};
