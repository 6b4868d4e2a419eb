//! Stock unit definition: one purchased length of material and the pieces cut from it.

use crate::config::EPS;
use serde::{Deserialize, Serialize};

/// One piece instance located inside a stock unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Piece length.
    pub length: f64,
    /// Offset from the start of the unit.
    pub start_position: f64,
}

impl Placement {
    /// Create a new placement.
    pub fn new(length: f64, start_position: f64) -> Self {
        Self {
            length,
            start_position,
        }
    }

    /// Offset where this piece ends.
    pub fn end_position(&self) -> f64 {
        self.start_position + self.length
    }
}

/// Number of pieces of one length inside a unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieceCount {
    pub length: f64,
    pub count: usize,
}

/// One purchased stock unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockUnit {
    /// Sequential number within the material type, starting at 1.
    pub unit_number: usize,
    /// Count of pieces per distinct length, in first-placed order.
    pub piece_counts: Vec<PieceCount>,
    /// Placements in the order they were made.
    pub placements: Vec<Placement>,
    /// Unused length after all placements and kerf losses.
    pub waste: f64,
}

impl StockUnit {
    /// Create an empty unit. Its waste is the whole unit length.
    pub fn new(unit_number: usize, unit_length: f64) -> Self {
        Self {
            unit_number,
            piece_counts: Vec::new(),
            placements: Vec::new(),
            waste: unit_length,
        }
    }

    /// Position at which the next piece would start.
    ///
    /// No kerf is charged before the first cut.
    pub fn next_position(&self, kerf_width: f64) -> f64 {
        match self.placements.last() {
            Some(last) => last.end_position() + kerf_width,
            None => 0.0,
        }
    }

    /// Append a piece if it fits; returns whether it was placed.
    pub fn try_place(&mut self, length: f64, unit_length: f64, kerf_width: f64) -> bool {
        let position = self.next_position(kerf_width);
        if position + length > unit_length {
            return false;
        }

        self.placements.push(Placement::new(length, position));
        match self.piece_counts.iter_mut().find(|pc| pc.length == length) {
            Some(pc) => pc.count += 1,
            None => self.piece_counts.push(PieceCount { length, count: 1 }),
        }
        self.waste = self.remaining_space(unit_length, kerf_width);
        true
    }

    /// Unit length minus the sum of piece lengths and one kerf per gap.
    fn remaining_space(&self, unit_length: f64, kerf_width: f64) -> f64 {
        let mut used: f64 = self.placements.iter().map(|p| p.length).sum();
        used += kerf_width * self.kerf_count() as f64;
        let remaining = unit_length - used;
        debug_assert!(remaining > -EPS, "unit {} overfilled by {}", self.unit_number, -remaining);
        // The fit check runs on accumulated positions
        if remaining < 0.0 {
            0.0
        } else {
            remaining
        }
    }

    /// End of the last placed piece.
    pub fn used_length(&self) -> f64 {
        self.placements
            .last()
            .map(Placement::end_position)
            .unwrap_or(0.0)
    }

    /// Number of pieces cut from this unit.
    pub fn piece_count(&self) -> usize {
        self.placements.len()
    }

    /// Number of saw cuts between pieces.
    pub fn kerf_count(&self) -> usize {
        self.placements.len().saturating_sub(1)
    }

    /// Whether nothing has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Count of pieces of the given length.
    pub fn count_of(&self, length: f64) -> usize {
        self.piece_counts
            .iter()
            .find(|pc| pc.length == length)
            .map(|pc| pc.count)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::float_cmp::approx_eq;

    #[test]
    fn test_first_piece_starts_at_zero() {
        let mut unit = StockUnit::new(1, 100.0);
        assert!(unit.is_empty());
        assert_eq!(unit.waste, 100.0);
        assert!(unit.try_place(40.0, 100.0, 0.3));
        assert_eq!(unit.placements[0], Placement::new(40.0, 0.0));
        assert!(approx_eq(unit.waste, 60.0));
    }

    #[test]
    fn test_kerf_between_pieces() {
        let mut unit = StockUnit::new(1, 100.0);
        assert!(unit.try_place(49.0, 100.0, 1.0));
        assert!(unit.try_place(49.0, 100.0, 1.0));
        assert_eq!(unit.placements[1].start_position, 50.0);
        assert_eq!(unit.waste, 1.0);
        assert_eq!(unit.kerf_count(), 1);
        assert_eq!(unit.count_of(49.0), 2);
        assert_eq!(unit.piece_counts.len(), 1);
    }

    #[test]
    fn test_rejects_piece_that_does_not_fit() {
        let mut unit = StockUnit::new(1, 100.0);
        assert!(unit.try_place(49.0, 100.0, 1.0));
        assert!(unit.try_place(49.0, 100.0, 1.0));
        assert!(!unit.try_place(49.0, 100.0, 1.0));
        assert_eq!(unit.piece_count(), 2);
        assert_eq!(unit.waste, 1.0);
    }

    #[test]
    fn test_exact_fill_leaves_zero_waste() {
        let mut unit = StockUnit::new(1, 100.0);
        assert!(unit.try_place(60.0, 100.0, 0.0));
        assert!(unit.try_place(40.0, 100.0, 0.0));
        assert_eq!(unit.waste, 0.0);
    }

    #[test]
    fn test_waste_matches_kerf_formula() {
        let mut unit = StockUnit::new(3, 240.0);
        for length in [80.0, 55.5, 40.2, 33.3] {
            assert!(unit.try_place(length, 240.0, 0.3));
        }
        let sum: f64 = unit.placements.iter().map(|p| p.length).sum();
        let expected = 240.0 - sum - 0.3 * unit.kerf_count() as f64;
        assert!(approx_eq(unit.waste, expected));
        assert!(unit.waste >= 0.0);
    }

    #[test]
    fn test_rounding_below_zero_clamps_to_zero() {
        // Accumulated positions end at 3.8, the summed lengths land just past it
        let mut unit = StockUnit::new(1, 3.8);
        for length in [0.2, 3.3, 0.1] {
            assert!(unit.try_place(length, 3.8, 0.1));
        }
        assert_eq!(unit.waste, 0.0);
    }
}
