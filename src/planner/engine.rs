//! Greedy best-fit-reuse placement of pieces into stock units.

use crate::error::{PlanError, Result};
use crate::model::StockUnit;
use tracing::debug;

/// Place all pieces of one material type, longest first.
///
/// Each piece goes into the open unit with the most remaining space that can
/// still take it; a new unit is opened only when none can.
pub fn arrange_pieces(lengths: &[f64], unit_length: f64, kerf_width: f64) -> Result<Vec<StockUnit>> {
    check_fits(lengths, unit_length)?;
    Ok(place_in_order(
        &longest_first(lengths),
        unit_length,
        kerf_width,
    ))
}

/// Fail if any piece is not a positive finite length or cannot fit into an
/// empty unit.
pub fn check_fits(lengths: &[f64], unit_length: f64) -> Result<()> {
    if !unit_length.is_finite() || unit_length <= 0.0 {
        return Err(PlanError::InvalidInput {
            message: format!("Unit length must be a positive number, got {}", unit_length),
        });
    }
    if let Some(&length) = lengths.iter().find(|l| !l.is_finite() || **l <= 0.0) {
        return Err(PlanError::InvalidInput {
            message: format!("Piece length must be a positive number, got {}", length),
        });
    }
    match lengths.iter().find(|&&length| length > unit_length) {
        Some(&length) => Err(PlanError::PieceTooLong {
            length,
            unit_length,
        }),
        None => Ok(()),
    }
}

/// Sort lengths descending. Equal lengths keep their request order.
pub fn longest_first(lengths: &[f64]) -> Vec<f64> {
    let mut sorted = lengths.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));
    sorted
}

/// Run the placement loop over pieces in the given order.
///
/// Every length must already be known to fit in an empty unit.
pub(crate) fn place_in_order(ordered: &[f64], unit_length: f64, kerf_width: f64) -> Vec<StockUnit> {
    let mut units: Vec<StockUnit> = Vec::new();

    for &length in ordered {
        // Most free space first; ties keep creation order
        let mut candidates: Vec<usize> = (0..units.len()).collect();
        candidates.sort_by(|&a, &b| units[b].waste.total_cmp(&units[a].waste));

        let placed = candidates
            .into_iter()
            .any(|idx| units[idx].try_place(length, unit_length, kerf_width));

        if !placed {
            let mut unit = StockUnit::new(units.len() + 1, unit_length);
            let fits = unit.try_place(length, unit_length, kerf_width);
            debug_assert!(fits, "piece {} exceeds unit length {}", length, unit_length);
            debug!(
                "Opened unit {} for piece {} (unit length {})",
                unit.unit_number, length, unit_length
            );
            units.push(unit);
        }
    }

    units
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::float_cmp::approx_eq;

    fn total_waste(units: &[StockUnit]) -> f64 {
        units.iter().map(|u| u.waste).sum()
    }

    fn lengths(unit: &StockUnit) -> Vec<f64> {
        unit.placements.iter().map(|p| p.length).collect()
    }

    #[test]
    fn test_pieces_that_cannot_share_a_unit() {
        let units = arrange_pieces(&[60.0, 50.0], 100.0, 0.0).unwrap();
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].placements[0].length, 60.0);
        assert_eq!(units[1].placements[0].length, 50.0);
        assert_eq!(total_waste(&units), 90.0);
    }

    #[test]
    fn test_fills_first_unit_exactly() {
        let units = arrange_pieces(&[20.0, 40.0, 20.0, 40.0], 100.0, 0.0).unwrap();
        assert_eq!(units.len(), 2);
        assert_eq!(total_waste(&units), 80.0);
        assert_eq!(units[0].waste, 0.0);
        assert_eq!(units[0].count_of(40.0), 2);
        assert_eq!(units[0].count_of(20.0), 1);
        assert_eq!(units[1].waste, 80.0);
    }

    #[test]
    fn test_kerf_allows_two_but_not_three() {
        let units = arrange_pieces(&[49.0, 49.0], 100.0, 1.0).unwrap();
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].waste, 1.0);

        let units = arrange_pieces(&[49.0, 49.0, 49.0], 100.0, 1.0).unwrap();
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].piece_count(), 2);
        assert_eq!(units[1].piece_count(), 1);
    }

    #[test]
    fn test_prefers_unit_with_most_free_space() {
        // 70 and 60 each open a unit; 30 fits both and goes to the emptier one
        let units = arrange_pieces(&[70.0, 60.0, 30.0], 100.0, 0.0).unwrap();
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].piece_count(), 1);
        assert_eq!(units[1].placements, vec![
            crate::model::Placement::new(60.0, 0.0),
            crate::model::Placement::new(30.0, 60.0),
        ]);
    }

    #[test]
    fn test_spreads_pieces_across_units() {
        // 35 goes to the unit holding 60, after which the unit holding 70
        // has more space left and takes 25.
        let units = arrange_pieces(&[70.0, 60.0, 35.0, 25.0], 100.0, 0.0).unwrap();
        assert_eq!(units.len(), 2);
        assert_eq!(units[1].count_of(35.0), 1);
        assert_eq!(units[0].count_of(25.0), 1);
        assert!(approx_eq(units[0].waste, 5.0));
        assert!(approx_eq(units[1].waste, 5.0));
    }

    #[test]
    fn test_equal_waste_goes_to_earlier_unit() {
        // Units [67.7] and [37.9, 29.5] are both left with 32.3; unit 1 takes 24.7
        let units = arrange_pieces(&[67.7, 37.9, 24.7, 29.5], 100.0, 0.3).unwrap();
        assert_eq!(units.len(), 2);
        assert_eq!(lengths(&units[0]), vec![67.7, 24.7]);
        assert_eq!(lengths(&units[1]), vec![37.9, 29.5]);
    }

    #[test]
    fn test_identical_units_tie_in_creation_order() {
        let units = arrange_pieces(&[60.7, 60.7, 30.1, 30.1, 5.5], 100.0, 0.3).unwrap();
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].count_of(5.5), 1);
        assert_eq!(units[1].count_of(5.5), 0);
        assert_eq!(units[1].piece_count(), 2);
    }

    #[test]
    fn test_short_pieces_follow_summed_waste() {
        let pieces = [71.5, 90.0, 5.2, 81.2, 11.4, 34.8, 82.9, 76.5, 54.4, 87.8, 64.6, 5.4];
        let units = arrange_pieces(&pieces, 240.0, 0.3).unwrap();
        let layout: Vec<Vec<f64>> = units.iter().map(lengths).collect();
        assert_eq!(
            layout,
            vec![
                vec![90.0, 87.8, 34.8, 5.4, 5.2],
                vec![82.9, 81.2, 54.4],
                vec![76.5, 71.5, 64.6, 11.4],
            ]
        );
        assert!(approx_eq(units[0].waste, 15.6));
        assert!(approx_eq(units[2].waste, 15.1));
    }

    #[test]
    fn test_non_finite_length_rejected() {
        for bad in [f64::NAN, f64::INFINITY, -5.0, 0.0] {
            let result = arrange_pieces(&[50.0, bad], 100.0, 0.3);
            assert!(
                matches!(result, Err(PlanError::InvalidInput { .. })),
                "length {} gave {:?}",
                bad,
                result
            );
        }
        let result = arrange_pieces(&[50.0], f64::NAN, 0.3);
        assert!(matches!(result, Err(PlanError::InvalidInput { .. })));
    }

    #[test]
    fn test_piece_too_long() {
        match arrange_pieces(&[50.0, 101.0], 100.0, 0.0) {
            Err(PlanError::PieceTooLong {
                length,
                unit_length,
            }) => {
                assert_eq!(length, 101.0);
                assert_eq!(unit_length, 100.0);
            }
            other => panic!("Expected PieceTooLong, got {:?}", other),
        }
    }

    #[test]
    fn test_piece_exactly_unit_length() {
        let units = arrange_pieces(&[100.0, 100.0], 100.0, 0.3).unwrap();
        assert_eq!(units.len(), 2);
        assert!(units.iter().all(|u| u.waste == 0.0));
    }

    #[test]
    fn test_unit_numbers_are_sequential() {
        let lengths = vec![90.0; 5];
        let units = arrange_pieces(&lengths, 100.0, 0.3).unwrap();
        let numbers: Vec<usize> = units.iter().map(|u| u.unit_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_no_pieces_no_units() {
        assert!(arrange_pieces(&[], 100.0, 0.3).unwrap().is_empty());
    }

    #[test]
    fn test_longest_first_is_stable() {
        assert_eq!(
            longest_first(&[10.0, 30.0, 20.0, 30.0]),
            vec![30.0, 30.0, 20.0, 10.0]
        );
    }

    #[test]
    fn test_deterministic() {
        let lengths = [33.3, 12.7, 45.0, 33.3, 8.1, 60.2, 12.7, 19.9];
        let a = arrange_pieces(&lengths, 100.0, 0.3).unwrap();
        let b = arrange_pieces(&lengths, 100.0, 0.3).unwrap();
        assert_eq!(a, b);
    }
}
