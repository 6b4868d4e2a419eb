//! Alternative piece orderings and selection of the least wasteful arrangement.

use super::engine::{check_fits, longest_first, place_in_order};
use crate::config::{Strategy, EPS};
use crate::error::Result;
use crate::model::StockUnit;
use tracing::debug;

/// Order in which piece instances are fed to the placement loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceOrder {
    /// Longest first, equal lengths in request order.
    LongestFirst,
    /// Most frequent length first, longer first among equally frequent.
    GroupedByLength,
    /// Alternate the longest and shortest remaining pieces.
    PairedLongestShortest,
}

impl PieceOrder {
    /// Candidates tried by [`Strategy::BestOfOrderings`], in tie-break order.
    pub const ALL: [PieceOrder; 3] = [
        PieceOrder::LongestFirst,
        PieceOrder::GroupedByLength,
        PieceOrder::PairedLongestShortest,
    ];

    /// Reorder piece lengths.
    pub fn apply(&self, lengths: &[f64]) -> Vec<f64> {
        let sorted = longest_first(lengths);
        match self {
            PieceOrder::LongestFirst => sorted,
            PieceOrder::GroupedByLength => grouped_by_length(&sorted),
            PieceOrder::PairedLongestShortest => paired_longest_shortest(&sorted),
        }
    }
}

/// Expects lengths sorted descending.
fn grouped_by_length(sorted: &[f64]) -> Vec<f64> {
    let mut runs: Vec<(f64, usize)> = Vec::new();
    for &length in sorted {
        match runs.last_mut() {
            Some((last, count)) if *last == length => *count += 1,
            _ => runs.push((length, 1)),
        }
    }
    runs.sort_by(|a, b| b.1.cmp(&a.1));

    runs.into_iter()
        .flat_map(|(length, count)| std::iter::repeat(length).take(count))
        .collect()
}

/// Expects lengths sorted descending.
fn paired_longest_shortest(sorted: &[f64]) -> Vec<f64> {
    let mut result = Vec::with_capacity(sorted.len());
    let (mut lo, mut hi) = (0, sorted.len());
    while lo < hi {
        result.push(sorted[lo]);
        lo += 1;
        if lo < hi {
            hi -= 1;
            result.push(sorted[hi]);
        }
    }
    result
}

/// Ranking key: less total waste first, then the larger single offcut.
fn score(units: &[StockUnit]) -> (f64, f64) {
    let total: f64 = units.iter().map(|u| u.waste).sum();
    let largest = units.iter().map(|u| u.waste).fold(0.0, f64::max);
    (total, largest)
}

fn is_better(candidate: (f64, f64), best: (f64, f64)) -> bool {
    if candidate.0 < best.0 - EPS {
        return true;
    }
    (candidate.0 - best.0).abs() < EPS && candidate.1 > best.1 + EPS
}

/// Place pieces of one material type using the given strategy.
pub fn arrange_with_strategy(
    lengths: &[f64],
    unit_length: f64,
    kerf_width: f64,
    strategy: Strategy,
) -> Result<Vec<StockUnit>> {
    check_fits(lengths, unit_length)?;

    let orders: &[PieceOrder] = match strategy {
        Strategy::LongestFirst => &[PieceOrder::LongestFirst],
        Strategy::BestOfOrderings => &PieceOrder::ALL,
    };

    let mut best: Option<(PieceOrder, Vec<StockUnit>)> = None;
    for &order in orders {
        let units = place_in_order(&order.apply(lengths), unit_length, kerf_width);
        debug!(
            "Ordering {:?}: {} units, waste {:.1}",
            order,
            units.len(),
            score(&units).0
        );
        let replace = match &best {
            Some((_, current)) => is_better(score(&units), score(current)),
            None => true,
        };
        if replace {
            best = Some((order, units));
        }
    }

    Ok(match best {
        Some((order, units)) => {
            debug!("Selected ordering {:?}", order);
            units
        }
        None => Vec::new(),
    })
}
