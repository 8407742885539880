use std::collections::HashMap;

use rayon::prelude::*;

use super::Board;
use crate::pos::Pos2;

/// Live-neighbor count for every position adjacent to at least one live cell
///
/// Positions with no live neighbors never appear, which keeps the map
/// proportional to the board rather than to the plane.
pub(super) type NeighborCounts = HashMap<Pos2, u8>;

fn accumulate(counts: &mut NeighborCounts, cell: Pos2) {
    for neighbor in cell.neighbors() {
        *counts.entry(neighbor).or_insert(0) += 1;
    }
}

/// Merges two partial counts, folding the smaller map into the larger one
fn merge(a: NeighborCounts, b: NeighborCounts) -> NeighborCounts {
    let (mut large, small) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    for (pos, n) in small {
        *large.entry(pos).or_insert(0) += n;
    }
    large
}

pub(super) fn neighbor_counts(alive: &Board) -> NeighborCounts {
    let mut counts = NeighborCounts::with_capacity(alive.len() * 8);
    for &cell in alive {
        accumulate(&mut counts, cell);
    }
    counts
}

/// Same as [`neighbor_counts`], split across the current rayon pool
///
/// Each worker accumulates into its own map and the partial maps are merged
/// pairwise; a position's total is at most 8 regardless of how the board was
/// split.
pub(super) fn par_neighbor_counts(alive: &Board) -> NeighborCounts {
    alive
        .par_iter()
        .fold(NeighborCounts::new, |mut counts, &cell| {
            accumulate(&mut counts, cell);
            counts
        })
        .reduce(NeighborCounts::new, merge)
}
