mod count;
mod rule;

use crate::Pos2;
use rayon::prelude::*;
use std::collections::HashSet;

/// The set of live cells in a single generation
pub type Board = HashSet<Pos2>;

fn apply_rule(alive: &Board, counts: count::NeighborCounts) -> Board {
    counts
        .into_iter()
        .filter(|&(pos, n)| rule::next_state(alive.contains(&pos), n))
        .map(|(pos, _)| pos)
        .collect()
}

fn par_apply_rule(alive: &Board, counts: count::NeighborCounts) -> Board {
    counts
        .into_par_iter()
        .filter(|&(pos, n)| rule::next_state(alive.contains(&pos), n))
        .map(|(pos, _)| pos)
        .collect()
}

/// Computes the generation following `alive`
///
/// Only positions adjacent to a live cell are considered; neighbors that
/// would fall outside the `i64` plane are never counted, so the plane is
/// truncated at its edges rather than wrapped.
pub fn step(alive: &Board) -> Board {
    apply_rule(alive, count::neighbor_counts(alive))
}

/// Parallel version of [`step`], run on the current rayon pool
///
/// Always produces the same board as [`step`].
pub fn step_parallel(alive: &Board) -> Board {
    par_apply_rule(alive, count::par_neighbor_counts(alive))
}

/// Applies [`step`] `generations` times
pub fn run(mut alive: Board, generations: usize) -> Board {
    for _ in 0..generations {
        alive = step(&alive);
    }
    alive
}

/// Applies [`step_parallel`] `generations` times
pub fn run_parallel(mut alive: Board, generations: usize) -> Board {
    for _ in 0..generations {
        alive = step_parallel(&alive);
    }
    alive
}

#[derive(Debug, Default)]
pub struct GameOfLife {
    alive: Board,
    generation: usize,
    candidates: usize,
}

impl GameOfLife {
    #[inline]
    pub fn from_alive<I: IntoIterator<Item = Pos2>>(alive: I) -> Self {
        Self {
            alive: alive.into_iter().collect(),
            generation: 0,
            candidates: 0,
        }
    }

    pub fn next_generation(&mut self) {
        let counts = count::neighbor_counts(&self.alive);
        self.candidates = counts.len();
        self.alive = apply_rule(&self.alive, counts);
        self.generation += 1;
        log::trace!(
            "generation {}: {} alive of {} candidates",
            self.generation,
            self.alive.len(),
            self.candidates
        );
    }

    pub fn next_generation_parallel(&mut self) {
        let counts = count::par_neighbor_counts(&self.alive);
        self.candidates = counts.len();
        self.alive = par_apply_rule(&self.alive, counts);
        self.generation += 1;
        log::trace!(
            "generation {} (parallel): {} alive of {} candidates",
            self.generation,
            self.alive.len(),
            self.candidates
        );
    }

    #[inline]
    pub fn alive(&self) -> &Board {
        &self.alive
    }

    #[inline]
    pub fn alive_count(&self) -> usize {
        self.alive.len()
    }

    /// Number of positions with at least one live neighbor in the last
    /// computed generation, i.e. how many cells the rule was applied to
    #[inline]
    pub fn candidates(&self) -> usize {
        self.candidates
    }

    /// Number of generations computed since construction
    #[inline]
    pub fn generation(&self) -> usize {
        self.generation
    }

    #[inline]
    pub fn take(self) -> Board {
        self.alive
    }
}
