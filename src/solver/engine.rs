use std::collections::HashMap;

use crate::{
    error::Result,
    solver::{
        puzzle::Puzzle,
        strategy::{BacktrackingSearch, SearchStrategy},
    },
};

/// Index of a constraint in its puzzle's list.
pub type ConstraintId = usize;

/// Performance counters for a single constraint.
#[derive(Debug, Default, Clone, Copy)]
pub struct PerConstraintStats {
    /// How many times the propagator ran.
    pub revisions: u64,
    /// How many runs narrowed at least one domain.
    pub prunings: u64,
    /// Total time spent inside the propagator, in microseconds.
    pub time_spent_micros: u64,
}

/// Counters for a whole search.
#[derive(Debug, Default)]
pub struct SearchStats {
    /// Search-tree frames entered.
    pub nodes_visited: u64,
    /// Branch values that failed and were abandoned.
    pub backtracks: u64,
    /// Per-constraint counters, keyed by [`ConstraintId`].
    pub constraint_stats: HashMap<ConstraintId, PerConstraintStats>,
}

/// The entry point for solving a puzzle.
///
/// The engine owns a [`SearchStrategy`] and hands it a private clone of the
/// caller's puzzle, so solving never mutates the input.
pub struct SolverEngine {
    strategy: Box<dyn SearchStrategy>,
}

impl SolverEngine {
    pub fn new(strategy: Box<dyn SearchStrategy>) -> Self {
        Self { strategy }
    }

    /// Attempts to solve `puzzle`.
    ///
    /// Returns `Ok((Some(solved), stats))` with a fully assigned clone when a
    /// solution exists, `Ok((None, stats))` when the clue set is proven
    /// unsatisfiable, and `Err` only for caller or internal bugs — a plain
    /// contradiction is an unsolvable puzzle, not an error.
    pub fn solve(&self, puzzle: &Puzzle) -> Result<(Option<Puzzle>, SearchStats)> {
        self.strategy.solve(puzzle.clone())
    }
}

impl Default for SolverEngine {
    /// MRV-guided backtracking, the configuration every caller wants first.
    fn default() -> Self {
        Self::new(Box::new(BacktrackingSearch::default()))
    }
}
