use tracing::{debug, trace};

use crate::{
    error::{Error, Result},
    solver::{
        engine::SearchStats,
        heuristics::variable::{MinimumRemainingValuesHeuristic, VariableSelectionHeuristic},
        puzzle::Puzzle,
    },
};

/// Runs every constraint over `puzzle` in insertion order, repeating full
/// passes until one changes nothing. Contradictions surface as errors; the
/// caller decides whether they are recoverable.
fn propagate_to_fixpoint(puzzle: &mut Puzzle, stats: &mut SearchStats) -> Result<()> {
    let constraints = puzzle.constraints().to_vec();
    loop {
        let mut changed = false;
        for (id, constraint) in constraints.iter().enumerate() {
            let constraint_stats = stats.constraint_stats.entry(id).or_default();
            constraint_stats.revisions += 1;

            let started = std::time::Instant::now();
            let outcome = constraint.propagate(puzzle);
            constraint_stats.time_spent_micros += started.elapsed().as_micros() as u64;

            if outcome? {
                constraint_stats.prunings += 1;
                changed = true;
                trace!(
                    constraint = %constraint.descriptor().description,
                    "constraint narrowed a domain"
                );
            }
        }
        if !changed {
            break;
        }
    }
    debug!("propagation reached a fixpoint");
    Ok(())
}

/// A search algorithm the [`crate::SolverEngine`] delegates to.
pub trait SearchStrategy {
    /// Explores the puzzle and returns a fully assigned clone, or `None` if
    /// the clue set is unsatisfiable.
    fn solve(&self, puzzle: Puzzle) -> Result<(Option<Puzzle>, SearchStats)>;

    /// The shared propagation loop; provided so strategies agree on fixpoint
    /// semantics.
    fn propagate(&self, puzzle: &mut Puzzle, stats: &mut SearchStats) -> Result<()> {
        propagate_to_fixpoint(puzzle, stats)
    }
}

/// Chronological backtracking: propagate, pick a variable, try each of its
/// rows on a fresh clone, recurse.
pub struct BacktrackingSearch {
    variable_heuristic: Box<dyn VariableSelectionHeuristic>,
}

impl BacktrackingSearch {
    pub fn new(variable_heuristic: Box<dyn VariableSelectionHeuristic>) -> Self {
        Self { variable_heuristic }
    }

    fn search(&self, mut puzzle: Puzzle, stats: &mut SearchStats) -> Result<Option<Puzzle>> {
        stats.nodes_visited += 1;

        match propagate_to_fixpoint(&mut puzzle, stats) {
            Ok(()) => {}
            Err(err) if err.is_contradiction() => {
                trace!(%err, "frame failed during propagation");
                return Ok(None);
            }
            Err(err) => return Err(err),
        }

        if puzzle.is_complete() {
            return Ok(Some(puzzle));
        }

        let Some(name) = self.variable_heuristic.select_variable(&puzzle) else {
            return Err(Error::Internal(
                "puzzle incomplete but no variable left to branch on",
            ));
        };

        let rows: Vec<usize> = puzzle.variable(&name)?.domain().iter().collect();
        debug!(variable = %name, candidates = rows.len(), "branching");
        for row in rows {
            let mut child = puzzle.clone();
            child.variable_mut(&name)?.assign(row)?;
            if let Some(found) = self.search(child, stats)? {
                return Ok(Some(found));
            }
            stats.backtracks += 1;
        }

        Ok(None)
    }
}

impl Default for BacktrackingSearch {
    fn default() -> Self {
        Self::new(Box::new(MinimumRemainingValuesHeuristic))
    }
}

impl SearchStrategy for BacktrackingSearch {
    fn solve(&self, puzzle: Puzzle) -> Result<(Option<Puzzle>, SearchStats)> {
        let mut stats = SearchStats::default();
        let found = self.search(puzzle, &mut stats)?;
        Ok((found, stats))
    }
}

/// Runs the initial propagation and stops: no branching, no completion
/// requirement. Useful for inspecting what the clues alone deduce.
#[derive(Debug, Clone, Default)]
pub struct PropagationOnlySearch;

impl SearchStrategy for PropagationOnlySearch {
    fn solve(&self, mut puzzle: Puzzle) -> Result<(Option<Puzzle>, SearchStats)> {
        let mut stats = SearchStats::default();
        match self.propagate(&mut puzzle, &mut stats) {
            Ok(()) => Ok((Some(puzzle), stats)),
            Err(err) if err.is_contradiction() => Ok((None, stats)),
            Err(err) => Err(err),
        }
    }
}

/// Counts complete assignments, stopping once `cap` have been seen.
///
/// The solver itself returns the first solution it finds and says nothing
/// about uniqueness; running the counter with a cap of 2 answers the
/// uniqueness question without enumerating the whole space.
pub struct SolutionCounter {
    variable_heuristic: Box<dyn VariableSelectionHeuristic>,
    cap: usize,
}

impl SolutionCounter {
    pub fn new(cap: usize) -> Self {
        Self {
            variable_heuristic: Box::new(MinimumRemainingValuesHeuristic),
            cap,
        }
    }

    /// The number of complete assignments found, at most `cap`. The caller's
    /// puzzle is left untouched.
    pub fn count(&self, puzzle: &Puzzle) -> Result<usize> {
        if self.cap == 0 {
            return Ok(0);
        }
        let mut stats = SearchStats::default();
        self.count_from(puzzle.clone(), self.cap, &mut stats)
    }

    fn count_from(
        &self,
        mut puzzle: Puzzle,
        remaining: usize,
        stats: &mut SearchStats,
    ) -> Result<usize> {
        match propagate_to_fixpoint(&mut puzzle, stats) {
            Ok(()) => {}
            Err(err) if err.is_contradiction() => return Ok(0),
            Err(err) => return Err(err),
        }

        if puzzle.is_complete() {
            return Ok(1);
        }

        let Some(name) = self.variable_heuristic.select_variable(&puzzle) else {
            return Err(Error::Internal(
                "puzzle incomplete but no variable left to branch on",
            ));
        };

        let rows: Vec<usize> = puzzle.variable(&name)?.domain().iter().collect();
        let mut total = 0;
        for row in rows {
            let mut child = puzzle.clone();
            child.variable_mut(&name)?.assign(row)?;
            total += self.count_from(child, remaining - total, stats)?;
            if total >= remaining {
                break;
            }
        }
        Ok(total)
    }
}
