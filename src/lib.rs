//! Logicgrid is a constraint-propagation solver for logic grid puzzles.
//!
//! A puzzle has `N` rows and any number of categories, each contributing `N`
//! variables named `<tag>1..<tag>N` whose domains are row indices. Clues are
//! expressed with a small constraint vocabulary — equality, inequality,
//! all-different, either-or, and two rank relations — and the solver
//! alternates fixed-point propagation with MRV-guided backtracking until a
//! complete assignment falls out.
//!
//! # Core Concepts
//!
//! - **[`Puzzle`]**: the container of variables grouped by category plus the
//!   clue constraints. Declaring a category creates its variables and the
//!   implicit all-different over them.
//! - **[`Constraint`]**: a rule with a single capability: prune domains and
//!   report whether anything changed. The six clue propagators live in
//!   [`constraints`].
//! - **[`SolverEngine`]**: clones the caller's puzzle and hands it to a
//!   [`SearchStrategy`]; the default is MRV backtracking.
//! - **[`SolvedGrid`]**: the row-indexed projection of a solution, mapping
//!   each row to `category tag -> variable name`.
//!
//! # Example: A Forced 2x2 Puzzle
//!
//! Two categories of two values, and one clue: `A1` and `B1` share a row.
//!
//! ```
//! use logicgrid::{constraints::equality::Equality, solve, Puzzle};
//!
//! let mut puzzle = Puzzle::new(2)?;
//! puzzle.add_category("A")?;
//! puzzle.add_category("B")?;
//! puzzle.add_constraint(Equality::new("A1", "B1"));
//!
//! let grid = solve(&puzzle)?.expect("this puzzle has a solution");
//! assert_eq!(grid.row(0).unwrap()["A"], "A1");
//! assert_eq!(grid.row(0).unwrap()["B"], "B1");
//! assert_eq!(grid.row(1).unwrap()["A"], "A2");
//! assert_eq!(grid.row(1).unwrap()["B"], "B2");
//! # Ok::<(), logicgrid::Error>(())
//! ```

pub mod error;
pub mod solver;

pub use error::{Error, Result};
pub use solver::{
    constraint::{Constraint, ConstraintDescriptor},
    constraints,
    domain::RowSet,
    engine::{ConstraintId, PerConstraintStats, SearchStats, SolverEngine},
    heuristics,
    projection::SolvedGrid,
    puzzle::Puzzle,
    stats::render_stats_table,
    strategy::{BacktrackingSearch, PropagationOnlySearch, SearchStrategy, SolutionCounter},
    variable::Variable,
};

/// Solves `puzzle` with the default engine and projects the result to rows.
///
/// Returns `Ok(None)` when the clue set is unsatisfiable. The caller's
/// puzzle is never mutated.
pub fn solve(puzzle: &Puzzle) -> Result<Option<SolvedGrid>> {
    let (solved, _stats) = SolverEngine::default().solve(puzzle)?;
    solved.as_ref().map(SolvedGrid::from_puzzle).transpose()
}
