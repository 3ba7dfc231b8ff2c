//! The clue vocabulary: one propagator per module.

pub mod all_different;
pub mod either_or;
pub mod equality;
pub mod inequality;
pub mod rank_exact_diff;
pub mod rank_greater;

use crate::{
    error::{Error, Result},
    solver::{domain::RowSet, puzzle::Puzzle},
};

/// One rank-possibility list per row: `table[row]` holds the ranks `k` for
/// which `<category><k>` still has `row` in its domain.
fn rank_table(puzzle: &Puzzle, category: &str) -> Result<Vec<Vec<usize>>> {
    (0..puzzle.size())
        .map(|row| puzzle.ranks_possible_for_row(category, row))
        .collect()
}

/// Shared pruning pass for the rank-relation constraints.
///
/// Keeps a row `i` in `dom(left)` iff some row `j` in `dom(right)` admits
/// ranks `a` and `b` in `category` with `relates(a, b)`; then prunes
/// `dom(right)` the same way against the already-narrowed `dom(left)`. Each
/// pass recomputes the rank table from the current domains, so neither side's
/// emptiness check can see stale data. Rows whose rank-possibility list is
/// empty never find a witness and are always pruned.
pub(crate) fn revise_rank_pair(
    puzzle: &mut Puzzle,
    left: &str,
    right: &str,
    category: &str,
    relates: impl Fn(usize, usize) -> bool + Copy,
) -> Result<bool> {
    let mut changed = false;

    let ranks = rank_table(puzzle, category)?;
    let right_rows: Vec<usize> = puzzle.variable(right)?.domain().iter().collect();
    let keep: Vec<usize> = puzzle
        .variable(left)?
        .domain()
        .iter()
        .filter(|&i| {
            right_rows.iter().any(|&j| {
                ranks[i]
                    .iter()
                    .any(|&a| ranks[j].iter().any(|&b| relates(a, b)))
            })
        })
        .collect();
    if keep.is_empty() {
        return Err(Error::Contradiction(format!(
            "no row for `{left}` satisfies its rank relation to `{right}` in `{category}`"
        )));
    }
    changed |= puzzle
        .variable_mut(left)?
        .intersect(&RowSet::from_sorted(keep))?;

    let ranks = rank_table(puzzle, category)?;
    let left_rows: Vec<usize> = puzzle.variable(left)?.domain().iter().collect();
    let keep: Vec<usize> = puzzle
        .variable(right)?
        .domain()
        .iter()
        .filter(|&j| {
            left_rows.iter().any(|&i| {
                ranks[i]
                    .iter()
                    .any(|&a| ranks[j].iter().any(|&b| relates(a, b)))
            })
        })
        .collect();
    if keep.is_empty() {
        return Err(Error::Contradiction(format!(
            "no row for `{right}` satisfies its rank relation to `{left}` in `{category}`"
        )));
    }
    changed |= puzzle
        .variable_mut(right)?
        .intersect(&RowSet::from_sorted(keep))?;

    Ok(changed)
}
