//! Heuristics for choosing which variable the search branches on next.

use crate::solver::puzzle::Puzzle;

/// A strategy for picking the next unassigned variable.
pub trait VariableSelectionHeuristic {
    /// Picks an unassigned variable to branch on, or `None` if every domain
    /// is already a singleton.
    fn select_variable(&self, puzzle: &Puzzle) -> Option<String>;
}

/// Picks the first unassigned variable in declaration order.
#[derive(Debug, Clone, Default)]
pub struct SelectFirstHeuristic;

impl VariableSelectionHeuristic for SelectFirstHeuristic {
    fn select_variable(&self, puzzle: &Puzzle) -> Option<String> {
        puzzle
            .variable_names()
            .find(|name| {
                puzzle
                    .variable(name)
                    .map(|v| v.domain().len() > 1)
                    .unwrap_or(false)
            })
            .map(str::to_string)
    }
}

/// Minimum remaining values: picks the unassigned variable with the smallest
/// domain.
///
/// A fail-first strategy — the most constrained variable is the cheapest to
/// refute. Ties go to the earlier-declared variable so runs stay
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct MinimumRemainingValuesHeuristic;

impl VariableSelectionHeuristic for MinimumRemainingValuesHeuristic {
    fn select_variable(&self, puzzle: &Puzzle) -> Option<String> {
        puzzle
            .variable_names()
            .enumerate()
            .filter_map(|(idx, name)| {
                let len = puzzle.variable(name).ok()?.domain().len();
                (len > 1).then_some((len, idx, name))
            })
            // declaration index makes the minimum unique
            .min_by_key(|(len, idx, _)| (*len, *idx))
            .map(|(_, _, name)| name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{MinimumRemainingValuesHeuristic, SelectFirstHeuristic, VariableSelectionHeuristic};
    use crate::solver::puzzle::Puzzle;

    fn puzzle() -> Puzzle {
        let mut p = Puzzle::new(3).unwrap();
        p.add_category("A").unwrap();
        p.add_category("B").unwrap();
        p
    }

    #[test]
    fn select_first_walks_declaration_order() {
        let mut p = puzzle();
        p.variable_mut("A1").unwrap().assign(0).unwrap();
        assert_eq!(
            SelectFirstHeuristic.select_variable(&p).as_deref(),
            Some("A2")
        );
    }

    #[test]
    fn mrv_prefers_the_smallest_domain() {
        let mut p = puzzle();
        p.variable_mut("B2").unwrap().remove(0).unwrap();
        assert_eq!(
            MinimumRemainingValuesHeuristic.select_variable(&p).as_deref(),
            Some("B2")
        );
    }

    #[test]
    fn mrv_ties_break_by_declaration_order() {
        let mut p = puzzle();
        p.variable_mut("B1").unwrap().remove(0).unwrap();
        p.variable_mut("A2").unwrap().remove(0).unwrap();
        assert_eq!(
            MinimumRemainingValuesHeuristic.select_variable(&p).as_deref(),
            Some("A2")
        );
    }

    #[test]
    fn fully_assigned_puzzles_yield_nothing() {
        let mut p = Puzzle::new(2).unwrap();
        p.add_category("A").unwrap();
        p.variable_mut("A1").unwrap().assign(0).unwrap();
        p.variable_mut("A2").unwrap().assign(1).unwrap();
        assert_eq!(MinimumRemainingValuesHeuristic.select_variable(&p), None);
        assert_eq!(SelectFirstHeuristic.select_variable(&p), None);
    }
}
