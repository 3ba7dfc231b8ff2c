use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{error::Result, solver::puzzle::Puzzle};

/// The row-indexed view of a solved puzzle.
///
/// Row `r` maps each category tag to the name of the variable assigned to
/// `r`. Tags come back sorted lexicographically (a `BTreeMap` per row), so
/// output is stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolvedGrid {
    rows: Vec<BTreeMap<String, String>>,
}

impl SolvedGrid {
    /// Projects a fully assigned puzzle onto its rows.
    ///
    /// The category tag is recovered from each variable name by stripping
    /// the trailing decimal digits. Fails with
    /// [`crate::Error::NotAssigned`] if any variable still has an open
    /// domain.
    pub fn from_puzzle(puzzle: &Puzzle) -> Result<Self> {
        let mut rows = vec![BTreeMap::new(); puzzle.size()];
        for name in puzzle.variable_names() {
            let variable = puzzle.variable(name)?;
            let row = variable.assigned_value()?;
            let tag = name.trim_end_matches(|c: char| c.is_ascii_digit());
            let _ = rows[row].insert(tag.to_string(), name.to_string());
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[BTreeMap<String, String>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&BTreeMap<String, String>> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl std::fmt::Display for SolvedGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, row) in self.rows.iter().enumerate() {
            let cells = row
                .values()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "row {index}: {cells}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SolvedGrid;
    use crate::{error::Error, solver::puzzle::Puzzle};

    #[test]
    fn projects_rows_with_sorted_tags() {
        let mut p = Puzzle::new(2).unwrap();
        p.add_category("Pet").unwrap();
        p.add_category("Drink").unwrap();
        p.variable_mut("Pet1").unwrap().assign(0).unwrap();
        p.variable_mut("Pet2").unwrap().assign(1).unwrap();
        p.variable_mut("Drink1").unwrap().assign(1).unwrap();
        p.variable_mut("Drink2").unwrap().assign(0).unwrap();

        let grid = SolvedGrid::from_puzzle(&p).unwrap();
        assert_eq!(grid.len(), 2);
        assert_eq!(
            grid.row(0).unwrap().keys().collect::<Vec<_>>(),
            vec!["Drink", "Pet"]
        );
        assert_eq!(grid.row(0).unwrap()["Pet"], "Pet1");
        assert_eq!(grid.row(0).unwrap()["Drink"], "Drink2");
        assert_eq!(grid.row(1).unwrap()["Pet"], "Pet2");
        assert_eq!(grid.row(1).unwrap()["Drink"], "Drink1");
    }

    #[test]
    fn incomplete_puzzles_cannot_be_projected() {
        let mut p = Puzzle::new(2).unwrap();
        p.add_category("A").unwrap();
        let err = SolvedGrid::from_puzzle(&p).unwrap_err();
        assert!(matches!(err, Error::NotAssigned(_)));
    }

    #[test]
    fn multi_digit_ranks_strip_cleanly() {
        let mut p = Puzzle::new(10).unwrap();
        p.add_category("A").unwrap();
        for rank in 1..=10usize {
            p.variable_mut(&format!("A{rank}"))
                .unwrap()
                .assign(rank - 1)
                .unwrap();
        }
        let grid = SolvedGrid::from_puzzle(&p).unwrap();
        assert_eq!(grid.row(9).unwrap()["A"], "A10");
    }
}
