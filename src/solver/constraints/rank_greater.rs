use crate::{
    error::Result,
    solver::{
        constraint::{Constraint, ConstraintDescriptor},
        constraints::revise_rank_pair,
        puzzle::Puzzle,
    },
};

/// "The row of `left` carries a higher rank in `category` than the row of
/// `right`."
#[derive(Debug, Clone)]
pub struct RankGreater {
    left: String,
    right: String,
    category: String,
}

impl RankGreater {
    pub fn new(
        left: impl Into<String>,
        right: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            category: category.into(),
        }
    }
}

impl Constraint for RankGreater {
    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "RankGreater".to_string(),
            description: format!(
                "rank[{}]({}) > rank[{}]({})",
                self.category, self.left, self.category, self.right
            ),
        }
    }

    fn propagate(&self, puzzle: &mut Puzzle) -> Result<bool> {
        revise_rank_pair(puzzle, &self.left, &self.right, &self.category, |a, b| {
            a > b
        })
    }
}

#[cfg(test)]
mod tests {
    use super::RankGreater;
    use crate::solver::{constraint::Constraint, puzzle::Puzzle};

    fn puzzle() -> Puzzle {
        let mut p = Puzzle::new(3).unwrap();
        p.add_category("A").unwrap();
        p.add_category("B").unwrap();
        p
    }

    #[test]
    fn full_domains_admit_every_row() {
        // Any pair of distinct ranks can still land anywhere.
        let mut p = puzzle();
        assert!(!RankGreater::new("A1", "A2", "B").propagate(&mut p).unwrap());
    }

    #[test]
    fn pinned_ranks_prune_both_sides() {
        let mut p = puzzle();
        // Fix category B to the identity: Bk sits at row k-1.
        for (rank, row) in [(1usize, 0usize), (2, 1), (3, 2)] {
            p.variable_mut(&format!("B{rank}")).unwrap().assign(row).unwrap();
        }
        assert!(RankGreater::new("A1", "A2", "B").propagate(&mut p).unwrap());
        // A1's row must out-rank A2's row, so A1 cannot sit at B-rank 1
        // (row 0) and A2 cannot sit at B-rank 3 (row 2).
        assert_eq!(
            p.variable("A1").unwrap().domain().iter().collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!(
            p.variable("A2").unwrap().domain().iter().collect::<Vec<_>>(),
            vec![0, 1]
        );
    }

    #[test]
    fn impossible_relation_contradicts() {
        let mut p = puzzle();
        for (rank, row) in [(1usize, 0usize), (2, 1), (3, 2)] {
            p.variable_mut(&format!("B{rank}")).unwrap().assign(row).unwrap();
        }
        // left pinned to the lowest rank: nothing can be below it
        p.variable_mut("A1").unwrap().assign(0).unwrap();
        let err = RankGreater::new("A1", "A2", "B")
            .propagate(&mut p)
            .unwrap_err();
        assert!(err.is_contradiction());
    }

    #[test]
    fn rows_with_no_possible_rank_are_pruned() {
        let mut p = puzzle();
        // Row 2 can no longer carry any B value.
        for rank in 1..=3usize {
            p.variable_mut(&format!("B{rank}")).unwrap().remove(2).unwrap();
        }
        assert!(RankGreater::new("A1", "A2", "B").propagate(&mut p).unwrap());
        assert!(!p.variable("A1").unwrap().domain().contains(2));
        assert!(!p.variable("A2").unwrap().domain().contains(2));
    }
}
