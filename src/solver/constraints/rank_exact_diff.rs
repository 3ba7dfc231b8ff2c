use crate::{
    error::Result,
    solver::{
        constraint::{Constraint, ConstraintDescriptor},
        constraints::revise_rank_pair,
        puzzle::Puzzle,
    },
};

/// "In `category`, the rank at `left`'s row minus the rank at `right`'s row
/// equals `difference`."
///
/// A negative difference means `left` sits at the lower rank. The category's
/// values are assumed to be evenly spaced; a rank gap of one always means the
/// same amount.
#[derive(Debug, Clone)]
pub struct RankExactDiff {
    left: String,
    right: String,
    category: String,
    difference: i64,
}

impl RankExactDiff {
    pub fn new(
        left: impl Into<String>,
        right: impl Into<String>,
        category: impl Into<String>,
        difference: i64,
    ) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            category: category.into(),
            difference,
        }
    }
}

impl Constraint for RankExactDiff {
    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "RankExactDiff".to_string(),
            description: format!(
                "rank[{}]({}) - rank[{}]({}) == {}",
                self.category, self.left, self.category, self.right, self.difference
            ),
        }
    }

    fn propagate(&self, puzzle: &mut Puzzle) -> Result<bool> {
        let difference = self.difference;
        revise_rank_pair(puzzle, &self.left, &self.right, &self.category, |a, b| {
            a as i64 - b as i64 == difference
        })
    }
}
