use crate::{
    error::Result,
    solver::{
        constraint::{Constraint, ConstraintDescriptor},
        puzzle::Puzzle,
    },
};

/// "A and B name different rows."
///
/// Standard arc-consistency for `!=`: nothing can be pruned until one side
/// collapses to a singleton, at which point its row is removed from the other
/// side.
#[derive(Debug, Clone)]
pub struct Inequality {
    a: String,
    b: String,
}

impl Inequality {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }
}

impl Constraint for Inequality {
    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "Inequality".to_string(),
            description: format!("{} != {}", self.a, self.b),
        }
    }

    fn propagate(&self, puzzle: &mut Puzzle) -> Result<bool> {
        let mut changed = false;
        for (this, other) in [(&self.a, &self.b), (&self.b, &self.a)] {
            if let Some(row) = puzzle.variable(this)?.domain().singleton_value() {
                changed |= puzzle.variable_mut(other)?.remove(row)?;
            }
        }
        Ok(changed)
    }
}
