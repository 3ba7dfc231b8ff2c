use std::collections::BTreeMap;

use crate::{
    error::{Error, Result},
    solver::{
        constraint::{Constraint, ConstraintDescriptor},
        puzzle::Puzzle,
    },
};

/// Every listed variable takes a distinct row.
///
/// Registered implicitly for each category, where the listed variables must
/// form a permutation of the rows. Propagation is the simple assigned-value
/// sweep: each assigned row is removed from the other listed variables.
#[derive(Debug, Clone)]
pub struct AllDifferent {
    vars: Vec<String>,
}

impl AllDifferent {
    pub fn new(vars: Vec<String>) -> Self {
        Self { vars }
    }
}

impl Constraint for AllDifferent {
    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "AllDifferent".to_string(),
            description: format!("AllDifferent({})", self.vars.join(", ")),
        }
    }

    fn propagate(&self, puzzle: &mut Puzzle) -> Result<bool> {
        // Assigned row -> owning variable; BTreeMap keeps the removal sweep
        // in row order.
        let mut taken: BTreeMap<usize, String> = BTreeMap::new();
        for name in &self.vars {
            if let Some(row) = puzzle.variable(name)?.domain().singleton_value() {
                if let Some(other) = taken.insert(row, name.clone()) {
                    return Err(Error::Contradiction(format!(
                        "`{other}` and `{name}` are both assigned row {row}"
                    )));
                }
            }
        }

        let mut changed = false;
        for (row, owner) in &taken {
            for name in &self.vars {
                if name != owner {
                    changed |= puzzle.variable_mut(name)?.remove(*row)?;
                }
            }
        }
        Ok(changed)
    }
}
