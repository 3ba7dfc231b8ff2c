use crate::{error::Result, solver::puzzle::Puzzle};

/// A human-readable summary of a constraint, used in logs and in the stats
/// table.
#[derive(Debug, Clone)]
pub struct ConstraintDescriptor {
    pub name: String,
    pub description: String,
}

/// A rule that prunes variable domains.
///
/// Constraints hold only variable names and constants — never references
/// into a particular [`Puzzle`] — so a single constraint instance is safely
/// shared across every clone the search takes.
pub trait Constraint: std::fmt::Debug + Send + Sync {
    fn descriptor(&self) -> ConstraintDescriptor;

    /// Prunes domains in `puzzle` as far as this constraint allows.
    ///
    /// Returns `Ok(true)` iff at least one domain was narrowed. Fails with a
    /// contradiction kind if propagation would empty a domain or proves that
    /// no clue combination remains feasible.
    fn propagate(&self, puzzle: &mut Puzzle) -> Result<bool>;
}
