use crate::{
    error::{Error, Result},
    solver::domain::RowSet,
};

/// A named unknown whose domain is a subset of the puzzle's row indices.
///
/// All mutation primitives detect contradictions at the moment they would
/// occur: any operation that would leave the domain empty fails with
/// [`Error::DomainWipeout`] and leaves the variable untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    name: String,
    domain: RowSet,
}

impl Variable {
    pub(crate) fn new(name: String, size: usize) -> Self {
        Self {
            name,
            domain: RowSet::full(size),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain(&self) -> &RowSet {
        &self.domain
    }

    /// True iff the domain holds exactly one row.
    pub fn is_assigned(&self) -> bool {
        self.domain.is_singleton()
    }

    /// The sole row of an assigned variable.
    pub fn assigned_value(&self) -> Result<usize> {
        self.domain
            .singleton_value()
            .ok_or_else(|| Error::NotAssigned(self.name.clone()))
    }

    /// Collapses the domain to `[row]`.
    pub fn assign(&mut self, row: usize) -> Result<()> {
        if !self.domain.contains(row) {
            return Err(Error::NotInDomain {
                variable: self.name.clone(),
                row,
            });
        }
        self.domain = RowSet::singleton(row);
        Ok(())
    }

    /// Removes `row` if present. Returns whether a change occurred.
    pub fn remove(&mut self, row: usize) -> Result<bool> {
        if self.domain.is_singleton() && self.domain.contains(row) {
            return Err(Error::DomainWipeout {
                variable: self.name.clone(),
            });
        }
        Ok(self.domain.remove(row))
    }

    /// Replaces the domain with its intersection against `rows`. Returns
    /// whether a change occurred.
    pub fn intersect(&mut self, rows: &RowSet) -> Result<bool> {
        let narrowed = self.domain.intersect(rows);
        if narrowed.is_empty() {
            return Err(Error::DomainWipeout {
                variable: self.name.clone(),
            });
        }
        let changed = narrowed.len() < self.domain.len();
        self.domain = narrowed;
        Ok(changed)
    }
}
