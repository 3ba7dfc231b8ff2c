use crate::{
    error::{Error, Result},
    solver::{
        constraint::{Constraint, ConstraintDescriptor},
        constraints::equality::Equality,
        puzzle::Puzzle,
    },
};

/// An exclusive choice between packs of equalities.
///
/// Each alternative is a list of variable-name pairs meaning "all of these
/// equalities hold at once". An alternative counts as feasible while every
/// one of its pairs still has a non-empty domain intersection; the pairs are
/// not checked for joint satisfiability, so an alternative can in principle
/// stay live a little longer than a clone-and-test propagator would allow.
/// Once a single alternative remains, its pairs are enforced through the
/// [`Equality`] propagator.
#[derive(Debug, Clone)]
pub struct EitherOr {
    alternatives: Vec<Vec<(String, String)>>,
}

impl EitherOr {
    /// Builds the constraint. At least one alternative is required and every
    /// alternative must carry at least one pair.
    pub fn new(alternatives: Vec<Vec<(String, String)>>) -> Result<Self> {
        if alternatives.is_empty() {
            return Err(Error::InvalidArgument(
                "either-or needs at least one alternative".to_string(),
            ));
        }
        if alternatives.iter().any(Vec::is_empty) {
            return Err(Error::InvalidArgument(
                "either-or alternatives must not be empty".to_string(),
            ));
        }
        Ok(Self { alternatives })
    }

    fn is_feasible(&self, puzzle: &Puzzle, alternative: &[(String, String)]) -> Result<bool> {
        for (x, y) in alternative {
            let shared = puzzle
                .variable(x)?
                .domain()
                .intersect(puzzle.variable(y)?.domain());
            if shared.is_empty() {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl Constraint for EitherOr {
    fn descriptor(&self) -> ConstraintDescriptor {
        let alts = self
            .alternatives
            .iter()
            .map(|alt| {
                alt.iter()
                    .map(|(x, y)| format!("{x} == {y}"))
                    .collect::<Vec<_>>()
                    .join(" & ")
            })
            .collect::<Vec<_>>()
            .join(" | ");
        ConstraintDescriptor {
            name: "EitherOr".to_string(),
            description: alts,
        }
    }

    fn propagate(&self, puzzle: &mut Puzzle) -> Result<bool> {
        let mut feasible = Vec::new();
        for (idx, alternative) in self.alternatives.iter().enumerate() {
            if self.is_feasible(puzzle, alternative)? {
                feasible.push(idx);
            }
        }

        match feasible.as_slice() {
            [] => Err(Error::Contradiction(
                "no either-or alternative remains feasible".to_string(),
            )),
            [only] => {
                let mut changed = false;
                for (x, y) in &self.alternatives[*only] {
                    changed |= Equality::new(x.clone(), y.clone()).propagate(puzzle)?;
                }
                Ok(changed)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::EitherOr;
    use crate::{
        error::Error,
        solver::{constraint::Constraint, puzzle::Puzzle},
    };

    fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter()
            .map(|(x, y)| (x.to_string(), y.to_string()))
            .collect()
    }

    fn puzzle() -> Puzzle {
        let mut p = Puzzle::new(3).unwrap();
        p.add_category("A").unwrap();
        p.add_category("C").unwrap();
        p
    }

    #[test]
    fn empty_alternative_lists_are_rejected() {
        assert!(matches!(
            EitherOr::new(vec![]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            EitherOr::new(vec![vec![]]),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn several_live_alternatives_change_nothing() {
        let mut p = puzzle();
        let c = EitherOr::new(vec![pairs(&[("A1", "C1")]), pairs(&[("A1", "C2")])]).unwrap();
        assert!(!c.propagate(&mut p).unwrap());
    }

    #[test]
    fn the_last_alternative_standing_is_enforced() {
        let mut p = puzzle();
        p.variable_mut("A1").unwrap().assign(0).unwrap();
        p.variable_mut("C1").unwrap().assign(1).unwrap();
        let c = EitherOr::new(vec![pairs(&[("A1", "C1")]), pairs(&[("A1", "C2")])]).unwrap();
        assert!(c.propagate(&mut p).unwrap());
        assert_eq!(p.variable("C2").unwrap().assigned_value().unwrap(), 0);
    }

    #[test]
    fn all_alternatives_dead_contradicts() {
        let mut p = puzzle();
        p.variable_mut("A1").unwrap().assign(0).unwrap();
        p.variable_mut("C1").unwrap().assign(1).unwrap();
        p.variable_mut("C2").unwrap().assign(2).unwrap();
        let c = EitherOr::new(vec![pairs(&[("A1", "C1")]), pairs(&[("A1", "C2")])]).unwrap();
        let err = c.propagate(&mut p).unwrap_err();
        assert!(err.is_contradiction());
    }

    #[test]
    fn multi_pair_packs_enforce_every_equality() {
        let mut p = puzzle();
        p.variable_mut("A1").unwrap().assign(0).unwrap();
        p.variable_mut("C1").unwrap().assign(1).unwrap();
        let c = EitherOr::new(vec![
            pairs(&[("A1", "C1"), ("A2", "C2")]),
            pairs(&[("A1", "C2"), ("A3", "C3")]),
        ])
        .unwrap();
        assert!(c.propagate(&mut p).unwrap());
        assert_eq!(p.variable("C2").unwrap().assigned_value().unwrap(), 0);
        assert_eq!(
            p.variable("A3").unwrap().domain(),
            p.variable("C3").unwrap().domain()
        );
    }
}
