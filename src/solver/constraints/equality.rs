use crate::{
    error::{Error, Result},
    solver::{
        constraint::{Constraint, ConstraintDescriptor},
        puzzle::Puzzle,
    },
};

/// "A and B name the same row."
#[derive(Debug, Clone)]
pub struct Equality {
    a: String,
    b: String,
}

impl Equality {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }
}

impl Constraint for Equality {
    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "Equality".to_string(),
            description: format!("{} == {}", self.a, self.b),
        }
    }

    fn propagate(&self, puzzle: &mut Puzzle) -> Result<bool> {
        let shared = puzzle
            .variable(&self.a)?
            .domain()
            .intersect(puzzle.variable(&self.b)?.domain());
        if shared.is_empty() {
            return Err(Error::Contradiction(format!(
                "`{}` and `{}` share no candidate row",
                self.a, self.b
            )));
        }

        let changed_a = puzzle.variable_mut(&self.a)?.intersect(&shared)?;
        let changed_b = puzzle.variable_mut(&self.b)?.intersect(&shared)?;
        Ok(changed_a || changed_b)
    }
}

#[cfg(test)]
mod tests {
    use super::Equality;
    use crate::solver::{constraint::Constraint, puzzle::Puzzle};

    fn puzzle() -> Puzzle {
        let mut p = Puzzle::new(3).unwrap();
        p.add_category("A").unwrap();
        p.add_category("B").unwrap();
        p
    }

    #[test]
    fn full_domains_do_not_change() {
        let mut p = puzzle();
        assert!(!Equality::new("A1", "B1").propagate(&mut p).unwrap());
    }

    #[test]
    fn narrows_both_sides_to_the_intersection() {
        let mut p = puzzle();
        p.variable_mut("A1").unwrap().remove(0).unwrap();
        p.variable_mut("B1").unwrap().remove(2).unwrap();
        assert!(Equality::new("A1", "B1").propagate(&mut p).unwrap());
        assert_eq!(
            p.variable("A1").unwrap().domain().iter().collect::<Vec<_>>(),
            vec![1]
        );
        assert_eq!(
            p.variable("B1").unwrap().domain().iter().collect::<Vec<_>>(),
            vec![1]
        );
    }

    #[test]
    fn disjoint_domains_contradict() {
        let mut p = puzzle();
        p.variable_mut("A1").unwrap().assign(0).unwrap();
        p.variable_mut("B1").unwrap().assign(2).unwrap();
        let err = Equality::new("A1", "B1").propagate(&mut p).unwrap_err();
        assert!(err.is_contradiction());
    }

    #[test]
    fn argument_order_does_not_matter() {
        let mut p1 = puzzle();
        p1.variable_mut("A1").unwrap().remove(2).unwrap();
        let mut p2 = p1.clone();

        Equality::new("A1", "B2").propagate(&mut p1).unwrap();
        Equality::new("B2", "A1").propagate(&mut p2).unwrap();
        assert_eq!(
            p1.variable("B2").unwrap().domain(),
            p2.variable("B2").unwrap().domain()
        );
        assert_eq!(
            p1.variable("A1").unwrap().domain(),
            p2.variable("A1").unwrap().domain()
        );
    }
}
