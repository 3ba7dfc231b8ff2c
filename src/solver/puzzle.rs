use std::sync::Arc;

use crate::{
    error::{Error, Result},
    solver::{constraint::Constraint, variable::Variable},
};

/// A logic-grid puzzle: categories of variables plus the clue constraints
/// over them.
///
/// A puzzle with `size` rows gives every category exactly `size` variables
/// named `<tag>1..<tag><size>`, each starting with the full domain of row
/// indices. The variable and category maps are persistent (`im`) structures,
/// so the deep clone taken at every branching point of the search shares
/// almost all of its storage with the parent frame. Constraints are immutable
/// once built and are shared across clones by reference.
#[derive(Debug, Clone)]
pub struct Puzzle {
    size: usize,
    variables: im::HashMap<String, Variable>,
    /// Variable names in declaration order; drives MRV tie-breaking and
    /// projection.
    order: im::Vector<String>,
    /// Category tag to its variable names, in rank order.
    categories: im::HashMap<String, im::Vector<String>>,
    constraints: Vec<Arc<dyn Constraint>>,
}

impl Puzzle {
    /// Creates an empty puzzle with `size` rows.
    pub fn new(size: usize) -> Result<Self> {
        if size < 2 {
            return Err(Error::InvalidArgument(format!(
                "puzzle size must be at least 2, got {size}"
            )));
        }
        Ok(Self {
            size,
            variables: im::HashMap::new(),
            order: im::Vector::new(),
            categories: im::HashMap::new(),
            constraints: Vec::new(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Declares a category: `size` fresh variables `tag1..tagN` plus the
    /// implicit all-different over them.
    pub fn add_category(&mut self, tag: &str) -> Result<()> {
        if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Error::InvalidArgument(format!(
                "category tag must match [A-Za-z]+, got `{tag}`"
            )));
        }
        if self.categories.contains_key(tag) {
            return Err(Error::DuplicateCategory(tag.to_string()));
        }

        let mut names = im::Vector::new();
        for rank in 1..=self.size {
            let name = format!("{tag}{rank}");
            self.variables
                .insert(name.clone(), Variable::new(name.clone(), self.size));
            self.order.push_back(name.clone());
            names.push_back(name);
        }
        self.categories.insert(tag.to_string(), names.clone());

        self.constraints.push(Arc::new(
            crate::solver::constraints::all_different::AllDifferent::new(
                names.into_iter().collect(),
            ),
        ));
        Ok(())
    }

    /// Appends a clue constraint. Order is preserved; propagation visits
    /// constraints in insertion order.
    pub fn add_constraint<C: Constraint + 'static>(&mut self, constraint: C) {
        self.constraints.push(Arc::new(constraint));
    }

    pub fn variable(&self, name: &str) -> Result<&Variable> {
        self.variables
            .get(name)
            .ok_or_else(|| Error::UnknownVariable(name.to_string()))
    }

    pub(crate) fn variable_mut(&mut self, name: &str) -> Result<&mut Variable> {
        self.variables
            .get_mut(name)
            .ok_or_else(|| Error::UnknownVariable(name.to_string()))
    }

    /// Variable names in declaration order.
    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Category tags in declaration order of their variables.
    pub fn category_tags(&self) -> impl Iterator<Item = &str> {
        // The order vector interleaves categories; recover each tag at its
        // first variable.
        self.order
            .iter()
            .step_by(self.size)
            .map(|name| name.trim_end_matches(|c: char| c.is_ascii_digit()))
    }

    /// The ranks `k` (1-based) such that `<category><k>` still has `row` in
    /// its domain.
    pub fn ranks_possible_for_row(&self, category: &str, row: usize) -> Result<Vec<usize>> {
        let names = self
            .categories
            .get(category)
            .ok_or_else(|| Error::UnknownCategory(category.to_string()))?;
        let mut ranks = Vec::new();
        for (idx, name) in names.iter().enumerate() {
            if self.variable(name)?.domain().contains(row) {
                ranks.push(idx + 1);
            }
        }
        Ok(ranks)
    }

    pub(crate) fn constraints(&self) -> &[Arc<dyn Constraint>] {
        &self.constraints
    }

    /// True iff every variable's domain is a singleton.
    pub fn is_complete(&self) -> bool {
        self.variables.values().all(Variable::is_assigned)
    }
}
