use crate::ast::*;

/// A builder for a `MATCH` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub(crate) pattern: NodePattern,
    pub(crate) optional: bool,
    pub(crate) conditions: ConditionTree,
}

impl Match {
    /// Matches the given node pattern.
    ///
    /// ```rust
    /// # use cypher_builder::{ast::*, visitor::{Visitor, Cypher}};
    /// let mut variables = VariableAllocator::new();
    /// let this = variables.named("this");
    ///
    /// let query = Cypher::build(Match::new(NodePattern::new(&this).label("Movie")));
    /// assert_eq!("MATCH (this:Movie)", query.text);
    /// ```
    pub fn new(pattern: NodePattern) -> Self {
        Self {
            pattern,
            optional: false,
            conditions: ConditionTree::default(),
        }
    }

    /// Turns the clause into an `OPTIONAL MATCH`.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Adds a `WHERE` condition. Multiple conditions are joined with `AND`.
    pub fn so_that(mut self, condition: Condition) -> Self {
        self.conditions = self.conditions.and(condition);
        self
    }

    pub fn pattern(&self) -> &NodePattern {
        &self.pattern
    }
}

impl From<Match> for Clause {
    fn from(m: Match) -> Self {
        Clause::Match(m)
    }
}
